mod tests {
    use light_sequencer::math::{lerp8, portion};

    #[test]
    fn test_portion() {
        assert_eq!(portion(10, 0, 1000), 0);
        assert_eq!(portion(10, 500, 1000), 5);
        assert_eq!(portion(10, 999, 1000), 9);
        assert_eq!(portion(10, 1000, 1000), 10);
        assert_eq!(portion(10, 5000, 1000), 10);
        assert_eq!(portion(12, 250, 1200), 2);
    }

    #[test]
    fn test_portion_zero_total() {
        assert_eq!(portion(7, 0, 0), 7);
    }

    #[test]
    fn test_lerp8() {
        assert_eq!(lerp8(0, 255, 0, 1000), 0);
        assert_eq!(lerp8(0, 255, 500, 1000), 127);
        assert_eq!(lerp8(0, 255, 1000, 1000), 255);
        assert_eq!(lerp8(100, 200, 250, 1000), 125);
        assert_eq!(lerp8(42, 0, 10, 0), 0);
    }

    #[test]
    fn test_lerp8_truncates_toward_zero() {
        // 255 * 333 / 1000 = 84.9
        assert_eq!(lerp8(0, 255, 333, 1000), 84);
        // 255 - 84.915 = 170.085
        assert_eq!(lerp8(255, 0, 333, 1000), 170);
        assert_eq!(lerp8(255, 0, 500, 1000), 127);
        assert_eq!(lerp8(200, 100, 15, 1000), 198);
    }
}
