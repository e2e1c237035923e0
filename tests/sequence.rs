mod common;

mod tests {
    use embassy_time::Duration;
    use light_sequencer::{
        Animation, ColorTransitionAnimation, Error, REPLAY_FOREVER, ScheduleState,
        ScheduledAnimation, Segment, Sequence, Tick, WipeAnimation,
    };

    use crate::common::{BLACK, BLUE, GREEN, RED};

    fn at(millis: u32) -> Tick {
        Tick::from_millis(millis)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn wipe(start: usize, duration: u64) -> Animation {
        WipeAnimation::new(Segment::new(start, 10), ms(duration), RED).into()
    }

    #[test]
    fn test_scheduled_animation_waits_for_delay() {
        let mut frame = [BLUE; 4];
        let fill: Animation =
            ColorTransitionAnimation::new(Segment::new(0, 4), ms(0), GREEN).unwrap().into();
        let mut scheduled = ScheduledAnimation::new(fill, ms(300), at(100));

        assert!(scheduled.update(at(100), &mut frame));
        assert!(scheduled.update(at(399), &mut frame));
        assert_eq!(scheduled.state(), ScheduleState::Waiting);
        assert_eq!(frame, [BLUE; 4]);

        // The delay ran out, the animation starts and renders on the same tick
        assert!(!scheduled.update(at(400), &mut frame));
        assert_eq!(scheduled.state(), ScheduleState::Done);
        assert_eq!(frame, [GREEN; 4]);

        assert!(!scheduled.update(at(500), &mut frame));
    }

    #[test]
    fn test_scheduled_animation_restarts_clock_after_delay() {
        let mut frame = [BLACK; 10];
        let mut scheduled = ScheduledAnimation::new(wipe(0, 1000), ms(500), at(0));

        assert!(scheduled.update(at(500), &mut frame));
        assert_eq!(scheduled.state(), ScheduleState::Running);
        assert_eq!(scheduled.animation().clock().start_time(), at(500));
        assert_eq!(frame, [BLACK; 10]);

        assert!(scheduled.update(at(1000), &mut frame));
        assert_eq!(frame[..5], [RED; 5]);
        assert_eq!(frame[5..], [BLACK; 5]);

        assert!(!scheduled.update(at(1500), &mut frame));
        assert_eq!(scheduled.state(), ScheduleState::Done);
    }

    #[test]
    fn test_scheduled_animation_reset() {
        let mut frame = [BLACK; 10];
        let mut scheduled = ScheduledAnimation::new(wipe(0, 100), ms(0), at(0));
        assert!(scheduled.update(at(0), &mut frame));
        assert!(!scheduled.update(at(100), &mut frame));

        scheduled.reset(at(1000));
        assert_eq!(scheduled.state(), ScheduleState::Waiting);
        assert!(scheduled.update(at(1050), &mut frame));
        assert_eq!(scheduled.state(), ScheduleState::Running);
    }

    #[test]
    fn test_sequence_rejects_mismatched_lengths() {
        let animations = [wipe(0, 200), wipe(10, 200)];
        let delays = [ms(0), ms(100), ms(200)];
        let result = Sequence::<4>::new(&animations, &delays, 1);
        assert_eq!(
            result.unwrap_err(),
            Error::LengthMismatch {
                animations: 2,
                delays: 3
            }
        );
    }

    #[test]
    fn test_sequence_rejects_too_many_steps() {
        let animations = [wipe(0, 100), wipe(0, 100), wipe(0, 100)];
        let delays = [ms(0); 3];
        let result = Sequence::<2>::new(&animations, &delays, 1);
        assert_eq!(
            result.unwrap_err(),
            Error::TooManySteps {
                steps: 3,
                capacity: 2
            }
        );
    }

    #[test]
    fn test_sequence_delays_and_replays() {
        let mut frame = [BLUE; 20];
        let mut sequence =
            Sequence::<4>::new(&[wipe(0, 200), wipe(10, 200)], &[ms(0), ms(500)], 2).unwrap();
        assert_eq!(sequence.current_replay(), 0);
        sequence.reset(at(0));
        assert_eq!(sequence.current_replay(), 1);

        let mut finished_at = None;
        let mut second_started_at = None;
        for t in (0..3000).step_by(20) {
            let second_before = frame[10..].to_vec();
            let running = sequence.update(at(t), &mut frame);
            if t < 500 {
                assert_eq!(frame[10..], [BLUE; 10]);
            }
            if second_started_at.is_none() && frame[10..] != second_before[..] && t >= 500 {
                second_started_at = Some(t);
            }
            if !running {
                finished_at = Some(t);
                break;
            }
        }

        assert_eq!(second_started_at, Some(500));
        // Second pass starts at 700 and its last step ends 700 ms later
        assert_eq!(finished_at, Some(1400));
        assert_eq!(sequence.current_replay(), 2);
        assert_eq!(sequence.pending_steps(), 0);
    }

    #[test]
    fn test_sequence_replay_once() {
        let mut frame = [BLACK; 10];
        let mut sequence = Sequence::<2>::new(&[wipe(0, 100)], &[ms(0)], 1).unwrap();
        sequence.reset(at(0));

        assert!(sequence.update(at(0), &mut frame));
        assert!(!sequence.update(at(100), &mut frame));
        assert_eq!(frame, [RED; 10]);
    }

    #[test]
    fn test_sequence_starts_on_first_update() {
        let mut frame = [BLACK; 10];
        let mut sequence = Sequence::<2>::new(&[wipe(0, 100)], &[ms(0)], 1).unwrap();

        let mut finished_at = None;
        for t in (0..1000).step_by(20) {
            if !sequence.update(at(t), &mut frame) {
                finished_at = Some(t);
                break;
            }
        }

        assert_eq!(finished_at, Some(100));
        assert_eq!(sequence.current_replay(), 1);
        assert_eq!(frame, [RED; 10]);
    }

    #[test]
    fn test_scheduled_delay_across_tick_wrap() {
        let mut frame = [BLUE; 10];
        let mut scheduled = ScheduledAnimation::new(wipe(0, 1000), ms(300), at(u32::MAX - 100));

        assert!(scheduled.update(at(u32::MAX), &mut frame));
        assert!(scheduled.update(at(198), &mut frame));
        assert_eq!(scheduled.state(), ScheduleState::Waiting);
        assert_eq!(frame, [BLUE; 10]);

        assert!(scheduled.update(at(199), &mut frame));
        assert_eq!(scheduled.state(), ScheduleState::Running);
        assert_eq!(scheduled.animation().clock().start_time(), at(199));
        assert_eq!(frame, [BLACK; 10]);
    }

    #[test]
    fn test_sequence_replays_forever() {
        let mut frame = [BLACK; 10];
        let mut sequence = Sequence::<2>::new(&[wipe(0, 100)], &[ms(0)], REPLAY_FOREVER).unwrap();
        sequence.reset(at(0));

        for t in (0..10_000).step_by(20) {
            assert!(sequence.update(at(t), &mut frame));
        }
        assert!(sequence.current_replay() > 10);
    }

    #[test]
    fn test_sequence_restarts_members_on_replay() {
        let mut frame = [GREEN; 10];
        let fade: Animation =
            ColorTransitionAnimation::new(Segment::new(0, 10), ms(100), BLACK).unwrap().into();
        let mut sequence = Sequence::<1>::new(&[fade], &[ms(0)], 2).unwrap();
        sequence.reset(at(0));

        assert!(sequence.update(at(0), &mut frame));
        assert!(sequence.update(at(100), &mut frame));
        assert_eq!(frame, [BLACK; 10]);
        assert_eq!(sequence.current_replay(), 2);

        // The second pass samples the segment again
        frame = [GREEN; 10];
        assert!(sequence.update(at(120), &mut frame));
        assert_eq!(frame, [GREEN; 10]);
        assert!(sequence.update(at(170), &mut frame));
        assert_eq!(frame[0].g, 127);
    }

    #[test]
    fn test_empty_sequence_counts_passes() {
        let mut frame = [BLACK; 1];
        let mut sequence = Sequence::<1>::new(&[], &[], 3).unwrap();
        sequence.reset(at(0));

        assert!(sequence.update(at(20), &mut frame));
        assert!(sequence.update(at(40), &mut frame));
        assert!(!sequence.update(at(60), &mut frame));
    }
}
