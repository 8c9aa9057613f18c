mod tests {
    use cct_dimmer::{
        Duration, FADE_STEPS, FadeSchedule, IntensityDriver, Sleep, WhiteColor, fade,
    };

    #[derive(Default)]
    struct RecordingDriver {
        writes: Vec<WhiteColor>,
    }

    impl IntensityDriver for RecordingDriver {
        fn apply(&mut self, color: WhiteColor) {
            self.writes.push(color);
        }
    }

    #[derive(Default)]
    struct RecordingSleep {
        sleeps: Vec<Duration>,
    }

    impl Sleep for RecordingSleep {
        fn sleep(&mut self, duration: Duration) {
            self.sleeps.push(duration);
        }
    }

    #[test]
    fn test_schedule_length() {
        let schedule = FadeSchedule::new(WhiteColor::new(10, 10), WhiteColor::new(200, 30));
        assert_eq!(schedule.len(), usize::from(FADE_STEPS) + 1);
        assert_eq!(schedule.count(), 51);
    }

    #[test]
    fn test_schedule_truncates_delta() {
        let schedule = FadeSchedule::new(WhiteColor::OFF, WhiteColor::new(128, 128));
        assert_eq!(schedule.delta(), (2, 2));
        let steps: Vec<_> = schedule.collect();
        assert_eq!(steps[0], WhiteColor::new(1, 1));
        assert_eq!(steps[1], WhiteColor::new(2, 2));
        assert_eq!(steps[50], WhiteColor::new(100, 100));
    }

    #[test]
    fn test_schedule_never_reaches_zero() {
        let schedule = FadeSchedule::new(WhiteColor::new(255, 255), WhiteColor::OFF);
        assert_eq!(schedule.delta(), (-5, -5));
        let steps: Vec<_> = schedule.collect();
        assert_eq!(steps[0], WhiteColor::new(255, 255));
        assert_eq!(steps[50], WhiteColor::new(5, 5));
        assert!(steps.iter().all(|c| c.cold >= 1 && c.warm >= 1));
    }

    #[test]
    fn test_step_delay() {
        assert_eq!(
            FadeSchedule::step_delay(Duration::from_millis(500)),
            Duration::from_millis(10)
        );
        assert_eq!(
            FadeSchedule::step_delay(Duration::from_millis(1000)),
            Duration::from_millis(20)
        );
    }

    #[test]
    fn test_fade_ends_exactly_on_target() {
        let pairs = [
            (WhiteColor::OFF, WhiteColor::new(128, 128)),
            (WhiteColor::new(255, 255), WhiteColor::OFF),
            (WhiteColor::new(192, 108), WhiteColor::new(1, 5)),
            (WhiteColor::new(1, 5), WhiteColor::new(200, 100)),
            (WhiteColor::new(3, 250), WhiteColor::new(251, 7)),
        ];
        for (start, stop) in pairs {
            let mut driver = RecordingDriver::default();
            let mut sleeper = RecordingSleep::default();
            fade(&mut driver, &mut sleeper, start, stop, Duration::from_millis(500));
            assert_eq!(driver.writes.len(), 52);
            assert_eq!(driver.writes.last(), Some(&stop));
        }
    }

    #[test]
    fn test_fade_sleeps_after_every_step() {
        let mut driver = RecordingDriver::default();
        let mut sleeper = RecordingSleep::default();
        fade(
            &mut driver,
            &mut sleeper,
            WhiteColor::new(255, 1),
            WhiteColor::new(1, 255),
            Duration::from_millis(500),
        );
        assert_eq!(sleeper.sleeps.len(), 51);
        assert!(sleeper.sleeps.iter().all(|d| *d == Duration::from_millis(10)));
    }

    #[test]
    fn test_fade_equal_endpoints_runs_all_steps() {
        let color = WhiteColor::new(40, 80);
        let mut driver = RecordingDriver::default();
        let mut sleeper = RecordingSleep::default();
        fade(&mut driver, &mut sleeper, color, color, Duration::from_millis(500));
        assert_eq!(driver.writes.len(), 52);
        assert!(driver.writes.iter().all(|c| *c == color));
        assert_eq!(sleeper.sleeps.len(), 51);
    }
}
