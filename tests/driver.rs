mod tests {
    use core::convert::Infallible;

    use cct_dimmer::driver::{IntensityDriver, PwmDriver, duty_for};
    use cct_dimmer::WhiteColor;
    use embedded_hal::pwm::{ErrorType, SetDutyCycle};

    struct FakePwm {
        max: u16,
        duty: Option<u16>,
    }

    impl FakePwm {
        fn new(max: u16) -> Self {
            Self { max, duty: None }
        }
    }

    impl ErrorType for FakePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = Some(duty);
            Ok(())
        }
    }

    #[test]
    fn test_duty_for_maps_one_to_zero() {
        assert_eq!(duty_for(0), 0);
        assert_eq!(duty_for(1), 0);
        assert_eq!(duty_for(2), 2);
        assert_eq!(duty_for(255), 255);
    }

    #[test]
    fn test_pwm_driver_8bit() {
        let mut driver = PwmDriver::new(FakePwm::new(255), FakePwm::new(255));
        driver.apply(WhiteColor::new(200, 1));
        let (cold, warm) = driver.release();
        assert_eq!(cold.duty, Some(200));
        assert_eq!(warm.duty, Some(0));
    }

    #[test]
    fn test_pwm_driver_scales_to_resolution() {
        let mut driver = PwmDriver::new(FakePwm::new(1000), FakePwm::new(1000));
        driver.apply(WhiteColor::new(255, 51));
        let (cold, warm) = driver.release();
        assert_eq!(cold.duty, Some(1000));
        assert_eq!(warm.duty, Some(200));
    }

    #[test]
    fn test_pwm_driver_off() {
        let mut driver = PwmDriver::new(FakePwm::new(255), FakePwm::new(255));
        driver.apply(WhiteColor::OFF);
        let (cold, warm) = driver.release();
        assert_eq!(cold.duty, Some(0));
        assert_eq!(warm.duty, Some(0));
    }
}
