//! Alarm indicator LEDs.
//!
//! Each channel owns one output. While the channel is alarmed the output is
//! toggled once per tick, so the blink rate is tied to the tick interval;
//! otherwise it is held high.

use embedded_hal::digital::StatefulOutputPin;

/// What the indicator was told to do on the last tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorDrive {
    /// Held at the active level.
    Steady,
    /// Flipped from its previous level.
    Blink,
}

/// Indicator output for one channel.
pub struct Indicator<L> {
    pin: L,
}

impl<L: StatefulOutputPin> Indicator<L> {
    pub fn new(pin: L) -> Self {
        Self { pin }
    }

    /// Drive the output for this tick's alarm state.
    pub fn drive(&mut self, alarmed: bool) -> Result<IndicatorDrive, L::Error> {
        if alarmed {
            self.pin.toggle()?;
            Ok(IndicatorDrive::Blink)
        } else {
            self.pin.set_high()?;
            Ok(IndicatorDrive::Steady)
        }
    }

    pub fn pin(&self) -> &L {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut L {
        &mut self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType, OutputPin};

    #[derive(Default)]
    struct Led {
        high: bool,
    }

    impl ErrorType for Led {
        type Error = Infallible;
    }

    impl OutputPin for Led {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for Led {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn alarm_blinks_and_clear_holds_high() {
        let mut indicator = Indicator::new(Led::default());

        assert_eq!(indicator.drive(true).unwrap(), IndicatorDrive::Blink);
        assert!(indicator.pin().high);
        assert_eq!(indicator.drive(true).unwrap(), IndicatorDrive::Blink);
        assert!(!indicator.pin().high);

        assert_eq!(indicator.drive(false).unwrap(), IndicatorDrive::Steady);
        assert!(indicator.pin().high);
        indicator.drive(false).unwrap();
        assert!(indicator.pin().high);
    }
}
