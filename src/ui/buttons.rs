//! Mode pushbutton.
//!
//! The button is polled once per tick, no debouncing. In
//! [`ButtonTrigger::Level`] a held button toggles the mode on every tick it
//! is seen pressed; [`ButtonTrigger::Edge`] keeps the previous level and
//! only fires on a released → pressed transition.

use embedded_hal::digital::InputPin;

use super::input_logic;

/// When a pressed button requests a mode change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonTrigger {
    /// Every tick the button reads pressed.
    #[default]
    Level,
    /// Only the first tick of each press.
    Edge,
}

/// Mode button on a GPIO input.
pub struct ModeButton<P> {
    pin: P,
    active_low: bool,
    trigger: ButtonTrigger,
    was_pressed: bool,
}

impl<P: InputPin> ModeButton<P> {
    pub fn new(pin: P, active_low: bool, trigger: ButtonTrigger) -> Self {
        Self {
            pin,
            active_low,
            trigger,
            was_pressed: false,
        }
    }

    /// Sample the pin once and report whether the mode should toggle.
    ///
    /// On a read error the edge detector state is left untouched.
    pub fn poll(&mut self) -> Result<bool, P::Error> {
        let pressed = input_logic::is_pressed(self.pin.is_high()?, self.active_low);
        let fire = match self.trigger {
            ButtonTrigger::Level => pressed,
            ButtonTrigger::Edge => input_logic::press_edge(self.was_pressed, pressed),
        };
        self.was_pressed = pressed;
        Ok(fire)
    }

    pub fn trigger(&self) -> ButtonTrigger {
        self.trigger
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct Level(bool);

    impl ErrorType for Level {
        type Error = Infallible;
    }

    impl InputPin for Level {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    fn poll_sequence(button: &mut ModeButton<Level>, levels: &[bool]) -> [bool; 4] {
        let mut out = [false; 4];
        for (slot, &high) in out.iter_mut().zip(levels) {
            button.pin_mut().0 = high;
            *slot = button.poll().unwrap();
        }
        out
    }

    #[test]
    fn level_trigger_fires_while_held() {
        let mut button = ModeButton::new(Level(false), false, ButtonTrigger::Level);
        let fired = poll_sequence(&mut button, &[true, true, false, true]);
        assert_eq!(fired, [true, true, false, true]);
    }

    #[test]
    fn edge_trigger_fires_once_per_press() {
        let mut button = ModeButton::new(Level(false), false, ButtonTrigger::Edge);
        let fired = poll_sequence(&mut button, &[true, true, false, true]);
        assert_eq!(fired, [true, false, false, true]);
    }

    #[test]
    fn active_low_button_reads_low_as_pressed() {
        let mut button = ModeButton::new(Level(true), true, ButtonTrigger::Level);
        assert!(!button.poll().unwrap());
        button.pin_mut().0 = false;
        assert!(button.poll().unwrap());
    }
}
