/// Resolve a pin level to "pressed" for the given polarity.
pub fn is_pressed(pin_high: bool, active_low: bool) -> bool {
    pin_high != active_low
}

/// `true` only on the tick the button goes from released to pressed.
pub fn press_edge(was_pressed: bool, pressed: bool) -> bool {
    pressed && !was_pressed
}
