//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, alarm thresholds and
//! screen layout live here so they can be tuned in one place.

use crate::ui::buttons::ButtonTrigger;

// Sampling

/// Number of metered utilities (electricity, gas, water).
pub const CHANNEL_COUNT: usize = 3;

/// Delay between the end of one tick and the start of the next (ms).
/// Alarm LEDs toggle once per tick, so this is also the blink half-period.
pub const TICK_INTERVAL_MS: u32 = 1000;

// Alarms
//
// Thresholds are raw ADC counts. All three start from the same value; keep
// them separate so a channel can be retuned on its own.

/// Shared default alarm threshold (raw counts).
pub const DEFAULT_ALARM_THRESHOLD: u16 = 1024;

pub const ELECTRICITY_ALARM_THRESHOLD: u16 = DEFAULT_ALARM_THRESHOLD;
pub const GAS_ALARM_THRESHOLD: u16 = DEFAULT_ALARM_THRESHOLD;
pub const WATER_ALARM_THRESHOLD: u16 = DEFAULT_ALARM_THRESHOLD;

// Unit conversion

/// Raw counts per displayed unit in usage-rate mode (4096 counts -> 409).
pub const USAGE_RATE_DIVISOR: u16 = 10;

/// Raw counts per displayed unit in cost-rate mode (4096 counts -> 40).
pub const COST_RATE_DIVISOR: u16 = 100;

// Mode button

/// The nRF52840-DK buttons pull the pin to ground when pressed.
pub const BUTTON_ACTIVE_LOW: bool = true;

/// Level: toggle on every tick the button is held.
/// Edge: toggle once per press.
pub const BUTTON_TRIGGER: ButtonTrigger = ButtonTrigger::Level;

// Screen layout
//
//   line 0   border
//   line 1   title
//   line 2   border
//   line 3   electricity caption
//   line 4   electricity value
//   line 5   border
//   line 6   gas caption
//   line 7   gas value
//   line 8   border
//   line 9   water caption
//   line 10  water value

/// Number of text lines in the layout.
pub const LINE_COUNT: u8 = 11;

/// Widest line the layout ever writes (characters).
pub const LINE_WIDTH: usize = 28;

pub const TITLE_LINE: u8 = 1;
pub const BORDER_LINES: [u8; 4] = [0, 2, 5, 8];

pub const BORDER: &str = "----------------------------";
pub const TITLE: &str = "    SMART METER READINGS";

/// Leading blanks before a value; the number sits right-aligned after them.
pub const VALUE_INDENT: usize = 17;

/// Minimum width of the right-aligned value field.
pub const VALUE_WIDTH: usize = 4;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Electricity sensor → P0.02 (AIN0)
//   Gas sensor         → P0.03 (AIN1)
//   Water sensor       → P0.04 (AIN2)
//   Electricity LED    → P1.01
//   Gas LED            → P1.02
//   Water LED          → P1.03
//   Mode button        → P0.11 (Button 1)
//   I²C SDA            → P0.26
//   I²C SCL            → P0.27
