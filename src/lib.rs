//! smart-meter - three-channel utility monitor.
//!
//! Samples electricity, gas and water usage sensors once per tick, prints
//! their values on a text display, flags readings at or over their alarm
//! threshold (alert color + blinking LED) and lets a pushbutton switch every
//! channel between usage-rate and cost-rate units.
//!
//! Everything here is hardware independent: the ADC, the display and the
//! GPIO pins are injected, so the whole loop runs on the host.
//!
//! Usage: `cargo test` (host) or `cargo build --release --features embedded
//! --target thumbv7em-none-eabihf` (firmware).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

// ═══════════════════════════════════════════════════════════════════════════
// Core logic
// ═══════════════════════════════════════════════════════════════════════════

pub mod alarm;
pub mod config;
pub mod error;
pub mod indicator;
pub mod mode;
pub mod monitor;
pub mod sensor;
pub mod ui;

pub use alarm::{is_alarmed, Thresholds};
pub use error::Error;
pub use indicator::{Indicator, IndicatorDrive};
pub use mode::{convert, label, DisplayMode};
pub use monitor::{ChannelStatus, Monitor, TickReport};
pub use sensor::{AnalogSource, ChannelId, SensorChannel};
pub use ui::buttons::{ButtonTrigger, ModeButton};
pub use ui::{TextColor, TextDisplay};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - cross-module behaviour
// ═══════════════════════════════════════════════════════════════════════════
