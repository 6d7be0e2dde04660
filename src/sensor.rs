//! Sensor channels - one per metered utility.
//!
//! A channel pairs a utility with its alarm threshold and remembers the last
//! raw reading that went through a render decision. Readings come from an
//! [`AnalogSource`] so the loop never touches the ADC directly.

use crate::config;
use crate::mode::{self, DisplayMode};

/// Metered utility. Order matches the on-screen order and the tick order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelId {
    Electricity,
    Gas,
    Water,
}

impl ChannelId {
    /// All channels in processing order.
    pub const ALL: [ChannelId; config::CHANNEL_COUNT] =
        [ChannelId::Electricity, ChannelId::Gas, ChannelId::Water];

    /// Position of this channel in per-channel arrays.
    pub const fn index(self) -> usize {
        match self {
            ChannelId::Electricity => 0,
            ChannelId::Gas => 1,
            ChannelId::Water => 2,
        }
    }

    /// Upper-case name used in the caption.
    pub const fn name(self) -> &'static str {
        match self {
            ChannelId::Electricity => "ELECTRICITY",
            ChannelId::Gas => "GAS",
            ChannelId::Water => "WATER",
        }
    }

    /// Display line holding this channel's unit caption.
    pub const fn caption_line(self) -> u8 {
        match self {
            ChannelId::Electricity => 3,
            ChannelId::Gas => 6,
            ChannelId::Water => 9,
        }
    }

    /// Display line holding this channel's value.
    pub const fn value_line(self) -> u8 {
        self.caption_line() + 1
    }
}

/// Source of raw analog readings.
///
/// Implemented by the firmware's SAADC wrapper and by scripted fakes in tests.
/// Readings are plain counts in the converter's native range; out-of-range
/// values are passed through untouched.
pub trait AnalogSource {
    /// Read the current raw value for `channel`.
    fn read(&mut self, channel: ChannelId) -> u16;
}

/// Per-channel state owned by the monitor loop.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorChannel {
    id: ChannelId,
    threshold: u16,
    previous: u16,
    raw: u16,
    displayed: u16,
}

impl SensorChannel {
    /// Create a channel with an empty cache.
    ///
    /// The cache starts at 0, so a first reading of 0 is not rendered.
    pub const fn new(id: ChannelId, threshold: u16) -> Self {
        Self {
            id,
            threshold,
            previous: 0,
            raw: 0,
            displayed: 0,
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Alarm threshold in raw counts.
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Last raw reading committed after a render decision.
    pub fn previous(&self) -> u16 {
        self.previous
    }

    /// Raw reading from the most recent [`update`](Self::update).
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Value shown for the most recent reading under the current mode.
    pub fn displayed(&self) -> u16 {
        self.displayed
    }

    /// Read this channel from `source`. Does not touch the cache.
    pub fn sample<A: AnalogSource>(&self, source: &mut A) -> u16 {
        source.read(self.id)
    }

    /// `true` if `reading` differs from the committed reading.
    pub fn has_changed(&self, reading: u16) -> bool {
        reading != self.previous
    }

    /// Remember `reading` for the next change check.
    ///
    /// Call only once the render decision for `reading` has been made.
    pub fn commit(&mut self, reading: u16) {
        self.previous = reading;
    }

    /// Record the latest reading and derive its displayed value.
    pub(crate) fn update(&mut self, reading: u16, mode: DisplayMode) -> u16 {
        self.raw = reading;
        self.displayed = mode::convert(reading, mode);
        self.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed([u16; 3]);

    impl AnalogSource for Fixed {
        fn read(&mut self, channel: ChannelId) -> u16 {
            self.0[channel.index()]
        }
    }

    #[test]
    fn layout_lines_are_caption_then_value() {
        assert_eq!(ChannelId::Electricity.caption_line(), 3);
        assert_eq!(ChannelId::Electricity.value_line(), 4);
        assert_eq!(ChannelId::Gas.value_line(), 7);
        assert_eq!(ChannelId::Water.value_line(), 10);
    }

    #[test]
    fn sample_reads_own_channel_without_caching() {
        let channel = SensorChannel::new(ChannelId::Gas, 1024);
        let mut source = Fixed([1, 2, 3]);
        assert_eq!(channel.sample(&mut source), 2);
        assert_eq!(channel.previous(), 0);
    }

    #[test]
    fn change_detection_follows_commit() {
        let mut channel = SensorChannel::new(ChannelId::Water, 1024);
        assert!(!channel.has_changed(0));
        assert!(channel.has_changed(500));

        channel.commit(500);
        assert!(!channel.has_changed(500));
        assert!(channel.has_changed(501));
    }

    #[test]
    fn update_derives_displayed_value_from_mode() {
        let mut channel = SensorChannel::new(ChannelId::Electricity, 1024);
        assert_eq!(channel.update(2000, DisplayMode::UsageRate), 200);
        assert_eq!(channel.update(2000, DisplayMode::CostRate), 20);
        assert_eq!(channel.raw(), 2000);
        // update never commits
        assert_eq!(channel.previous(), 0);
    }
}
