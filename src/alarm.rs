//! Alarm thresholds and evaluation.

use crate::config;
use crate::sensor::ChannelId;

/// `true` when `raw` meets or exceeds `threshold`.
pub const fn is_alarmed(raw: u16, threshold: u16) -> bool {
    raw >= threshold
}

/// Per-channel alarm thresholds in raw counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    pub electricity: u16,
    pub gas: u16,
    pub water: u16,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            electricity: config::ELECTRICITY_ALARM_THRESHOLD,
            gas: config::GAS_ALARM_THRESHOLD,
            water: config::WATER_ALARM_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Same threshold on every channel.
    pub const fn uniform(threshold: u16) -> Self {
        Self {
            electricity: threshold,
            gas: threshold,
            water: threshold,
        }
    }

    pub const fn for_channel(&self, id: ChannelId) -> u16 {
        match id {
            ChannelId::Electricity => self.electricity,
            ChannelId::Gas => self.gas,
            ChannelId::Water => self.water,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert!(is_alarmed(1024, 1024));
        assert!(!is_alarmed(1023, 1024));
        assert!(is_alarmed(u16::MAX, 1024));
        assert!(is_alarmed(0, 0));
    }

    #[test]
    fn defaults_are_equal_but_independent() {
        let mut thresholds = Thresholds::default();
        assert_eq!(thresholds, Thresholds::uniform(1024));

        thresholds.gas = 2048;
        assert_eq!(thresholds.for_channel(ChannelId::Electricity), 1024);
        assert_eq!(thresholds.for_channel(ChannelId::Gas), 2048);
        assert_eq!(thresholds.for_channel(ChannelId::Water), 1024);
    }
}
