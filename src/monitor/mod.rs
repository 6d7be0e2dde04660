//! Sample / evaluate / render loop.
//!
//! One [`Monitor::tick`] does, in order:
//!
//! 1. sample electricity, gas and water
//! 2. poll the mode button; on a press flip the mode and redraw all captions
//! 3. per channel: convert, and if the raw reading changed, redraw its value
//!    line in the normal or alert color, then commit the reading
//! 4. per channel: blink the indicator if alarmed, otherwise hold it high
//!
//! [`Monitor::run`] repeats ticks forever with a fixed delay in between.
//!
//! Peripheral failures inside a tick are logged and collected in the
//! [`TickReport`]; the rest of the tick still runs.


use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, StatefulOutputPin};
use heapless::Vec;

use crate::alarm::{self, Thresholds};
use crate::config::{self, CHANNEL_COUNT};
use crate::error::Error;
use crate::indicator::{Indicator, IndicatorDrive};
use crate::mode::{self, DisplayMode};
use crate::sensor::{AnalogSource, ChannelId, SensorChannel};
use crate::ui::buttons::ModeButton;
use crate::ui::{self, TextColor, TextDisplay};

/// One slot per fallible step of a tick: button, 3 captions, 3 values,
/// 3 indicators, flush.
pub const MAX_TICK_FAULTS: usize = 11;

/// Outcome of one tick for one channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelStatus {
    pub id: ChannelId,
    pub raw: u16,
    pub displayed: u16,
    pub alarmed: bool,
    /// The value line was redrawn this tick.
    pub rendered: bool,
    /// `None` if driving the output failed.
    pub indicator: Option<IndicatorDrive>,
}

impl ChannelStatus {
    const fn new(id: ChannelId) -> Self {
        Self {
            id,
            raw: 0,
            displayed: 0,
            alarmed: false,
            rendered: false,
            indicator: None,
        }
    }
}

/// Everything one tick observed and did.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Mode in effect after the button check.
    pub mode: DisplayMode,
    pub mode_changed: bool,
    pub channels: [ChannelStatus; CHANNEL_COUNT],
    pub faults: Vec<Error, MAX_TICK_FAULTS>,
}

impl TickReport {
    pub fn channel(&self, id: ChannelId) -> &ChannelStatus {
        &self.channels[id.index()]
    }
}

/// The monitor loop and all the state it owns.
///
/// * `A` - analog source for the three sensors
/// * `B` - mode button input
/// * `L` - indicator outputs (one type for all three)
/// * `D` - text display
pub struct Monitor<A, B, L, D> {
    source: A,
    button: ModeButton<B>,
    channels: [SensorChannel; CHANNEL_COUNT],
    indicators: [Indicator<L>; CHANNEL_COUNT],
    display: D,
    mode: DisplayMode,
}

impl<A, B, L, D> Monitor<A, B, L, D>
where
    A: AnalogSource,
    B: InputPin,
    L: StatefulOutputPin,
    D: TextDisplay,
{
    /// Indicators are given in channel order: electricity, gas, water.
    pub fn new(
        source: A,
        button: ModeButton<B>,
        indicators: [L; CHANNEL_COUNT],
        display: D,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            source,
            button,
            channels: ChannelId::ALL
                .map(|id| SensorChannel::new(id, thresholds.for_channel(id))),
            indicators: indicators.map(Indicator::new),
            display,
            mode: DisplayMode::default(),
        }
    }

    /// Draw the static frame: borders, title and the current captions.
    ///
    /// Runs once at startup; any error is returned so the caller can stop.
    pub fn draw_frame(&mut self) -> Result<(), D::Error> {
        self.display.set_text_color(TextColor::Normal);
        for line in config::BORDER_LINES {
            self.display.display_string_at_line(line, config::BORDER)?;
        }
        self.display
            .display_string_at_line(config::TITLE_LINE, config::TITLE)?;
        for id in ChannelId::ALL {
            let caption = mode::caption(self.mode, id);
            self.display.display_string_at_line(id.caption_line(), &caption)?;
        }
        self.display.flush()?;

        info!("Frame drawn, mode {}", self.mode);
        Ok(())
    }

    /// Run one iteration of the loop.
    pub fn tick(&mut self) -> TickReport {
        let mut faults: Vec<Error, MAX_TICK_FAULTS> = Vec::new();

        let mut readings = [0u16; CHANNEL_COUNT];
        for (reading, channel) in readings.iter_mut().zip(&self.channels) {
            *reading = channel.sample(&mut self.source);
        }
        debug!("Tick: raw {}", readings);

        let mode_changed = match self.button.poll() {
            Ok(pressed) => pressed,
            Err(_) => {
                report(&mut faults, Error::Button);
                false
            }
        };
        if mode_changed {
            let previous = self.mode;
            self.mode.toggle();
            info!("Mode: {} -> {}", previous, self.mode);
            Self::render_captions(&mut self.display, self.mode, &mut faults);
        }

        let mut statuses = ChannelId::ALL.map(ChannelStatus::new);
        for ((status, channel), &raw) in statuses
            .iter_mut()
            .zip(self.channels.iter_mut())
            .zip(readings.iter())
        {
            status.raw = raw;
            status.displayed = channel.update(raw, self.mode);
            status.alarmed = alarm::is_alarmed(raw, channel.threshold());

            if channel.has_changed(raw) {
                if status.alarmed {
                    warn!(
                        "{}: {} at or over threshold {}",
                        channel.id(),
                        raw,
                        channel.threshold()
                    );
                }
                let drawn = Self::render_value(
                    &mut self.display,
                    channel.id(),
                    status.displayed,
                    status.alarmed,
                );
                if drawn.is_err() {
                    report(&mut faults, Error::Display);
                }
                status.rendered = true;
                channel.commit(raw);
            }
        }

        for (status, indicator) in statuses.iter_mut().zip(self.indicators.iter_mut()) {
            match indicator.drive(status.alarmed) {
                Ok(drive) => status.indicator = Some(drive),
                Err(_) => report(&mut faults, Error::Indicator(status.id)),
            }
        }

        let redrawn = mode_changed || statuses.iter().any(|s| s.rendered);
        if redrawn && self.display.flush().is_err() {
            report(&mut faults, Error::Display);
        }

        TickReport {
            mode: self.mode,
            mode_changed,
            channels: statuses,
            faults,
        }
    }

    /// Tick forever, waiting [`config::TICK_INTERVAL_MS`] between ticks.
    pub fn run<T: DelayNs>(&mut self, delay: &mut T) -> ! {
        loop {
            self.tick();
            delay.delay_ms(config::TICK_INTERVAL_MS);
        }
    }

    fn render_captions(
        display: &mut D,
        mode: DisplayMode,
        faults: &mut Vec<Error, MAX_TICK_FAULTS>,
    ) {
        display.set_text_color(TextColor::Normal);
        for id in ChannelId::ALL {
            let caption = mode::caption(mode, id);
            let drawn = display
                .clear_line(id.caption_line())
                .and_then(|()| display.display_string_at_line(id.caption_line(), &caption));
            if drawn.is_err() {
                report(faults, Error::Display);
            }
        }
    }

    fn render_value(
        display: &mut D,
        id: ChannelId,
        displayed: u16,
        alarmed: bool,
    ) -> Result<(), D::Error> {
        display.clear_line(id.value_line())?;
        let color = if alarmed {
            TextColor::Alert
        } else {
            TextColor::Normal
        };
        display.set_text_color(color);
        display.display_string_at_line(id.value_line(), &ui::format_value(displayed))
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn channel(&self, id: ChannelId) -> &SensorChannel {
        &self.channels[id.index()]
    }

    pub fn indicator(&self, id: ChannelId) -> &Indicator<L> {
        &self.indicators[id.index()]
    }

    pub fn source_mut(&mut self) -> &mut A {
        &mut self.source
    }

    pub fn button_mut(&mut self) -> &mut ModeButton<B> {
        &mut self.button
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

fn report(faults: &mut Vec<Error, MAX_TICK_FAULTS>, error: Error) {
    warn!("Tick fault: {}", error);
    let _ = faults.push(error);
}
