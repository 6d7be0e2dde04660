//! smart-meter firmware for the nRF52840-DK.
//!
//! Brings up the SAADC, the SSD1306 OLED, the mode button and the three
//! alarm LEDs, draws the static frame and then hands everything to the
//! monitor loop, which never returns.

#![no_std]
#![no_main]

mod board;

use board::{OledDisplay, SaadcSource};
use cortex_m_rt::entry;
use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::Delay;
use panic_probe as _;
use smart_meter::config;
use smart_meter::{ModeButton, Monitor, Thresholds};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[entry]
fn main() -> ! {
    info!("smart-meter starting");
    let p = embassy_nrf::init(Default::default());

    // Sensors: electricity, gas, water on AIN0..AIN2.
    let adc = Saadc::new(
        p.SAADC,
        Irqs,
        saadc::Config::default(),
        [
            ChannelConfig::single_ended(p.P0_02),
            ChannelConfig::single_ended(p.P0_03),
            ChannelConfig::single_ended(p.P0_04),
        ],
    );
    let source = SaadcSource::new(adc);

    let button = ModeButton::new(
        Input::new(p.P0_11, Pull::Up),
        config::BUTTON_ACTIVE_LOW,
        config::BUTTON_TRIGGER,
    );

    // Alarm LEDs: electricity, gas, water.
    let led = |pin: AnyPin| Output::new(pin, Level::Low, OutputDrive::Standard);
    let indicators = [
        led(AnyPin::from(p.P1_01)),
        led(AnyPin::from(p.P1_02)),
        led(AnyPin::from(p.P1_03)),
    ];

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let display = unwrap!(OledDisplay::init(i2c));

    let mut monitor = Monitor::new(source, button, indicators, display, Thresholds::default());
    unwrap!(monitor.draw_frame());
    info!("Monitoring, tick {} ms", config::TICK_INTERVAL_MS);

    monitor.run(&mut Delay)
}
