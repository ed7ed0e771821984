//! Integration tests for the static color table and output drivers

mod common;
use common::*;

use rgb_status_indicator::static_color::{levels_for_raw, set_static_color};
use rgb_status_indicator::{
    Channel, ChannelLevels, NamedColor, OutputDriver, Polarity, PwmOutput, Srgb,
};

#[test]
fn named_colors_produce_documented_levels() {
    let table = [
        (NamedColor::Red, ChannelLevels::new(true, false, false)),
        (NamedColor::Green, ChannelLevels::new(false, true, false)),
        (NamedColor::Blue, ChannelLevels::new(false, false, true)),
        (NamedColor::Yellow, ChannelLevels::new(true, true, false)),
        (NamedColor::Magenta, ChannelLevels::new(true, false, true)),
        (NamedColor::Cyan, ChannelLevels::new(false, true, true)),
    ];

    for (color, expected) in table {
        let mut driver = OutputDriver::new(MockOutput::new());
        set_static_color(&mut driver, color);

        assert_eq!(driver.output().writes().len(), 3);
        assert_eq!(driver.output().last_levels(), Some(expected), "{:?}", color);
    }
}

#[test]
fn unknown_raw_color_falls_back_to_all_on() {
    for raw in 6..=u8::MAX {
        assert_eq!(levels_for_raw(raw), ChannelLevels::ALL_ON);
    }

    let mut driver = OutputDriver::new(MockOutput::new());
    set_static_color(&mut driver, NamedColor::from_raw(99));
    assert_eq!(driver.output().last_levels(), Some(ChannelLevels::ALL_ON));
}

#[test]
fn static_color_is_idempotent() {
    let mut driver = OutputDriver::new(MockOutput::new());
    set_static_color(&mut driver, NamedColor::Magenta);
    set_static_color(&mut driver, NamedColor::Magenta);

    let writes = driver.output().writes();
    assert_eq!(writes.len(), 6);
    assert_eq!(writes[..3], writes[3..]);
}

#[test]
fn setup_configures_lines_then_forces_off() {
    let mut driver = OutputDriver::new(MockOutput::new());
    driver.setup();

    assert_eq!(
        driver.output().writes(),
        &[
            Write::Configure(Channel::Red),
            Write::Configure(Channel::Green),
            Write::Configure(Channel::Blue),
            Write::Digital(Channel::Red, false),
            Write::Digital(Channel::Green, false),
            Write::Digital(Channel::Blue, false),
        ]
    );
}

#[test]
fn failed_write_is_counted_and_remaining_channels_still_written() {
    let mut driver = OutputDriver::new(MockOutput::failing_on(Channel::Green));
    set_static_color(&mut driver, NamedColor::Cyan);

    assert_eq!(driver.failed_writes(), 1);
    assert_eq!(
        driver.output().last_levels(),
        Some(ChannelLevels::new(false, true, true))
    );
}

#[test]
fn set_color_writes_intensities_in_rgb_order() {
    let mut driver = OutputDriver::new(MockOutput::new());
    driver.set_color(Srgb::new(10, 20, 30));

    assert_eq!(
        driver.output().writes(),
        &[
            Write::Intensity(Channel::Red, 10),
            Write::Intensity(Channel::Green, 20),
            Write::Intensity(Channel::Blue, 30),
        ]
    );
}

#[test]
fn active_low_pwm_reproduces_common_anode_pin_levels() {
    let output = PwmOutput::new(MockPwm::new(), MockPwm::new(), MockPwm::new(), Polarity::ActiveLow);
    let mut driver = OutputDriver::new(output);

    // Red lit on a common-anode LED: red line low, green and blue high
    set_static_color(&mut driver, NamedColor::Red);
    let (r, g, b) = driver.into_inner().release();
    assert!(!r.is_high());
    assert!(g.is_high());
    assert!(b.is_high());
}

#[test]
fn active_high_pwm_scales_intensity_onto_duty() {
    let output = PwmOutput::new(MockPwm::new(), MockPwm::new(), MockPwm::new(), Polarity::ActiveHigh);
    let mut driver = OutputDriver::new(output);

    driver.set_color(Srgb::new(127, 0, 255));
    let (r, g, b) = driver.into_inner().release();
    assert_eq!(r.duty, 127);
    assert_eq!(g.duty, 0);
    assert_eq!(b.duty, 255);
}

#[test]
fn active_low_pwm_inverts_intensity() {
    let output = PwmOutput::new(MockPwm::new(), MockPwm::new(), MockPwm::new(), Polarity::ActiveLow);
    let mut driver = OutputDriver::new(output);

    driver.set_color(Srgb::new(0, 55, 255));
    let (r, g, b) = driver.into_inner().release();
    assert_eq!(r.duty, 255);
    assert_eq!(g.duty, 200);
    assert_eq!(b.duty, 0);
}

#[test]
fn pwm_failure_surfaces_as_counted_write_error() {
    let output = PwmOutput::new(MockPwm::new(), MockPwm::failing(), MockPwm::new(), Polarity::ActiveHigh);
    let mut driver = OutputDriver::new(output);

    driver.turn_on();
    assert_eq!(driver.failed_writes(), 1);

    let (r, g, b) = driver.into_inner().release();
    assert!(r.is_high());
    assert!(!g.is_high());
    assert!(b.is_high());
}
