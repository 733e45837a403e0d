//! DC motor driver interface and embedded-hal pin implementation.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Command interface of a phase/enable DC motor driver.
///
/// Commands are fire-and-forget: implementations report nothing back, and a
/// driver that fails to act simply loses the command. The controller keeps
/// its own position model and never inspects driver state.
pub trait DcDriver {
    /// Drive toward the inner travel stop on subsequent steps.
    fn set_direction_in(&mut self);

    /// Drive away from the inner travel stop on subsequent steps.
    fn set_direction_out(&mut self);

    /// Set drive strength, 0-255.
    fn set_power(&mut self, level: u8);

    /// Select winding phase 1.
    fn set_phase1(&mut self);

    /// Select winding phase 2.
    fn set_phase2(&mut self);

    /// Enable or disable the output stage.
    fn enable(&mut self, enabled: bool);

    /// Configure the logic level that disables the output stage.
    fn set_disable_state(&mut self, disable_high: bool);

    /// Execute one queued physical step, if the driver is enabled.
    fn poll(&mut self);
}

/// [`DcDriver`] over embedded-hal 1.0 STEP/DIR/EN pins with PWM drive power.
///
/// Pin and direction state are cached so repeated identical commands from
/// the control loop do not touch the pins. Pin errors are swallowed: the
/// driver interface is fire-and-forget.
pub struct PinDriver<STEP, DIR, EN, PWM, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    PWM: SetDutyCycle,
    DELAY: DelayNs,
{
    /// STEP pin (pulsed once per physical step).
    step_pin: STEP,

    /// DIR pin (high = out, low = in).
    dir_pin: DIR,

    /// Enable pin; polarity set by `set_disable_state`.
    en_pin: EN,

    /// PWM channel scaling drive power.
    pwm: PWM,

    /// Delay provider for the step pulse width.
    delay: DELAY,

    /// Logic level that disables the output stage.
    disable_high: bool,

    /// Commanded drive strength, 0-255.
    power: u8,

    /// Phase 2 selected (inverts the duty mapping).
    phase2: bool,

    /// Cached enable state (None until first commanded).
    enabled: Option<bool>,

    /// Cached direction (None until first commanded).
    direction_out: Option<bool>,
}

impl<STEP, DIR, EN, PWM, DELAY> PinDriver<STEP, DIR, EN, PWM, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    PWM: SetDutyCycle,
    DELAY: DelayNs,
{
    /// Create a driver over the given pins.
    pub fn new(step_pin: STEP, dir_pin: DIR, en_pin: EN, pwm: PWM, delay: DELAY) -> Self {
        Self {
            step_pin,
            dir_pin,
            en_pin,
            pwm,
            delay,
            disable_high: false,
            power: 0,
            phase2: false,
            enabled: None,
            direction_out: None,
        }
    }

    /// Release the pins.
    pub fn release(self) -> (STEP, DIR, EN, PWM, DELAY) {
        (self.step_pin, self.dir_pin, self.en_pin, self.pwm, self.delay)
    }

    fn set_direction(&mut self, out: bool) {
        if self.direction_out == Some(out) {
            return;
        }

        if out {
            let _ = self.dir_pin.set_high();
        } else {
            let _ = self.dir_pin.set_low();
        }

        self.direction_out = Some(out);
    }

    fn apply_power(&mut self) {
        // Phase 2 drives the complementary half-bridge: duty inverted.
        let duty = if self.phase2 {
            u8::MAX - self.power
        } else {
            self.power
        };
        let _ = self.pwm.set_duty_cycle_fraction(duty as u16, u8::MAX as u16);
    }
}

impl<STEP, DIR, EN, PWM, DELAY> DcDriver for PinDriver<STEP, DIR, EN, PWM, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    PWM: SetDutyCycle,
    DELAY: DelayNs,
{
    fn set_direction_in(&mut self) {
        self.set_direction(false);
    }

    fn set_direction_out(&mut self) {
        self.set_direction(true);
    }

    fn set_power(&mut self, level: u8) {
        if self.power == level {
            return;
        }
        self.power = level;
        self.apply_power();
    }

    fn set_phase1(&mut self) {
        if self.phase2 {
            self.phase2 = false;
            self.apply_power();
        }
    }

    fn set_phase2(&mut self) {
        if !self.phase2 {
            self.phase2 = true;
            self.apply_power();
        }
    }

    fn enable(&mut self, enabled: bool) {
        if self.enabled == Some(enabled) {
            return;
        }

        let pin_high = enabled != self.disable_high;
        if pin_high {
            let _ = self.en_pin.set_high();
        } else {
            let _ = self.en_pin.set_low();
        }

        self.enabled = Some(enabled);
    }

    fn set_disable_state(&mut self, disable_high: bool) {
        self.disable_high = disable_high;
    }

    fn poll(&mut self) {
        if self.enabled != Some(true) {
            return;
        }

        // Step pulse; a few microseconds is sufficient for driver ICs
        let _ = self.step_pin.set_high();
        self.delay.delay_us(2);
        let _ = self.step_pin.set_low();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    struct FakePwm {
        duty: u16,
    }

    impl embedded_hal::pwm::ErrorType for FakePwm {
        type Error = core::convert::Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            255
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    fn done(pins: (PinMock, PinMock, PinMock, FakePwm, NoopDelay)) -> FakePwm {
        let (mut step, mut dir, mut en, pwm, _) = pins;
        step.done();
        dir.done();
        en.done();
        pwm
    }

    #[test]
    fn test_direction_writes_are_cached() {
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let en = PinMock::new(&[]);
        let mut driver = PinDriver::new(step, dir, en, FakePwm { duty: 0 }, NoopDelay::new());

        driver.set_direction_out();
        driver.set_direction_out();

        done(driver.release());
    }

    #[test]
    fn test_enable_polarity() {
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[]);
        // Default polarity: enabled = high, disabled = low
        let en = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        let mut driver = PinDriver::new(step, dir, en, FakePwm { duty: 0 }, NoopDelay::new());

        driver.enable(true);
        driver.enable(true); // cached, no pin write
        driver.enable(false);

        done(driver.release());
    }

    #[test]
    fn test_enable_inverted_polarity() {
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[]);
        // disable_high: enabled = low
        let en = PinMock::new(&[PinTransaction::set(PinState::Low)]);
        let mut driver = PinDriver::new(step, dir, en, FakePwm { duty: 0 }, NoopDelay::new());

        driver.set_disable_state(true);
        driver.enable(true);

        done(driver.release());
    }

    #[test]
    fn test_poll_pulses_step_only_when_enabled() {
        let step = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        let dir = PinMock::new(&[]);
        let en = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let mut driver = PinDriver::new(step, dir, en, FakePwm { duty: 0 }, NoopDelay::new());

        driver.poll(); // disabled: no pulse
        driver.enable(true);
        driver.poll(); // one pulse

        done(driver.release());
    }

    #[test]
    fn test_power_duty_mapping() {
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[]);
        let en = PinMock::new(&[]);
        let mut driver = PinDriver::new(step, dir, en, FakePwm { duty: 0 }, NoopDelay::new());

        driver.set_power(255);
        let pwm = done(driver.release());
        assert_eq!(pwm.duty, 255);
    }

    #[test]
    fn test_phase2_inverts_duty() {
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[]);
        let en = PinMock::new(&[]);
        let mut driver = PinDriver::new(step, dir, en, FakePwm { duty: 0 }, NoopDelay::new());

        driver.set_power(55);
        driver.set_phase2();
        let pwm = done(driver.release());
        assert_eq!(pwm.duty, 200);
    }
}
