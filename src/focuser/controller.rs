//! DC focuser motion controller.
//!
//! Owns the motion state machine and the poll/follow loop. Generic over the
//! driver, store, and clock interfaces; one controller instance exclusively
//! owns one driver handle and one store address.

use heapless::String;

use crate::config::units::{MicronsPerSec, Steps};
use crate::config::{FocuserConfig, Phase, StepLimits};
use crate::hal::{DcDriver, MonotonicClock, NonVolatileStore};
use crate::motion::{per_tick_delta, FixedPoint};

use super::builder::FocuserBuilder;
use super::power::PowerState;
use super::tcf::TemperatureCompensation;

/// Idle time after the last position change before the position is written
/// to non-volatile storage: 5 minutes.
pub const WRITE_DELAY_MS: u64 = 1000 * 60 * 5;

/// Default move rate applied at initialization, in microns per second.
const DEFAULT_MOVE_RATE: MicronsPerSec = MicronsPerSec(500.0);

/// Motion controller for a DC-motor-driven focuser.
///
/// All state transitions happen synchronously inside [`advance_target`]
/// (called at the fixed accumulator cadence) and [`follow`] (called every
/// control cycle). Neither call blocks; physical actions self-pace against
/// the millisecond clock, so irregular invocation intervals are tolerated.
///
/// Command inputs are defensively clamped, never rejected.
///
/// [`advance_target`]: Focuser::advance_target
/// [`follow`]: Focuser::follow
pub struct Focuser<D, S, C>
where
    D: DcDriver,
    S: NonVolatileStore,
    C: MonotonicClock,
{
    driver: D,
    store: S,
    clock: C,

    /// Hardware binding applied once; repeated `init` calls are ignored.
    initialized: bool,
    name: String<32>,
    nv_address: u32,
    nv_power_address: Option<u32>,
    steps_per_micron: f32,
    min_rate: f32,
    max_steps_per_sec: f32,
    step_interval_ms: u64,

    limits: StepLimits,
    invert_direction: bool,
    phase: Phase,
    power_per_mm_sec: u8,

    /// Believed real-world position in steps.
    position: i64,
    /// Commanded destination, tracked with sub-step precision.
    target: FixedPoint,
    /// Per-tick target increment; zero means not moving, sign is direction.
    delta: FixedPoint,
    /// Commanded move rate in steps per second.
    move_rate: f32,

    /// Position seen by the previous follow call (change detector).
    last_position: i64,
    /// Last value written to the store (persistence staleness check).
    saved_position: i64,

    power_state: PowerState,
    last_move_ms: u64,
    next_step_due_ms: u64,
    last_step_ms: u64,
    last_poll_ms: u64,
}

impl<D, S, C> Focuser<D, S, C>
where
    D: DcDriver,
    S: NonVolatileStore,
    C: MonotonicClock,
{
    /// Create a builder for binding hardware and configuration.
    pub fn builder() -> FocuserBuilder<D, S, C> {
        FocuserBuilder::new()
    }

    pub(crate) fn new(driver: D, store: S, clock: C) -> Self {
        Self {
            driver,
            store,
            clock,
            initialized: false,
            name: String::new(),
            nv_address: 0,
            nv_power_address: None,
            steps_per_micron: 1.0,
            min_rate: 1.0,
            max_steps_per_sec: 100.0,
            step_interval_ms: 10,
            limits: StepLimits::default(),
            invert_direction: false,
            phase: Phase::One,
            power_per_mm_sec: 0,
            position: 0,
            target: FixedPoint::ZERO,
            delta: FixedPoint::ZERO,
            move_rate: 0.0,
            last_position: 0,
            saved_position: 0,
            power_state: PowerState::Idle,
            last_move_ms: 0,
            next_step_due_ms: 0,
            last_step_ms: 0,
            last_poll_ms: 0,
        }
    }

    /// Bind configuration, recover the persisted position, and arm timing.
    ///
    /// Only the first call takes effect: a controller that has already bound
    /// its hardware parameters ignores repeated requests, so shared startup
    /// paths may call this unconditionally.
    pub fn init(&mut self, config: &FocuserConfig) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        self.name = config.name.clone();
        self.nv_address = config.nv_address;
        self.nv_power_address = config.nv_power_address;
        self.steps_per_micron = config.steps_per_micron;
        self.min_rate = config.min_rate.0;
        self.step_interval_ms = config.step_interval_ms as u64;
        self.max_steps_per_sec = config.max_steps_per_sec();
        self.limits = config.step_limits();
        self.invert_direction = config.invert_direction;
        self.phase = config.phase;

        self.power_per_mm_sec = config.power_per_mm_sec;
        if let Some(address) = self.nv_power_address {
            let stored = self.store.read_long(address);
            if (0..=u8::MAX as i64).contains(&stored) {
                self.power_per_mm_sec = stored as u8;
            }
        }

        // Recover position, constrained to travel
        self.position = self.limits.clamp(self.store.read_long(self.nv_address));
        self.saved_position = self.position;
        self.last_position = self.position;
        self.target = FixedPoint::from_whole(self.position);
        self.delta = FixedPoint::ZERO;

        self.set_move_rate(DEFAULT_MOVE_RATE);

        let now = self.clock.millis();
        self.last_move_ms = now;
        self.next_step_due_ms = now + self.step_interval_ms;
        self.last_step_ms = self.next_step_due_ms;
        self.last_poll_ms = now;
    }

    /// Get the configured axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the current position in steps.
    #[inline]
    pub fn position(&self) -> Steps {
        Steps(self.position)
    }

    /// Get the commanded target's whole part in steps.
    #[inline]
    pub fn target(&self) -> Steps {
        Steps(self.target.whole())
    }

    /// Get the step size in microns.
    #[inline]
    pub fn steps_per_micron(&self) -> f32 {
        self.steps_per_micron
    }

    /// Minimum position in steps.
    #[inline]
    pub fn min(&self) -> Steps {
        Steps(self.limits.min_steps)
    }

    /// Maximum position in steps.
    #[inline]
    pub fn max(&self) -> Steps {
        Steps(self.limits.max_steps)
    }

    /// Set the minimum position in steps; takes effect on the next clamp.
    pub fn set_min(&mut self, min: Steps) {
        self.limits.min_steps = min.0;
    }

    /// Set the maximum position in steps; takes effect on the next clamp.
    pub fn set_max(&mut self, max: Steps) {
        self.limits.max_steps = max.0;
    }

    /// Set the direction sense inversion.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.invert_direction = reverse;
    }

    /// Select the winding phase applied while moving.
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Configure the logic level that disables the driver output stage.
    pub fn set_disable_state(&mut self, disable_high: bool) {
        self.driver.set_disable_state(disable_high);
    }

    /// Get the drive power for 1 mm/sec of motion.
    #[inline]
    pub fn dc_power(&self) -> u8 {
        self.power_per_mm_sec
    }

    /// Set the drive power for 1 mm/sec of motion, persisting it when a
    /// non-volatile power address is bound.
    pub fn set_dc_power(&mut self, power: u8) {
        self.power_per_mm_sec = power;
        if let Some(address) = self.nv_power_address {
            self.store.write_long(address, power as i64);
        }
    }

    /// Get the enable lifecycle state.
    #[inline]
    pub fn power_state(&self) -> PowerState {
        self.power_state
    }

    /// Timestamp of the last physical step, in clock milliseconds.
    #[inline]
    pub fn last_physical_step_ms(&self) -> u64 {
        self.last_step_ms
    }

    /// Access the driver (for diagnostics).
    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Access the non-volatile store (for diagnostics).
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Set the movement rate in microns per second.
    ///
    /// The requested rate is clamped to `[min_rate, 1000]` microns/sec and
    /// the resulting step rate capped at the physical maximum. Changes the
    /// magnitude used by subsequent move commands; an in-progress move keeps
    /// its delta.
    pub fn set_move_rate(&mut self, rate: MicronsPerSec) {
        let rate = rate.0.clamp(self.min_rate, 1000.0);
        self.move_rate = rate * self.steps_per_micron;
        if self.move_rate > self.max_steps_per_sec {
            self.move_rate = self.max_steps_per_sec;
        }
    }

    /// Drive power scaled to the configured rate: the rate as a fraction of
    /// 1 mm/sec times the power needed for 1 mm/sec.
    fn power_for_rate(&self) -> u8 {
        let mm_per_sec = self.move_rate / self.steps_per_micron / 1000.0;
        let level = libm::roundf(mm_per_sec * self.power_per_mm_sec as f32);
        level.clamp(0.0, u8::MAX as f32) as u8
    }

    /// Start continuous motion toward the inner travel stop.
    ///
    /// The direction pin is set later, in the follow loop, at the moment of
    /// stepping.
    pub fn start_move_in(&mut self) {
        self.driver.set_power(self.power_for_rate());
        self.delta = per_tick_delta(-self.move_rate);
    }

    /// Start continuous motion away from the inner travel stop.
    pub fn start_move_out(&mut self) {
        self.driver.set_power(self.power_for_rate());
        self.delta = per_tick_delta(self.move_rate);
    }

    /// Stop continuous motion and cancel any outstanding commanded travel.
    pub fn stop_move(&mut self) {
        self.delta = FixedPoint::ZERO;
        self.target.set_whole(self.position);
    }

    /// Set an absolute target position in steps, clamped to travel.
    pub fn set_target(&mut self, target: Steps) {
        self.driver.set_power(self.power_for_rate());
        self.target.set_whole(self.limits.clamp(target.0));
    }

    /// Set a target relative to the current target, clamped to travel.
    pub fn relative_target(&mut self, offset: Steps) {
        self.driver.set_power(self.power_for_rate());
        self.target
            .set_whole(self.limits.clamp(self.target.whole() + offset.0));
    }

    /// Force the current position (recalibration, not a move).
    ///
    /// Position and target are both set to the clamped value and the idle
    /// timer is reset.
    pub fn set_position(&mut self, position: Steps) {
        self.position = self.limits.clamp(position.0);
        self.target.set_whole(self.position);
        self.last_move_ms = self.clock.millis();
    }

    /// Check if the focuser is moving: continuous motion is commanded or
    /// the target's whole part differs from the position.
    #[inline]
    pub fn moving(&self) -> bool {
        !self.delta.is_zero() || self.target.whole() != self.position
    }

    /// Advance the target by one accumulator tick.
    ///
    /// Call at the fixed cadence of [`TARGET_TICKS_PER_SEC`]. When the
    /// target's whole part leaves travel, continuous motion self-stops: the
    /// delta is zeroed and the target snapped to the bound, so no explicit
    /// stop command is needed at a limit.
    ///
    /// [`TARGET_TICKS_PER_SEC`]: crate::motion::TARGET_TICKS_PER_SEC
    pub fn advance_target(&mut self) {
        self.target += self.delta;

        let whole = self.target.whole();
        if !self.limits.contains(whole) {
            self.delta = FixedPoint::ZERO;
            self.target.set_whole(self.limits.clamp(whole));
        }
    }

    /// Run one control cycle: persistence, rate-limited stepping, and
    /// power management.
    ///
    /// `slewing` marks an active mount slew; persistence is deferred while
    /// it is true. Call every control cycle at any convenient rate; the
    /// physical step spacing is enforced with absolute deadlines, so a
    /// missed deadline is simply caught on the next call.
    pub fn follow(&mut self, slewing: bool) {
        let now = self.clock.millis();

        // Restart the idle clock whenever the position has changed
        if self.position != self.last_position {
            self.last_move_ms = now;
            self.last_position = self.position;
        }

        // Persist once motion has settled for WRITE_DELAY_MS, to avoid
        // wearing non-volatile storage on every micro-move
        if !slewing
            && self.position != self.saved_position
            && now - self.last_move_ms > WRITE_DELAY_MS
        {
            self.save_position();
        }

        // At most one physical step per interval, regardless of how often
        // this loop runs
        if now >= self.next_step_due_ms {
            self.next_step_due_ms = now + self.step_interval_ms;
            if self.moving() {
                let goal = self.target.whole();
                if self.position < goal && self.position < self.limits.max_steps {
                    if self.invert_direction {
                        self.driver.set_direction_in();
                    } else {
                        self.driver.set_direction_out();
                    }
                    self.position += 1;
                    self.last_step_ms = now;
                } else if self.position > goal && self.position > self.limits.min_steps {
                    if self.invert_direction {
                        self.driver.set_direction_out();
                    } else {
                        self.driver.set_direction_in();
                    }
                    self.position -= 1;
                    self.last_step_ms = now;
                }
            }
        }

        if self.moving() {
            match self.phase {
                Phase::One => self.driver.set_phase1(),
                Phase::Two => self.driver.set_phase2(),
            }
            self.driver.enable(true);
            self.driver.poll();
            self.last_poll_ms = now;
            self.power_state = PowerState::Moving;
        } else if self.power_state != PowerState::Idle {
            // Hold the enable through a debounce window so motion that
            // stops and restarts quickly does not chatter the driver
            self.power_state = PowerState::Settling;
            if now - self.last_poll_ms > self.step_interval_ms + 1 {
                self.driver.enable(false);
                self.power_state = PowerState::Idle;
            }
        }
    }

    /// Write the current position to non-volatile storage immediately.
    pub fn save_position(&mut self) {
        self.store.write_long(self.nv_address, self.position);
        self.saved_position = self.position;
    }
}

impl<D, S, C> TemperatureCompensation for Focuser<D, S, C>
where
    D: DcDriver,
    S: NonVolatileStore,
    C: MonotonicClock,
{
    // DC focusers carry no temperature model; the no-op defaults apply.
}
