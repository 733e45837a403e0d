//! Temperature compensation capability.

/// Temperature-compensated focusing interface.
///
/// A DC focuser has no temperature model, so every method defaults to a
/// no-op; actuator variants that track a temperature coefficient override
/// these without the motion core depending on them.
pub trait TemperatureCompensation {
    /// Set the compensation coefficient in microns per degree.
    fn set_tcf_coefficient(&mut self, _microns_per_deg: f32) {}

    /// Get the compensation coefficient in microns per degree.
    fn tcf_coefficient(&self) -> f32 {
        0.0
    }

    /// Enable or disable temperature compensation.
    fn set_tcf_enabled(&mut self, _enabled: bool) {}

    /// Check whether temperature compensation is active.
    fn tcf_enabled(&self) -> bool {
        false
    }
}
