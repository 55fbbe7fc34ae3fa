//! The digital trigger line consumed by capture instrumentation.

/// Exclusive ownership of the single trigger signal.
///
/// The line marks measured intervals for an oscilloscope or power
/// analyzer: active while an operation of interest executes, idle
/// otherwise. Between any two `raise` calls there is exactly one `lower`;
/// the sample driver encodes that pairing in its control flow, so
/// implementations never see an unbalanced sequence.
///
/// All three operations are infallible by contract. The underlying
/// peripheral is assumed to work once `arm` has configured it; there is
/// nothing useful a measurement run could do with a pin error mid-trace.
pub trait TriggerLine {
    /// Configure the line as an output at the idle level.
    fn arm(&mut self);

    /// Drive the line to its active level.
    fn raise(&mut self);

    /// Return the line to its idle level.
    fn lower(&mut self);
}

/// A trigger line wired to nothing.
///
/// For hosted runs without instrumentation attached: the schedule executes
/// identically, the pulses just have nowhere to go.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTrigger;

impl TriggerLine for NullTrigger {
    fn arm(&mut self) {}

    fn raise(&mut self) {}

    fn lower(&mut self) {}
}
