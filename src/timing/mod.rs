//! # Timing
//!
//! Run a closure once and report the elapsed real, user and system time, like the UNIX `time`
//! command does for a program.
//!
//! The user and system times summed give the CPU time used by the closure, the real time is what
//! a wall clock shows. All three are limited by the resolution of the underlying clocks; a very
//! fast closure can be reported as taking no time at all.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;
use std::time::Duration;

use log::debug;

pub use clock::{ProcessClock, ResourceClock, Sample};

mod clock;

/// Time spent between two samples.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Measurement {
    real: Duration,
    user: Duration,
    system: Duration,
}

impl Measurement {
    /// Compare two samples.
    ///
    /// A clock that went backwards between the samples is reported as zero elapsed time.
    pub fn between(before: &Sample, after: &Sample) -> Self {
        Self {
            real: after.wall.saturating_duration_since(before.wall),
            user: after.user.saturating_sub(before.user),
            system: after.system.saturating_sub(before.system),
        }
    }

    /// Elapsed wall clock time.
    pub fn real(&self) -> Duration {
        self.real
    }

    /// CPU time spent in user mode.
    pub fn user(&self) -> Duration {
        self.user
    }

    /// CPU time spent by the kernel on behalf of the process.
    pub fn system(&self) -> Duration {
        self.system
    }
}

/// The report of the `time` command: an empty line followed by one line for each clock, in
/// seconds. Whole seconds keep their decimal point, like `0.0`.
impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "real: {:?}", self.real.as_secs_f64())?;
        writeln!(f, "user: {:?}", self.user.as_secs_f64())?;
        writeln!(f, "sys: {:?}", self.system.as_secs_f64())
    }
}

/// Run a fallible closure once and measure it with the given clock.
///
/// # Arguments
///
/// * `clock`: Started right before and stopped right after the closure runs.
/// * `function`: Called exactly once, on this thread.
///
/// # Return value
///
/// The value returned by the closure and the time it took.
///
/// # Errors
///
/// An error of the closure is returned unchanged, without a measurement. Sampling the clock can
/// fail as well.
pub fn measure_with<C, F, R, E>(clock: &C, function: F) -> Result<(R, Measurement), E>
where
    C: ResourceClock + ?Sized,
    F: FnOnce() -> Result<R, E>,
    E: From<io::Error>,
{
    let before = clock.start()?;
    let value = function()?;
    let after = clock.stop()?;

    let measurement = Measurement::between(&before, &after);
    debug!("Measured {:?}", measurement);

    Ok((value, measurement))
}

/// Run a closure once and measure it with the clocks of this process.
///
/// Whatever the closure returns is discarded.
///
/// # Errors
///
/// If the resource usage of the process can't be read.
pub fn measure<F, R>(function: F) -> io::Result<Measurement>
where
    F: FnOnce() -> R,
{
    measure_with(&ProcessClock, || Ok::<_, io::Error>(function()))
        .map(|(_, measurement)| measurement)
}

/// Run a fallible closure once and measure it with the clocks of this process.
///
/// # Errors
///
/// The error of the closure, unchanged, or an error when the resource usage of the process can't
/// be read.
pub fn try_measure<F, E>(function: F) -> Result<Measurement, E>
where
    F: FnOnce() -> Result<(), E>,
    E: From<io::Error>,
{
    measure_with(&ProcessClock, function).map(|((), measurement)| measurement)
}
