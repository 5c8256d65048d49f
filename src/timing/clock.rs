//! # Clocks
//!
//! Readings of the wall clock together with the CPU time the process has used so far.
use std::io;
use std::mem::MaybeUninit;
use std::time::{Duration, Instant};

/// One reading of all clocks that a measurement compares.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Sample {
    /// Monotonic wall clock time.
    pub wall: Instant,
    /// CPU time spent executing code of this process in user mode.
    pub user: Duration,
    /// CPU time the kernel spent on behalf of this process.
    pub system: Duration,
}

/// Source of `Sample`s.
///
/// The wall clock is read outside of the resource readings: first when starting, last when
/// stopping.
pub trait ResourceClock {
    /// Read all clocks at the start of a measurement, the wall clock first.
    ///
    /// # Errors
    ///
    /// If the operating system doesn't provide the resource usage of the process.
    fn start(&self) -> io::Result<Sample>;

    /// Read all clocks at the end of a measurement, the wall clock last.
    ///
    /// # Errors
    ///
    /// If the operating system doesn't provide the resource usage of the process.
    fn stop(&self) -> io::Result<Sample>;
}

/// Clocks of the calling process, as reported by `getrusage(2)` with `RUSAGE_SELF`.
///
/// The resolution of the CPU times is limited by the software clock of the kernel, see `time(7)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ProcessClock;

impl ResourceClock for ProcessClock {
    fn start(&self) -> io::Result<Sample> {
        let wall = Instant::now();
        let usage = resource_usage()?;

        Ok(to_sample(wall, &usage))
    }

    fn stop(&self) -> io::Result<Sample> {
        let usage = resource_usage()?;
        let wall = Instant::now();

        Ok(to_sample(wall, &usage))
    }
}

fn to_sample(wall: Instant, usage: &libc::rusage) -> Sample {
    Sample {
        wall,
        user: to_duration(usage.ru_utime),
        system: to_duration(usage.ru_stime),
    }
}

fn resource_usage() -> io::Result<libc::rusage> {
    let mut usage = MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: `usage` is valid for writes and `RUSAGE_SELF` is a supported target.
    let code = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if code != 0 {
        return Err(io::Error::last_os_error());
    }

    // SAFETY: getrusage succeeded, so it initialized the struct.
    Ok(unsafe { usage.assume_init() })
}

fn to_duration(time: libc::timeval) -> Duration {
    Duration::from_secs(time.tv_sec.max(0) as u64) + Duration::from_micros(time.tv_usec.max(0) as u64)
}
