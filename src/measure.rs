//! Measuring the time and memory used by an alignment.
//!
//! The aligner itself never measures anything; callers wrap the call in a
//! `Measure` implementation instead.

// wasm-friendly instant
use instant::Instant;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Measurement {
    /// Wall-clock time in milliseconds.
    pub time_ms: f64,
    /// Peak resident memory of the process in KiB, or 0 when unknown.
    pub memory_kib: u64,
}

pub trait Measure {
    /// Run `f` and report what it used.
    fn measure<T>(&mut self, f: impl FnOnce() -> T) -> (T, Measurement);
}

/// Does not measure anything and always reports zeroes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMeasure;

impl Measure for NoMeasure {
    fn measure<T>(&mut self, f: impl FnOnce() -> T) -> (T, Measurement) {
        (f(), Measurement::default())
    }
}

/// Wall-clock time and the peak resident set size reported by the OS.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostMeasure;

impl Measure for HostMeasure {
    fn measure<T>(&mut self, f: impl FnOnce() -> T) -> (T, Measurement) {
        let start = Instant::now();
        let t = f();
        let time_ms = start.elapsed().as_secs_f64() * 1000.;
        let memory_kib = peak_memory_kib();
        (
            t,
            Measurement {
                time_ms,
                memory_kib,
            },
        )
    }
}

/// Peak resident set size of this process, in KiB.
#[cfg(unix)]
pub fn peak_memory_kib() -> u64 {
    let rusage = unsafe {
        let mut rusage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
        if libc::getrusage(libc::RUSAGE_SELF, rusage.as_mut_ptr()) != 0 {
            return 0;
        }
        rusage.assume_init()
    };
    let maxrss = rusage.ru_maxrss.max(0) as u64;
    // macOS reports bytes, Linux KiB.
    if cfg!(target_os = "macos") {
        maxrss / 1024
    } else {
        maxrss
    }
}

#[cfg(not(unix))]
pub fn peak_memory_kib() -> u64 {
    0
}
