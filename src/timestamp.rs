/// Source of monotonic timestamps used to measure response times.
pub trait Clock {
    fn now_ns(&self) -> u128;
}

/// Reads the raw monotonic clock, unaffected by NTP slewing.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now_ns(&self) -> u128 {
        monotonic_ns()
    }
}

#[cfg(target_os = "linux")]
pub fn monotonic_ns() -> u128 {
    use libc::{CLOCK_MONOTONIC_RAW, clock_gettime, timespec};

    // SAFETY: timespec is plain old data and `ts` outlives the call.
    let mut ts: timespec = unsafe { std::mem::zeroed() };
    if unsafe { clock_gettime(CLOCK_MONOTONIC_RAW, &mut ts) } == 0 {
        (ts.tv_sec as u128) * 1_000_000_000 + (ts.tv_nsec as u128)
    } else {
        fallback_ns()
    }
}

#[cfg(not(target_os = "linux"))]
pub fn monotonic_ns() -> u128 {
    fallback_ns()
}

fn fallback_ns() -> u128 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_nanos()
}

/// Converts a pair of nanosecond timestamps into elapsed milliseconds.
pub fn elapsed_ms(start_ns: u128, end_ns: u128) -> f64 {
    end_ns.saturating_sub(start_ns) as f64 / 1_000_000.0
}
