use jiff::Timestamp;
#[cfg(feature = "mock-time")]
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Source of "now" for record timestamps. With the `mock-time` feature the
/// clock only moves when told to, which keeps test assertions stable.
#[derive(Clone)]
pub struct TimeSource {
    #[cfg(feature = "mock-time")]
    time: Arc<Mutex<Timestamp>>,
}

impl TimeSource {
    #[allow(clippy::new_without_default)]
    #[cfg(not(feature = "mock-time"))]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(feature = "mock-time")]
    pub fn new(initial_time: Timestamp) -> Self {
        Self {
            time: Arc::new(Mutex::new(initial_time)),
        }
    }

    #[cfg(not(feature = "mock-time"))]
    pub fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    #[cfg(feature = "mock-time")]
    pub fn now(&self) -> Timestamp {
        *self.clock()
    }

    /// Move the mocked clock forward, e.g. between a create and an update
    /// so their timestamps differ.
    #[cfg(feature = "mock-time")]
    pub fn advance(&self, duration: jiff::Span) {
        *self.clock() += duration;
    }

    #[cfg(feature = "mock-time")]
    pub fn set(&self, time: Timestamp) {
        *self.clock() = time;
    }

    /// Poisoning is ignored; the guarded value is a plain timestamp.
    #[cfg(feature = "mock-time")]
    fn clock(&self) -> MutexGuard<'_, Timestamp> {
        self.time.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(all(test, feature = "mock-time"))]
mod tests {
    use super::*;
    use jiff::ToSpan;

    fn start() -> Timestamp {
        "2025-01-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn clones_share_one_clock() {
        let time_source = TimeSource::new(start());
        let handle = time_source.clone();

        handle.advance(2.hours());
        assert_eq!(
            time_source.now(),
            "2025-01-01T02:00:00Z".parse::<Timestamp>().unwrap()
        );

        time_source.set(start());
        assert_eq!(handle.now(), start());
    }

    #[test]
    fn clock_keeps_working_after_a_panic_while_locked() {
        let time_source = TimeSource::new(start());
        let poisoner = time_source.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.time.lock().unwrap();
            panic!("panic while holding the clock");
        })
        .join();
        assert!(time_source.time.is_poisoned());

        time_source.advance(1.day());
        assert_eq!(
            time_source.now(),
            "2025-01-02T00:00:00Z".parse::<Timestamp>().unwrap()
        );
        time_source.set(start());
        assert_eq!(time_source.now(), start());
    }
}
