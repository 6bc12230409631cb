//! One-second round clock

use std::time::{Duration, Instant};

/// Converts elapsed wall-clock time into whole ticks
///
/// The input loop polls more often than once a second; the clock carries
/// the remainder between polls so no tick is lost or doubled.
#[derive(Debug, Clone)]
pub struct RoundClock {
    period: Duration,
    last: Option<Instant>,
}

impl RoundClock {
    pub fn every_second() -> Self {
        Self {
            period: Duration::from_secs(1),
            last: None,
        }
    }

    /// (Re)start counting from `now`
    pub fn start(&mut self, now: Instant) {
        self.last = Some(now);
    }

    pub fn stop(&mut self) {
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    /// Number of ticks due at `now`
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last else {
            return 0;
        };

        let elapsed = now.saturating_duration_since(last);
        let ticks = u32::try_from(elapsed.as_nanos() / self.period.as_nanos()).unwrap_or(u32::MAX);
        self.last = Some(last + self.period * ticks);
        ticks
    }

    /// Time left until the next tick, if running
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.last
            .map(|last| (last + self.period).saturating_duration_since(now))
    }
}

impl Default for RoundClock {
    fn default() -> Self {
        Self::every_second()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_clock_never_ticks() {
        let mut clock = RoundClock::every_second();
        assert!(!clock.is_running());
        assert_eq!(clock.poll(Instant::now() + Duration::from_secs(10)), 0);
        assert!(clock.until_next(Instant::now()).is_none());
    }

    #[test]
    fn test_remainder_carries_over() {
        let start = Instant::now();
        let mut clock = RoundClock::every_second();
        clock.start(start);

        assert_eq!(clock.poll(start + Duration::from_millis(900)), 0);
        assert_eq!(clock.poll(start + Duration::from_millis(1_500)), 1);
        assert_eq!(clock.poll(start + Duration::from_millis(1_999)), 0);
        assert_eq!(clock.poll(start + Duration::from_millis(2_000)), 1);
        assert_eq!(clock.poll(start + Duration::from_millis(5_100)), 3);
        assert_eq!(
            clock.until_next(start + Duration::from_millis(5_100)),
            Some(Duration::from_millis(900))
        );
    }

    #[test]
    fn test_restart_resets_phase() {
        let start = Instant::now();
        let mut clock = RoundClock::every_second();
        clock.start(start);
        clock.start(start + Duration::from_millis(700));

        assert_eq!(clock.poll(start + Duration::from_millis(1_500)), 0);
        assert_eq!(clock.poll(start + Duration::from_millis(1_700)), 1);

        clock.stop();
        assert_eq!(clock.poll(start + Duration::from_secs(30)), 0);
    }
}
