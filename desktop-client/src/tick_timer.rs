use std::time::{Duration, Instant};

/// Fixed-interval tick source polled from the frame loop.
pub struct TickTimer {
    interval: Duration,
    next_tick: Instant,
}

impl TickTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    /// Fires at most once per call. The next deadline is counted from `now`, so a stalled
    /// frame loop never produces a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.next_tick = now + self.interval;
        true
    }

    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(150);

    #[test]
    fn test_does_not_fire_before_interval() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL, start);
        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(149)));
    }

    #[test]
    fn test_fires_and_reschedules() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL, start);

        let first = start + INTERVAL;
        assert!(timer.poll(first));
        assert!(!timer.poll(first));
        assert_eq!(timer.time_until_next(first), INTERVAL);
        assert!(timer.poll(first + INTERVAL));
    }

    #[test]
    fn test_late_poll_fires_once() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL, start);
        let late = start + INTERVAL * 10;
        assert!(timer.poll(late));
        assert!(!timer.poll(late + Duration::from_millis(1)));
    }

    #[test]
    fn test_time_until_next_saturates() {
        let start = Instant::now();
        let timer = TickTimer::new(INTERVAL, start);
        assert_eq!(timer.time_until_next(start + INTERVAL * 2), Duration::ZERO);
        assert_eq!(timer.time_until_next(start + Duration::from_millis(50)), Duration::from_millis(100));
    }
}
