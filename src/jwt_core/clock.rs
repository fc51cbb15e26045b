use chrono::Utc;

/// Source of the current time in whole seconds since the Unix epoch.
pub trait Clock {
    fn now_secs(&self) -> u64;
}

/// Wall clock. Times before the epoch read as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        u64::try_from(Utc::now().timestamp()).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_secs(&self) -> u64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_secs(&self) -> u64 {
        (**self).now_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_past_2020() {
        assert!(SystemClock.now_secs() > 1_577_836_800);
    }

    #[test]
    fn test_fixed_clock_does_not_move() {
        let clock = FixedClock(1_000);
        assert_eq!(clock.now_secs(), 1_000);
        assert_eq!((&clock).now_secs(), 1_000);
    }
}
