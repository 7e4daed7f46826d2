use chrono::{DateTime, Duration, Utc};

const MAX_PERIOD_SECS: u64 = 7 * 24 * 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessState {
    Fresh,
    Stale,
    Offline,
}

/// Data older than one refresh period is stale; older than two periods, or
/// after three failed fetches in a row, the dashboard reports itself offline.
#[must_use]
pub fn evaluate_freshness(
    last_success: Option<DateTime<Utc>>,
    consecutive_failures: u32,
    refresh_secs: u64,
    now: DateTime<Utc>,
) -> FreshnessState {
    let Some(last_success) = last_success else {
        return if consecutive_failures >= 3 {
            FreshnessState::Offline
        } else {
            FreshnessState::Stale
        };
    };

    let period = Duration::seconds(i64::try_from(refresh_secs.min(MAX_PERIOD_SECS)).unwrap_or(0));
    let age = now - last_success;

    if age > period * 2 || consecutive_failures >= 3 {
        FreshnessState::Offline
    } else if age > period || consecutive_failures >= 1 {
        FreshnessState::Stale
    } else {
        FreshnessState::Fresh
    }
}

#[derive(Debug, Clone)]
pub struct RefreshMetadata {
    pub last_success: Option<DateTime<Utc>>,
    pub last_attempt: Option<DateTime<Utc>>,
    pub state: FreshnessState,
    pub consecutive_failures: u32,
}

impl Default for RefreshMetadata {
    fn default() -> Self {
        Self {
            last_success: None,
            last_attempt: None,
            state: FreshnessState::Stale,
            consecutive_failures: 0,
        }
    }
}

impl RefreshMetadata {
    pub fn mark_attempt(&mut self) {
        self.last_attempt = Some(Utc::now());
    }

    pub fn mark_success(&mut self) {
        let now = Utc::now();
        self.last_attempt = Some(now);
        self.last_success = Some(now);
        self.consecutive_failures = 0;
        self.state = FreshnessState::Fresh;
    }

    pub fn mark_failure(&mut self) {
        self.last_attempt = Some(Utc::now());
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    pub fn reevaluate(&mut self, refresh_secs: u64) {
        self.state = evaluate_freshness(
            self.last_success,
            self.consecutive_failures,
            refresh_secs,
            Utc::now(),
        );
    }

    pub fn age_minutes(&self) -> Option<i64> {
        self.last_success.map(|ts| (Utc::now() - ts).num_minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_HOUR: u64 = 1800;

    #[test]
    fn never_succeeded() {
        let now = Utc::now();
        assert_eq!(evaluate_freshness(None, 0, HALF_HOUR, now), FreshnessState::Stale);
        assert_eq!(evaluate_freshness(None, 2, HALF_HOUR, now), FreshnessState::Stale);
        assert_eq!(evaluate_freshness(None, 3, HALF_HOUR, now), FreshnessState::Offline);
    }

    #[test]
    fn fresh_within_one_period() {
        let now = Utc::now();
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(29)), 0, HALF_HOUR, now),
            FreshnessState::Fresh
        );
    }

    #[test]
    fn stale_after_one_period_or_a_failure() {
        let now = Utc::now();
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(31)), 0, HALF_HOUR, now),
            FreshnessState::Stale
        );
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(5)), 1, HALF_HOUR, now),
            FreshnessState::Stale
        );
    }

    #[test]
    fn offline_after_two_periods_or_three_failures() {
        let now = Utc::now();
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(61)), 0, HALF_HOUR, now),
            FreshnessState::Offline
        );
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(5)), 3, HALF_HOUR, now),
            FreshnessState::Offline
        );
    }

    #[test]
    fn success_resets_failures() {
        let mut meta = RefreshMetadata::default();
        meta.mark_failure();
        meta.mark_failure();
        assert_eq!(meta.consecutive_failures, 2);

        meta.mark_success();
        assert_eq!(meta.consecutive_failures, 0);
        assert_eq!(meta.state, FreshnessState::Fresh);
        assert_eq!(meta.age_minutes(), Some(0));
    }
}
