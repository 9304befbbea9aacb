use chrono::{DateTime, Duration, Utc};

/// Length of the rolling contribution window: 365.25 days, so the window
/// stays a full year across leap years.
pub const CONTRIBUTION_WINDOW_SECONDS: i64 = 31_557_600;

/// Whether a commit authored at `authored_at` falls inside the contribution
/// window ending at `now`. The boundary is exclusive: a commit authored
/// exactly one window-length before `now` does not count.
pub fn authored_in_last_year(authored_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    authored_at > now - Duration::seconds(CONTRIBUTION_WINDOW_SECONDS)
}
