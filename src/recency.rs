use chrono::{DateTime, Duration, Utc};

/// How far back a question still counts as recently published.
pub fn recent_window() -> Duration {
    Duration::days(1)
}

/// `true` when `pub_date` lies in `[now - 1 day, now]`.
///
/// Future dates are never recent. This window is independent of the
/// "published" filter in [`crate::views`], which has no lower bound.
pub fn is_recently_published(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    pub_date <= now && now - pub_date <= recent_window()
}
