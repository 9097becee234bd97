//! Publication rules for questions.
//!
//! Two predicates live here and they are easy to mix up:
//!
//! * [`is_published`] decides whether a visitor may see a question at all.
//!   It is unbounded on the past side.
//! * [`was_published_recently`] is the narrower window `(now - 1 day, now]`.

use chrono::{DateTime, Duration, Utc};

/// Width of the "recently published" window.
pub fn recent_window() -> Duration {
    Duration::days(1)
}

/// True when `pub_date` lies in `(now - 1 day, now]`.
pub fn was_published_recently(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - recent_window() < pub_date && pub_date <= now
}

/// True when `pub_date` is at or before `now`.
pub fn is_published(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    pub_date <= now
}
