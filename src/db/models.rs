use crate::publication;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        publication::was_published_recently(self.pub_date, now)
    }

    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        publication::is_published(self.pub_date, now)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixed_now;
    use chrono::Duration;

    fn question_at(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: 1,
            question_text: "¿Con quién te gustaría ir a tu destino favorito?".to_string(),
            pub_date,
        }
    }

    #[test]
    fn was_published_recently_with_future_question() {
        let now = fixed_now();
        assert!(!question_at(now + Duration::days(30)).was_published_recently(now));
    }

    #[test]
    fn was_published_recently_with_old_question() {
        let now = fixed_now();
        assert!(!question_at(now - Duration::days(32)).was_published_recently(now));
    }

    #[test]
    fn was_published_recently_with_recent_question() {
        let now = fixed_now();
        assert!(question_at(now - Duration::hours(1)).was_published_recently(now));
    }

    #[test]
    fn future_question_is_not_published() {
        let now = fixed_now();
        assert!(!question_at(now + Duration::days(30)).is_published(now));
        assert!(question_at(now - Duration::days(30)).is_published(now));
    }
}
