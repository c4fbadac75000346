use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recency;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        recency::is_recently_published(self.pub_date, now)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(pub i32);

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewQuestion {
    pub text: String,
    pub pub_date: DateTime<Utc>,
}
