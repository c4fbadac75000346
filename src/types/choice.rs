use serde::{Deserialize, Serialize};

use crate::types::question::QuestionId;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceId(pub i32);

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: ChoiceId,
    pub question_id: QuestionId,
    pub text: String,
    pub votes: u32,
}

/// Form body for `POST /api/polls/{id}/choices`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewChoice {
    pub text: String,
}
