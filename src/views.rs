//! Which questions are visible at a given instant.
//!
//! A question is published once its `pub_date` is not in the future. There is
//! no lower bound: arbitrarily old questions stay published.

use chrono::{DateTime, Utc};
use handle_errors::Error;
use serde::Serialize;

use crate::store::QuestionStore;
use crate::types::{
    choice::Choice,
    question::{Question, QuestionId},
};

pub fn is_published(question: &Question, now: DateTime<Utc>) -> bool {
    question.pub_date <= now
}

/// Published questions, most recent first. Equal dates keep their input order.
pub fn list_published<I>(now: DateTime<Utc>, records: I) -> Vec<Question>
where
    I: IntoIterator<Item = Question>,
{
    let mut published: Vec<Question> = records
        .into_iter()
        .filter(|q| is_published(q, now))
        .collect();
    // sort_by is stable
    published.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    published
}

/// A lookup result is only visible if it is published; anything else is not found.
pub fn find_published(now: DateTime<Utc>, question: Option<Question>) -> Result<Question, Error> {
    match question {
        Some(q) if is_published(&q, now) => Ok(q),
        _ => Err(Error::QuestionNotFound),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IndexContext {
    pub latest_question_list: Vec<Question>,
    pub is_empty: bool,
}

impl IndexContext {
    pub fn new(latest_question_list: Vec<Question>) -> Self {
        IndexContext {
            is_empty: latest_question_list.is_empty(),
            latest_question_list,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DetailContext {
    pub question: Question,
    pub choices: Vec<Choice>,
}

pub fn index<S: QuestionStore>(store: &S, now: DateTime<Utc>) -> IndexContext {
    IndexContext::new(list_published(now, store.all_questions()))
}

pub fn detail<S: QuestionStore>(
    store: &S,
    id: QuestionId,
    now: DateTime<Utc>,
) -> Result<DetailContext, Error> {
    let question = find_published(now, store.get_question_by_id(id))?;
    let choices = store.choices_for(question.id);
    Ok(DetailContext { question, choices })
}
