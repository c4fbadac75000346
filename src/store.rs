use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use handle_errors::Error;
use parking_lot::RwLock;

use crate::types::{
    choice::{Choice, ChoiceId, NewChoice},
    question::{NewQuestion, Question, QuestionId},
};

/// Storage capabilities the views are built on.
pub trait QuestionStore {
    fn create_question(&self, new_question: NewQuestion) -> Question;
    fn all_questions(&self) -> Vec<Question>;
    fn get_question_by_id(&self, id: QuestionId) -> Option<Question>;
    fn add_choice(&self, question_id: QuestionId, new_choice: NewChoice) -> Result<Choice, Error>;
    fn choices_for(&self, question_id: QuestionId) -> Vec<Choice>;
}

#[derive(Clone)]
pub struct Store {
    pub questions: Arc<RwLock<HashMap<QuestionId, Question>>>,
    pub choices: Arc<RwLock<HashMap<ChoiceId, Choice>>>,
    next_id: Arc<AtomicI32>,
}

impl Store {
    pub fn new() -> Self {
        Store {
            questions: Arc::new(RwLock::new(HashMap::new())),
            choices: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    // Shared by questions and choices; ids only need to be unique and increasing.
    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStore for Store {
    fn create_question(&self, new_question: NewQuestion) -> Question {
        let question = Question {
            id: QuestionId(self.next_id()),
            text: new_question.text,
            pub_date: new_question.pub_date,
        };
        self.questions
            .write()
            .insert(question.id, question.clone());
        question
    }

    /// Returned in creation order.
    fn all_questions(&self) -> Vec<Question> {
        let mut questions: Vec<Question> = self.questions.read().values().cloned().collect();
        questions.sort_by_key(|q| q.id);
        questions
    }

    fn get_question_by_id(&self, id: QuestionId) -> Option<Question> {
        self.questions.read().get(&id).cloned()
    }

    fn add_choice(&self, question_id: QuestionId, new_choice: NewChoice) -> Result<Choice, Error> {
        if !self.questions.read().contains_key(&question_id) {
            return Err(Error::QuestionNotFound);
        }
        let choice = Choice {
            id: ChoiceId(self.next_id()),
            question_id,
            text: new_choice.text,
            votes: 0,
        };
        self.choices.write().insert(choice.id, choice.clone());
        Ok(choice)
    }

    fn choices_for(&self, question_id: QuestionId) -> Vec<Choice> {
        let mut choices: Vec<Choice> = self
            .choices
            .read()
            .values()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect();
        choices.sort_by_key(|c| c.id);
        choices
    }
}
