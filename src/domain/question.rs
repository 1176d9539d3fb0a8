use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A trivia question row. Serializes to the flat record the frontend
/// consumes: `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Category id, stored as text by convention.
    pub category: String,
    pub difficulty: i64,
}

/// Validated payload for inserting a question.
///
/// Construction rejects empty text fields and non-positive difficulty, so an
/// invalid question never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidQuestion {
    #[error("field `{0}` must be non-empty")]
    EmptyField(&'static str),
    #[error("difficulty must be positive, got {0}")]
    NonPositiveDifficulty(i64),
}

impl NewQuestion {
    pub fn new(
        question: String,
        answer: String,
        category: String,
        difficulty: i64,
    ) -> Result<Self, InvalidQuestion> {
        if question.is_empty() {
            return Err(InvalidQuestion::EmptyField("question"));
        }
        if answer.is_empty() {
            return Err(InvalidQuestion::EmptyField("answer"));
        }
        if category.is_empty() {
            return Err(InvalidQuestion::EmptyField("category"));
        }
        if difficulty <= 0 {
            return Err(InvalidQuestion::NonPositiveDifficulty(difficulty));
        }
        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(question: &str, answer: &str, category: &str, difficulty: i64) -> Result<NewQuestion, InvalidQuestion> {
        NewQuestion::new(
            question.to_string(),
            answer.to_string(),
            category.to_string(),
            difficulty,
        )
    }

    #[test]
    fn test_valid_question_accepted() {
        let q = new_question("Q1", "A1", "1", 2).expect("valid question rejected");
        assert_eq!(q.difficulty, 2);
    }

    #[test]
    fn test_empty_question_rejected() {
        assert_eq!(
            new_question("", "A1", "1", 2),
            Err(InvalidQuestion::EmptyField("question"))
        );
    }

    #[test]
    fn test_empty_answer_rejected() {
        assert_eq!(
            new_question("Q1", "", "1", 2),
            Err(InvalidQuestion::EmptyField("answer"))
        );
    }

    #[test]
    fn test_empty_category_rejected() {
        assert_eq!(
            new_question("Q1", "A1", "", 2),
            Err(InvalidQuestion::EmptyField("category"))
        );
    }

    #[test]
    fn test_non_positive_difficulty_rejected() {
        assert_eq!(
            new_question("Q1", "A1", "1", 0),
            Err(InvalidQuestion::NonPositiveDifficulty(0))
        );
        assert_eq!(
            new_question("Q1", "A1", "1", -3),
            Err(InvalidQuestion::NonPositiveDifficulty(-3))
        );
    }

    #[test]
    fn test_question_serializes_flat() {
        let q = Question {
            id: 7,
            question: "Q7".to_string(),
            answer: "A7".to_string(),
            category: "2".to_string(),
            difficulty: 4,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "question": "Q7",
                "answer": "A7",
                "category": "2",
                "difficulty": 4,
            })
        );
    }
}
