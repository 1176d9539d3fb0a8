//! Domain records for the trivia store.
//!
//! This module provides:
//! - `Question` and `Category` rows as stored and served
//! - `NewQuestion`, the validated insert payload

pub mod category;
pub mod question;

pub use category::Category;
pub use question::{InvalidQuestion, NewQuestion, Question};
