pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod quiz;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{Category, InvalidQuestion, NewQuestion, Question};
pub use error::AppError;
