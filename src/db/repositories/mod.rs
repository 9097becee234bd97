pub mod choice_repository;
pub mod question_repository;

pub use choice_repository::*;
pub use question_repository::*;
