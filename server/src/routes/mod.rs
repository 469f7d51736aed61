mod categories;
mod questions;
mod quizzes;

pub use categories::categories_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;
