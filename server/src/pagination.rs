use serde::Deserialize;

use db::Question;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// The `page` query parameter, 1-indexed. Absent means the first page.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// Fixed-size slice of a question listing, in the order it was supplied.
/// Pages past the end come back empty rather than erroring.
pub fn paginate(page: Option<u32>, questions: Vec<Question>) -> Vec<Question> {
    let page = page.unwrap_or(1).max(1) as usize;
    questions
        .into_iter()
        .skip((page - 1) * QUESTIONS_PER_PAGE)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
