//! Response bodies. Field names follow what the web client reads, which is
//! why the search results use camel case while the listings do not.

use crate::Question;
use alloc::{collections::BTreeMap, string::String};
use serde::Serialize;

/// Category display names keyed by category ID.
pub type CategoryMap = BTreeMap<i32, String>;

#[derive(Serialize)]
pub struct QuestionPage<'a> {
    pub questions: &'a [Question],
    pub total_questions: usize,
    pub categories: &'a CategoryMap,
    pub current_category: Option<i32>,
}

#[derive(Serialize)]
pub struct CategoryQuestions<'a> {
    pub questions: &'a [Question],
    pub total_questions: usize,
    pub current_category: Option<i32>,
}

#[derive(Serialize)]
pub struct SearchResults<'a> {
    pub questions: &'a [Question],
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<i32>,
}

#[derive(Serialize)]
pub struct Categories<'a> {
    pub categories: &'a CategoryMap,
}

#[derive(Serialize)]
pub struct QuizQuestion {
    /// `None` once every candidate has been played.
    pub question: Option<Question>,
}

#[derive(Serialize)]
pub struct Acknowledgement {
    pub success: bool,
}

#[derive(Serialize)]
pub struct Failure<'a> {
    pub success: bool,
    pub error: u16,
    pub message: &'a str,
}
