use crate::{
    page,
    reply::{self, Reply},
    store_failure,
};
use db::{Category, Store};
use hyper::StatusCode;
use model::response::{Categories, CategoryMap, CategoryQuestions};

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|Category { id, kind }| (id, kind)).collect()
}

pub async fn list<S: Store>(store: &S) -> Result<Reply, StatusCode> {
    let categories = category_map(store.categories().await.map_err(store_failure)?);
    reply::json(StatusCode::OK, &Categories { categories: &categories })
}

pub async fn questions<S: Store>(store: &S, category: i32, query: Option<&str>) -> Result<Reply, StatusCode> {
    let questions = store.questions_by_category(category).await.map_err(store_failure)?;
    let page = page::page_from_query(query);
    reply::json(
        StatusCode::OK,
        &CategoryQuestions {
            questions: page::paginate(&questions, page),
            total_questions: questions.len(),
            current_category: None,
        },
    )
}
