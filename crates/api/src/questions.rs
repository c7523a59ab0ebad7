use crate::{
    categories, page, read_json,
    reply::{self, Reply},
    store_failure,
};
use db::{NewQuestion, Store};
use hyper::{body::Body, StatusCode};
use model::{
    request::SearchRequest,
    response::{Acknowledgement, QuestionPage, SearchResults},
};

pub async fn list<S: Store>(store: &S, query: Option<&str>) -> Result<Reply, StatusCode> {
    let questions = store.questions().await.map_err(store_failure)?;
    let categories = categories::category_map(store.categories().await.map_err(store_failure)?);
    let page = page::page_from_query(query);
    reply::json(
        StatusCode::OK,
        &QuestionPage {
            questions: page::paginate(&questions, page),
            total_questions: questions.len(),
            categories: &categories,
            current_category: None,
        },
    )
}

pub async fn create<S, B>(store: &S, body: B) -> Result<Reply, StatusCode>
where
    S: Store,
    B: Body,
{
    let new: NewQuestion = read_json(body).await?;
    if !new.is_complete() {
        log::warn!("Rejected a question with empty text fields.");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let id = store.insert_question(&new).await.map_err(store_failure)?;
    log::info!("Created question {id} in category {}.", new.category);
    reply::json(StatusCode::CREATED, &Acknowledgement { success: true })
}

pub async fn delete<S: Store>(store: &S, id: i32) -> Result<Reply, StatusCode> {
    store.delete_question(id).await.map_err(store_failure)?;
    log::info!("Deleted question {id}.");
    reply::json(StatusCode::OK, &Acknowledgement { success: true })
}

pub async fn search<S, B>(store: &S, query: Option<&str>, body: B) -> Result<Reply, StatusCode>
where
    S: Store,
    B: Body,
{
    let SearchRequest { search_term } = read_json(body).await?;
    let questions = store.search_questions(&search_term).await.map_err(store_failure)?;
    let page = page::paginate(&questions, page::page_from_query(query));
    reply::json(StatusCode::OK, &SearchResults { questions: page, total_questions: page.len(), current_category: None })
}
