use crate::{
    read_json,
    reply::{self, Reply},
    store_failure,
};
use db::Store;
use hyper::{body::Body, StatusCode};
use model::{request::QuizRequest, response::QuizQuestion, Question};
use rand::{rngs::StdRng, Rng};
use std::{
    collections::HashSet,
    sync::{Mutex, PoisonError},
};

/// Picks a question uniformly at random from `pool`, skipping anything the
/// player has already seen. Returns `None` once the pool is exhausted.
pub fn select<R>(rng: &mut R, pool: Vec<Question>, previous: &HashSet<i32>) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let mut remaining: Vec<_> = pool.into_iter().filter(|question| !previous.contains(&question.id)).collect();
    if remaining.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..remaining.len());
    Some(remaining.swap_remove(index))
}

/// Serves the next question of a quiz round.
pub async fn next<S, B>(store: &S, rng: &Mutex<StdRng>, body: B) -> Result<Reply, StatusCode>
where
    S: Store,
    B: Body,
{
    let QuizRequest { quiz_category, previous_questions } = read_json(body).await?;
    let pool = match quiz_category.id {
        0 => store.questions().await,
        id => store.questions_by_category(id).await,
    }
    .map_err(store_failure)?;

    let previous: HashSet<_> = previous_questions.into_iter().collect();
    let question = {
        let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
        select(&mut *rng, pool, &previous)
    };

    if question.is_none() {
        log::debug!("No questions left in category {} after {} played.", quiz_category.id, previous.len());
    }
    reply::json(StatusCode::OK, &QuizQuestion { question })
}
