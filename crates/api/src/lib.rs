mod categories;
mod page;
mod questions;
mod quiz;
mod reply;

#[cfg(test)]
mod mock;

pub use page::{paginate, QUESTIONS_PER_PAGE};
pub use quiz::select;
pub use reply::Reply;

use db::{error::Error, Store};
use http_body_util::BodyExt;
use hyper::{
    body::{Body, Buf},
    Method, Request, StatusCode,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::de::DeserializeOwned;
use std::sync::Mutex;

/// Maps a store failure onto its response status. Every kind is reported as
/// unprocessable so that clients see one failure status per route.
fn store_failure(err: Error) -> StatusCode {
    match err {
        Error::BadInput => log::warn!("Store rejected the input."),
        Error::NotFound => log::debug!("Requested record does not exist."),
        Error::Constraint => log::warn!("Store rejected the write due to a constraint violation."),
        Error::Unavailable => log::error!("Database connection is unavailable."),
        Error::Fatal => log::error!("Unexpected database error."),
    }
    StatusCode::UNPROCESSABLE_ENTITY
}

/// Parses the whole request body as JSON.
async fn read_json<T, B>(body: B) -> Result<T, StatusCode>
where
    T: DeserializeOwned,
    B: Body,
{
    let reader = body.collect().await.map_err(|_| StatusCode::BAD_REQUEST)?.aggregate().reader();
    serde_json::from_reader(reader).map_err(|err| {
        log::debug!("Malformed request body: {err}");
        StatusCode::BAD_REQUEST
    })
}

pub struct Router<S> {
    store: S,
    /// Source of randomness for quiz selection.
    rng: Mutex<StdRng>,
}

impl<S: Store> Router<S> {
    pub fn new(store: S) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Uses a caller-provided generator, typically a seeded one.
    pub fn with_rng(store: S, rng: StdRng) -> Self {
        Self { store, rng: Mutex::new(rng) }
    }

    pub async fn respond<B: Body>(&self, req: Request<B>) -> Reply {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        let mut res = match self.try_respond(req).await {
            Ok(res) => res,
            Err(status) => {
                log::debug!("{method} {path} failed with {status}.");
                reply::failure(status)
            }
        };
        reply::allow_cross_origin(res.headers_mut());
        res
    }

    async fn try_respond<B: Body>(&self, req: Request<B>) -> Result<Reply, StatusCode> {
        let (parts, body) = req.into_parts();
        if parts.method == Method::OPTIONS {
            return Ok(reply::preflight());
        }

        let query = parts.uri.query();
        let segments: Vec<_> = parts.uri.path().split('/').filter(|segment| !segment.is_empty()).collect();
        match (&parts.method, segments.as_slice()) {
            (&Method::GET, ["questions"]) => questions::list(&self.store, query).await,
            (&Method::POST, ["questions"]) => questions::create(&self.store, body).await,
            (&Method::POST, ["questions", "search"]) => questions::search(&self.store, query, body).await,
            (&Method::DELETE, ["questions", id]) => {
                let id = id.parse().map_err(|_| StatusCode::NOT_FOUND)?;
                questions::delete(&self.store, id).await
            }
            (&Method::GET, ["categories"]) => categories::list(&self.store).await,
            (&Method::GET, ["categories", id, "questions"]) => {
                let id = id.parse().map_err(|_| StatusCode::NOT_FOUND)?;
                categories::questions(&self.store, id, query).await
            }
            (&Method::POST, ["quizzes"]) => quiz::next(&self.store, &self.rng, body).await,
            (method, path) => {
                let allow = allowed_methods(path).ok_or(StatusCode::NOT_FOUND)?;
                log::debug!("{method} is not served on /{}.", path.join("/"));
                Ok(reply::method_not_allowed(allow))
            }
        }
    }
}

/// Methods served on a known path, as listed in the `Allow` header.
fn allowed_methods(path: &[&str]) -> Option<&'static str> {
    Some(match path {
        ["questions"] => "GET, POST, OPTIONS",
        ["questions", "search"] | ["quizzes"] => "POST, OPTIONS",
        ["questions", _] => "DELETE, OPTIONS",
        ["categories"] | ["categories", _, "questions"] => "GET, OPTIONS",
        _ => return None,
    })
}
