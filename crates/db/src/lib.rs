#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;

use alloc::vec::Vec;
use core::future::{self, Future};
use futures_util::TryStreamExt;
use tokio_postgres::{Row, RowStream};

pub use model::{Category, NewQuestion, Question};
pub use tokio_postgres::{tls::NoTls, Client, Config};

/// Read and write access to the question and category collections.
///
/// Every listing is ordered by ID so that pagination stays stable between
/// requests.
pub trait Store: Send + Sync {
    fn categories(&self) -> impl Future<Output = error::Result<Vec<Category>>> + Send;
    fn questions(&self) -> impl Future<Output = error::Result<Vec<Question>>> + Send;
    fn questions_by_category(&self, category: i32) -> impl Future<Output = error::Result<Vec<Question>>> + Send;
    /// Questions whose text contains `term` verbatim (case-sensitive).
    fn search_questions(&self, term: &str) -> impl Future<Output = error::Result<Vec<Question>>> + Send;
    /// Returns the ID of the newly stored question.
    fn insert_question(&self, question: &NewQuestion) -> impl Future<Output = error::Result<i32>> + Send;
    fn delete_question(&self, id: i32) -> impl Future<Output = error::Result<()>> + Send;
}

pub struct Database(Client);

impl From<Client> for Database {
    fn from(client: Client) -> Self {
        Self(client)
    }
}

fn deserialize_category_from_row(row: Row) -> Result<Category, tokio_postgres::Error> {
    let id = row.try_get("id")?;
    let kind = row.try_get("type")?;
    Ok(Category { id, kind })
}

fn deserialize_question_from_row(row: Row) -> Result<Question, tokio_postgres::Error> {
    let id = row.try_get("id")?;
    let question = row.try_get("question")?;
    let answer = row.try_get("answer")?;
    let category = row.try_get("category")?;
    let difficulty = row.try_get("difficulty")?;
    Ok(Question { id, question, answer, category, difficulty })
}

async fn collect_questions(rows: RowStream) -> error::Result<Vec<Question>> {
    rows.map_err(error::Error::from)
        .and_then(|row| future::ready(deserialize_question_from_row(row).map_err(|_| error::Error::Fatal)))
        .try_collect()
        .await
}

impl Database {
    /// Creates the tables if they are missing and seeds the default categories.
    pub async fn init_schema(&self) -> error::Result<()> {
        self.0.batch_execute(include_str!("../schema.sql")).await?;
        Ok(())
    }
}

impl Store for Database {
    async fn categories(&self) -> error::Result<Vec<Category>> {
        self.0
            .query_raw("SELECT id, type FROM categories ORDER BY id", core::iter::empty::<&i32>())
            .await?
            .map_err(error::Error::from)
            .and_then(|row| future::ready(deserialize_category_from_row(row).map_err(|_| error::Error::Fatal)))
            .try_collect()
            .await
    }

    async fn questions(&self) -> error::Result<Vec<Question>> {
        let rows = self
            .0
            .query_raw(
                "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
                core::iter::empty::<&i32>(),
            )
            .await?;
        collect_questions(rows).await
    }

    async fn questions_by_category(&self, category: i32) -> error::Result<Vec<Question>> {
        let rows = self
            .0
            .query_raw(
                "SELECT id, question, answer, category, difficulty FROM questions WHERE category = $1 ORDER BY id",
                &[&category],
            )
            .await?;
        collect_questions(rows).await
    }

    async fn search_questions(&self, term: &str) -> error::Result<Vec<Question>> {
        // `strpos` keeps `%` and `_` literal, unlike `LIKE`.
        let rows = self
            .0
            .query_raw(
                "SELECT id, question, answer, category, difficulty FROM questions WHERE strpos(question, $1) > 0 ORDER BY id",
                &[&term],
            )
            .await?;
        collect_questions(rows).await
    }

    async fn insert_question(&self, question: &NewQuestion) -> error::Result<i32> {
        let NewQuestion { question, answer, category, difficulty } = question;
        let row = self
            .0
            .query_opt(
                "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) RETURNING id",
                &[question, answer, category, difficulty],
            )
            .await?
            .ok_or(error::Error::Fatal)?;
        row.try_get("id").map_err(|_| error::Error::Fatal)
    }

    async fn delete_question(&self, id: i32) -> error::Result<()> {
        match self.0.execute("DELETE FROM questions WHERE id = $1", &[&id]).await? {
            1 => Ok(()),
            0 => Err(error::Error::NotFound),
            _ => Err(error::Error::Fatal),
        }
    }
}
