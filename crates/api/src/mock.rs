use db::{
    error::{Error, Result},
    Category, NewQuestion, Question, Store,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

const CATEGORIES: [&str; 6] = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i32,
}

/// Store backed by plain vectors, with a switch to simulate an outage.
pub struct MemoryStore {
    tables: Mutex<Tables>,
    offline: AtomicBool,
}

impl MemoryStore {
    /// Six categories and two questions in each of them, with IDs 1 through 12.
    pub fn seeded() -> Self {
        let categories =
            CATEGORIES.iter().zip(1..).map(|(name, id)| Category { id, kind: String::from(*name) }).collect();
        let questions = (1..=12)
            .map(|id| Question {
                id,
                question: format!("What is the title of entry {id}?"),
                answer: format!("Entry {id}"),
                category: (id - 1) % 6 + 1,
                difficulty: id % 5 + 1,
            })
            .collect();
        let tables = Tables { categories, questions, next_id: 13 };
        Self { tables: Mutex::new(tables), offline: AtomicBool::new(false) }
    }

    pub fn push(&self, question: &str, category: i32) -> i32 {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id;
        tables.next_id += 1;
        tables.questions.push(Question {
            id,
            question: String::from(question),
            answer: String::from("Yes"),
            category,
            difficulty: 1,
        });
        id
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::Relaxed);
    }

    fn check(&self) -> Result<()> {
        if self.offline.load(Ordering::Relaxed) {
            Err(Error::Unavailable)
        } else {
            Ok(())
        }
    }

    fn filter_questions(&self, predicate: impl Fn(&Question) -> bool) -> Result<Vec<Question>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.questions.iter().filter(|question| predicate(question)).cloned().collect())
    }
}

impl Store for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().categories.clone())
    }

    async fn questions(&self) -> Result<Vec<Question>> {
        self.filter_questions(|_| true)
    }

    async fn questions_by_category(&self, category: i32) -> Result<Vec<Question>> {
        self.filter_questions(|question| question.category == category)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        self.filter_questions(|question| question.question.contains(term))
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<i32> {
        self.check()?;
        if !question.is_complete() {
            return Err(Error::BadInput);
        }
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id;
        tables.next_id += 1;
        tables.questions.push(Question {
            id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        });
        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> Result<()> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let index = tables.questions.iter().position(|question| question.id == id).ok_or(Error::NotFound)?;
        tables.questions.remove(index);
        Ok(())
    }
}
