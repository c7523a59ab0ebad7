use alloc::{string::String, vec::Vec};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    /// Zero selects every category.
    #[serde(deserialize_with = "id::deserialize")]
    pub id: i32,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    /// Questions that the player has already seen in this round.
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

/// Web clients key categories by their string form, so numeric identifiers
/// may arrive either as JSON numbers or as numeric strings.
pub mod id {
    use core::fmt::{self, Formatter};
    use serde::{
        de::{Error, Unexpected, Visitor},
        Deserializer,
    };

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = i32;

        fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
            formatter.write_str("an integer or a numeric string")
        }

        fn visit_i64<E: Error>(self, value: i64) -> Result<Self::Value, E> {
            i32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
        }

        fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
            i32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
            value.trim().parse().map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IdVisitor)
    }
}
