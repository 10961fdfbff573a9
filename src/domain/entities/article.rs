use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::AppResult;
use crate::shared::utils::validation::Validator;

/// The join row of the graph: one article links exactly one author to
/// exactly one magazine and carries its own title.
///
/// Construction is crate-internal. The public path is
/// `InMemoryCatalog::add_article`, which links the new edge into both
/// owners and the registry in the same call, so an unlinked article can
/// never be observed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    id: Uuid,
    author_id: Uuid,
    magazine_id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
}

impl Article {
    pub(crate) fn new(
        author_id: Uuid,
        magazine_id: Uuid,
        title: impl Into<String>,
    ) -> AppResult<Self> {
        let title = title.into();
        Validator::validate_article_title(&title)?;
        Ok(Self {
            id: Uuid::new_v4(),
            author_id,
            magazine_id,
            title,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn author_id(&self) -> Uuid {
        self.author_id
    }

    pub fn magazine_id(&self) -> Uuid {
        self.magazine_id
    }

    /// The title. Immutable after construction.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // Owner ids only move through the catalog's reassignment operations,
    // which migrate the old owner's membership in the same mutation.
    pub(crate) fn set_author_id(&mut self, author_id: Uuid) {
        self.author_id = author_id;
    }

    pub(crate) fn set_magazine_id(&mut self, magazine_id: Uuid) {
        self.magazine_id = magazine_id;
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
