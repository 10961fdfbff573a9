use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::AppResult;
use crate::shared::utils::validation::Validator;

/// A writer with an immutable name and the ordered list of articles they
/// authored. Articles are referenced by id; the catalog owns the entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    id: Uuid,
    name: String,
    article_ids: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        Validator::validate_author_name(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            article_ids: Vec::new(),
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of this author's articles, insertion order.
    pub fn article_ids(&self) -> &[Uuid] {
        &self.article_ids
    }

    pub fn article_count(&self) -> usize {
        self.article_ids.len()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn link_article(&mut self, article_id: Uuid) -> bool {
        if !self.article_ids.contains(&article_id) {
            self.article_ids.push(article_id);
            true
        } else {
            false
        }
    }

    pub(crate) fn unlink_article(&mut self, article_id: &Uuid) -> bool {
        let original_len = self.article_ids.len();
        self.article_ids.retain(|id| id != article_id);
        self.article_ids.len() < original_len
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
