use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::AppResult;
use crate::shared::utils::validation::Validator;

/// A publication with a renameable name, a category, and the ordered list
/// of articles published in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Magazine {
    id: Uuid,
    name: String,
    category: String,
    article_ids: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl Magazine {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        let category = category.into();
        Validator::validate_magazine_name(&name)?;
        Validator::validate_category(&category)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category,
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

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Ids of this magazine's articles, insertion order.
    pub fn article_ids(&self) -> &[Uuid] {
        &self.article_ids
    }

    pub fn article_count(&self) -> usize {
        self.article_ids.len()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rename the magazine. The construction rules apply; on failure the
    /// current name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> AppResult<()> {
        let name = name.into();
        Validator::validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Recategorize the magazine. The construction rules apply; on failure
    /// the current category is kept.
    pub fn set_category(&mut self, category: impl Into<String>) -> AppResult<()> {
        let category = category.into();
        Validator::validate_category(&category)?;
        self.category = category;
        Ok(())
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

impl std::fmt::Display for Magazine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
