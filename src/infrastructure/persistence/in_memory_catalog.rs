use std::collections::HashMap;

use log::debug;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Article, Author, Magazine};
use crate::domain::repositories::CatalogRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::validation::Validator;

/// In-memory store owning one relationship graph.
///
/// Each catalog is an independent graph; aggregate queries range over
/// exactly the entities registered here. Registration order is preserved
/// per entity kind and drives the top-publisher tie-break.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryCatalog {
    authors: HashMap<Uuid, Author>,
    magazines: HashMap<Uuid, Magazine>,
    articles: HashMap<Uuid, Article>,
    author_order: Vec<Uuid>,
    magazine_order: Vec<Uuid>,
    article_order: Vec<Uuid>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a new author. Returns its id.
    pub fn add_author(&mut self, name: &str) -> AppResult<Uuid> {
        let author = Author::new(name)?;
        let id = author.id();
        self.authors.insert(id, author);
        self.author_order.push(id);
        debug!("Registered author '{}' ({})", name, id);
        Ok(id)
    }

    /// Validate and register a new magazine. Returns its id.
    pub fn add_magazine(&mut self, name: &str, category: &str) -> AppResult<Uuid> {
        let magazine = Magazine::new(name, category)?;
        let id = magazine.id();
        self.magazines.insert(id, magazine);
        self.magazine_order.push(id);
        debug!("Registered magazine '{}' ({})", name, id);
        Ok(id)
    }

    /// Create the edge linking an author to a magazine.
    ///
    /// If the author already has an article with the same title in the
    /// same magazine, that article's id is returned and nothing changes.
    /// A new article is otherwise appended to the author's list, the
    /// magazine's list, and this catalog's registry. All validation runs
    /// before any mutation, so a failed call leaves all three untouched.
    pub fn add_article(
        &mut self,
        author_id: Uuid,
        magazine_id: Uuid,
        title: &str,
    ) -> AppResult<Uuid> {
        if !self.authors.contains_key(&author_id) {
            return Err(AppError::ValidationError(format!(
                "{} does not refer to a registered author",
                author_id
            )));
        }
        if !self.magazines.contains_key(&magazine_id) {
            return Err(AppError::ValidationError(format!(
                "{} does not refer to a registered magazine",
                magazine_id
            )));
        }
        Validator::validate_article_title(title)?;

        if let Some(existing) = self.find_article(author_id, magazine_id, title) {
            debug!(
                "Author {} already has '{}' in magazine {}, reusing article {}",
                author_id, title, magazine_id, existing
            );
            return Ok(existing);
        }

        let article = Article::new(author_id, magazine_id, title)?;
        let id = article.id();
        self.articles.insert(id, article);
        self.article_order.push(id);
        if let Some(author) = self.authors.get_mut(&author_id) {
            author.link_article(id);
        }
        if let Some(magazine) = self.magazines.get_mut(&magazine_id) {
            magazine.link_article(id);
        }
        debug!("Published article '{}' ({})", title, id);
        Ok(id)
    }

    /// Detach an article from both of its owners and drop it from the
    /// registry.
    pub fn remove_article(&mut self, article_id: &Uuid) -> AppResult<()> {
        let article = self
            .articles
            .remove(article_id)
            .ok_or_else(|| AppError::NotFound(format!("No article {}", article_id)))?;
        if let Some(author) = self.authors.get_mut(&article.author_id()) {
            author.unlink_article(article_id);
        }
        if let Some(magazine) = self.magazines.get_mut(&article.magazine_id()) {
            magazine.unlink_article(article_id);
        }
        self.article_order.retain(|id| id != article_id);
        debug!("Removed article '{}' ({})", article.title(), article_id);
        Ok(())
    }

    /// Rename a magazine, re-validating with the construction rules.
    pub fn set_magazine_name(&mut self, magazine_id: &Uuid, name: &str) -> AppResult<()> {
        let magazine = self
            .magazines
            .get_mut(magazine_id)
            .ok_or_else(|| AppError::NotFound(format!("No magazine {}", magazine_id)))?;
        magazine.set_name(name)
    }

    /// Recategorize a magazine, re-validating with the construction rules.
    pub fn set_magazine_category(&mut self, magazine_id: &Uuid, category: &str) -> AppResult<()> {
        let magazine = self
            .magazines
            .get_mut(magazine_id)
            .ok_or_else(|| AppError::NotFound(format!("No magazine {}", magazine_id)))?;
        magazine.set_category(category)
    }

    /// Move an article to a different author. The old author's membership
    /// is removed as part of the same mutation.
    pub fn reassign_author(&mut self, article_id: &Uuid, new_author_id: Uuid) -> AppResult<()> {
        if !self.authors.contains_key(&new_author_id) {
            return Err(AppError::ValidationError(format!(
                "{} does not refer to a registered author",
                new_author_id
            )));
        }
        let article = self
            .articles
            .get_mut(article_id)
            .ok_or_else(|| AppError::NotFound(format!("No article {}", article_id)))?;
        let old_author_id = article.author_id();
        if old_author_id == new_author_id {
            return Ok(());
        }
        article.set_author_id(new_author_id);
        if let Some(old) = self.authors.get_mut(&old_author_id) {
            old.unlink_article(article_id);
        }
        if let Some(new) = self.authors.get_mut(&new_author_id) {
            new.link_article(*article_id);
        }
        debug!(
            "Moved article {} from author {} to {}",
            article_id, old_author_id, new_author_id
        );
        Ok(())
    }

    /// Move an article to a different magazine. The old magazine's
    /// membership is removed as part of the same mutation.
    pub fn reassign_magazine(&mut self, article_id: &Uuid, new_magazine_id: Uuid) -> AppResult<()> {
        if !self.magazines.contains_key(&new_magazine_id) {
            return Err(AppError::ValidationError(format!(
                "{} does not refer to a registered magazine",
                new_magazine_id
            )));
        }
        let article = self
            .articles
            .get_mut(article_id)
            .ok_or_else(|| AppError::NotFound(format!("No article {}", article_id)))?;
        let old_magazine_id = article.magazine_id();
        if old_magazine_id == new_magazine_id {
            return Ok(());
        }
        article.set_magazine_id(new_magazine_id);
        if let Some(old) = self.magazines.get_mut(&old_magazine_id) {
            old.unlink_article(article_id);
        }
        if let Some(new) = self.magazines.get_mut(&new_magazine_id) {
            new.link_article(*article_id);
        }
        debug!(
            "Moved article {} from magazine {} to {}",
            article_id, old_magazine_id, new_magazine_id
        );
        Ok(())
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    fn find_article(&self, author_id: Uuid, magazine_id: Uuid, title: &str) -> Option<Uuid> {
        let author = self.authors.get(&author_id)?;
        author
            .article_ids()
            .iter()
            .filter_map(|id| self.articles.get(id))
            .find(|article| article.magazine_id() == magazine_id && article.title() == title)
            .map(|article| article.id())
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn author(&self, id: &Uuid) -> Option<&Author> {
        self.authors.get(id)
    }

    fn magazine(&self, id: &Uuid) -> Option<&Magazine> {
        self.magazines.get(id)
    }

    fn article(&self, id: &Uuid) -> Option<&Article> {
        self.articles.get(id)
    }

    fn authors(&self) -> Vec<&Author> {
        self.author_order
            .iter()
            .filter_map(|id| self.authors.get(id))
            .collect()
    }

    fn magazines(&self) -> Vec<&Magazine> {
        self.magazine_order
            .iter()
            .filter_map(|id| self.magazines.get(id))
            .collect()
    }

    fn articles(&self) -> Vec<&Article> {
        self.article_order
            .iter()
            .filter_map(|id| self.articles.get(id))
            .collect()
    }
}
