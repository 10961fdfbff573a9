use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::domain::entities::{Author, Magazine};
use crate::domain::repositories::CatalogRepository;

/// An author must have strictly more articles than this in a magazine to
/// count as one of its contributing authors.
const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Derived relationship queries, computed on demand by walking the owned
/// article lists. Nothing here is cached.
///
/// Queries that distinguish "no underlying data" from an empty result
/// return `None` in the no-data case.
#[derive(Debug, Clone, Default)]
pub struct PublishingStats;

impl PublishingStats {
    pub fn new() -> Self {
        Self
    }

    /// Distinct magazines the author has written for, first-occurrence
    /// order. An author publishing twice in the same magazine yields one
    /// entry.
    pub fn magazines_of<'a>(
        &self,
        catalog: &'a dyn CatalogRepository,
        author: &Author,
    ) -> Vec<&'a Magazine> {
        let mut seen = HashSet::new();
        let mut magazines = Vec::new();
        for article in catalog.articles_by(author) {
            if seen.insert(article.magazine_id()) {
                if let Some(magazine) = catalog.magazine(&article.magazine_id()) {
                    magazines.push(magazine);
                }
            }
        }
        magazines
    }

    /// Distinct categories the author has published under, first-occurrence
    /// order, or `None` when the author has no articles at all.
    pub fn topic_areas(
        &self,
        catalog: &dyn CatalogRepository,
        author: &Author,
    ) -> Option<Vec<String>> {
        if author.article_count() == 0 {
            return None;
        }
        let mut seen = HashSet::new();
        let mut topics = Vec::new();
        for magazine in self.magazines_of(catalog, author) {
            if seen.insert(magazine.category()) {
                topics.push(magazine.category().to_string());
            }
        }
        Some(topics)
    }

    /// Distinct authors with at least one article in the magazine,
    /// first-occurrence order.
    pub fn contributors<'a>(
        &self,
        catalog: &'a dyn CatalogRepository,
        magazine: &Magazine,
    ) -> Vec<&'a Author> {
        let mut seen = HashSet::new();
        let mut authors = Vec::new();
        for article in catalog.articles_in(magazine) {
            if seen.insert(article.author_id()) {
                if let Some(author) = catalog.author(&article.author_id()) {
                    authors.push(author);
                }
            }
        }
        authors
    }

    /// Titles published in the magazine, insertion order, or `None` when
    /// it has no articles.
    pub fn article_titles(
        &self,
        catalog: &dyn CatalogRepository,
        magazine: &Magazine,
    ) -> Option<Vec<String>> {
        if magazine.article_count() == 0 {
            return None;
        }
        Some(
            catalog
                .articles_in(magazine)
                .into_iter()
                .map(|article| article.title().to_string())
                .collect(),
        )
    }

    /// Authors with strictly more than two articles in the magazine,
    /// first-occurrence order, or `None` when nobody crosses the
    /// threshold. Counted per author, not by mere presence.
    pub fn contributing_authors<'a>(
        &self,
        catalog: &'a dyn CatalogRepository,
        magazine: &Magazine,
    ) -> Option<Vec<&'a Author>> {
        let mut counts: HashMap<Uuid, usize> = HashMap::new();
        let mut order = Vec::new();
        for article in catalog.articles_in(magazine) {
            let count = counts.entry(article.author_id()).or_insert(0);
            if *count == 0 {
                order.push(article.author_id());
            }
            *count += 1;
        }

        let qualified: Vec<&Author> = order
            .iter()
            .filter(|id| counts[id] > CONTRIBUTING_AUTHOR_THRESHOLD)
            .filter_map(|id| catalog.author(id))
            .collect();

        if qualified.is_empty() {
            None
        } else {
            Some(qualified)
        }
    }

    /// The magazine with the strictly highest article count across the
    /// whole catalog. Ties go to the earliest-registered magazine. `None`
    /// when no magazine exists or none has an article.
    pub fn top_publisher<'a>(&self, catalog: &'a dyn CatalogRepository) -> Option<&'a Magazine> {
        let mut top: Option<&Magazine> = None;
        for magazine in catalog.magazines() {
            let count = magazine.article_count();
            if count == 0 {
                continue;
            }
            if top.map_or(true, |current| count > current.article_count()) {
                top = Some(magazine);
            }
        }
        top
    }
}
