use uuid::Uuid;

use crate::domain::entities::{Article, Author, Magazine};

/// Read access to one relationship graph.
///
/// The derived-query service depends only on this shape; any store that
/// can resolve entities by id and enumerate them in registration order can
/// host the queries.
pub trait CatalogRepository {
    fn author(&self, id: &Uuid) -> Option<&Author>;
    fn magazine(&self, id: &Uuid) -> Option<&Magazine>;
    fn article(&self, id: &Uuid) -> Option<&Article>;

    /// All authors in registration order.
    fn authors(&self) -> Vec<&Author>;

    /// All magazines in registration order. This order is the
    /// top-publisher tie-break.
    fn magazines(&self) -> Vec<&Magazine>;

    /// All articles in registration order.
    fn articles(&self) -> Vec<&Article>;

    /// An author's articles, insertion order.
    fn articles_by<'a>(&'a self, author: &Author) -> Vec<&'a Article> {
        author
            .article_ids()
            .iter()
            .filter_map(|id| self.article(id))
            .collect()
    }

    /// A magazine's articles, insertion order.
    fn articles_in<'a>(&'a self, magazine: &Magazine) -> Vec<&'a Article> {
        magazine
            .article_ids()
            .iter()
            .filter_map(|id| self.article(id))
            .collect()
    }
}
