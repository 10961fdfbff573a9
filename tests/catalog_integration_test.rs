use masthead::{AppError, Author, CatalogRepository, InMemoryCatalog, PublishingStats};
use uuid::Uuid;

#[test]
fn test_full_newsroom_scenario() {
    let mut catalog = InMemoryCatalog::new();
    let stats = PublishingStats::new();

    let imani = catalog.add_author("Imani Keller").unwrap();
    let ruth = catalog.add_author("Ruth Calloway").unwrap();

    let vantage = catalog.add_magazine("Vantage", "Photography").unwrap();
    let ledger = catalog.add_magazine("Ledger", "Finance").unwrap();

    catalog.add_article(imani, vantage, "Shooting the winter light").unwrap();
    catalog.add_article(imani, vantage, "Darkroom economics").unwrap();
    catalog.add_article(imani, vantage, "Film stock hoarders").unwrap();
    catalog.add_article(imani, ledger, "Bond ladders explained").unwrap();
    catalog.add_article(ruth, vantage, "Portraits without faces").unwrap();

    let registered_authors: Vec<Uuid> = catalog.authors().iter().map(|a| a.id()).collect();
    assert_eq!(registered_authors, vec![imani, ruth]);
    assert_eq!(catalog.articles().len(), 5);

    // Author-side queries
    let imani_ref = catalog.author(&imani).unwrap();
    let magazines: Vec<Uuid> = stats
        .magazines_of(&catalog, imani_ref)
        .iter()
        .map(|m| m.id())
        .collect();
    assert_eq!(magazines, vec![vantage, ledger]);
    assert_eq!(
        stats.topic_areas(&catalog, imani_ref).unwrap(),
        vec!["Photography".to_string(), "Finance".to_string()]
    );

    // Magazine-side queries
    let vantage_ref = catalog.magazine(&vantage).unwrap();
    assert_eq!(
        stats.article_titles(&catalog, vantage_ref).unwrap().len(),
        4
    );
    let contributor_ids: Vec<Uuid> = stats
        .contributors(&catalog, vantage_ref)
        .iter()
        .map(|a| a.id())
        .collect();
    assert_eq!(contributor_ids, vec![imani, ruth]);

    // Only Imani has more than two articles in Vantage
    let qualified: Vec<Uuid> = stats
        .contributing_authors(&catalog, vantage_ref)
        .unwrap()
        .iter()
        .map(|a| a.id())
        .collect();
    assert_eq!(qualified, vec![imani]);

    // Aggregate across the whole catalog
    assert_eq!(stats.top_publisher(&catalog).map(|m| m.id()), Some(vantage));
}

#[test]
fn test_failed_construction_leaves_no_trace() {
    let mut catalog = InMemoryCatalog::new();

    assert!(catalog.add_author("").is_err());
    assert!(catalog.add_magazine("V", "Photography").is_err());
    assert!(catalog.add_magazine("Vantage", "").is_err());
    assert_eq!(catalog.author_count(), 0);
    assert_eq!(catalog.magazine_count(), 0);

    let author = catalog.add_author("Imani Keller").unwrap();
    let magazine = catalog.add_magazine("Vantage", "Photography").unwrap();
    let err = catalog.add_article(author, magazine, "tiny").unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
    assert_eq!(catalog.article_count(), 0);
    assert_eq!(catalog.author(&author).unwrap().article_count(), 0);
    assert_eq!(catalog.magazine(&magazine).unwrap().article_count(), 0);
}

#[test]
fn test_empty_state_sentinels() {
    let mut catalog = InMemoryCatalog::new();
    let stats = PublishingStats::new();

    assert!(stats.top_publisher(&catalog).is_none());

    let author = catalog.add_author("Imani Keller").unwrap();
    let magazine = catalog.add_magazine("Vantage", "Photography").unwrap();

    let author_ref = catalog.author(&author).unwrap();
    assert_eq!(stats.topic_areas(&catalog, author_ref), None);

    let magazine_ref = catalog.magazine(&magazine).unwrap();
    assert_eq!(stats.article_titles(&catalog, magazine_ref), None);
    assert_eq!(stats.contributing_authors(&catalog, magazine_ref), None);
}

#[test]
fn test_reassignment_keeps_counts_consistent_for_top_publisher() {
    let mut catalog = InMemoryCatalog::new();
    let stats = PublishingStats::new();

    let author = catalog.add_author("Imani Keller").unwrap();
    let vantage = catalog.add_magazine("Vantage", "Photography").unwrap();
    let ledger = catalog.add_magazine("Ledger", "Finance").unwrap();

    let a1 = catalog.add_article(author, vantage, "Shooting the winter light").unwrap();
    let a2 = catalog.add_article(author, vantage, "Darkroom economics").unwrap();
    catalog.add_article(author, ledger, "Bond ladders explained").unwrap();

    assert_eq!(stats.top_publisher(&catalog).map(|m| m.id()), Some(vantage));

    // Moving both articles flips the aggregate
    catalog.reassign_magazine(&a1, ledger).unwrap();
    catalog.reassign_magazine(&a2, ledger).unwrap();

    assert_eq!(catalog.magazine(&vantage).unwrap().article_count(), 0);
    assert_eq!(catalog.magazine(&ledger).unwrap().article_count(), 3);
    assert_eq!(stats.top_publisher(&catalog).map(|m| m.id()), Some(ledger));
}

#[test]
fn test_author_serializes_and_round_trips() {
    let author = Author::new("Imani Keller").unwrap();

    let json = serde_json::to_string(&author).unwrap();
    assert!(json.contains("\"name\":\"Imani Keller\""));
    assert!(json.contains("articleIds"));

    let back: Author = serde_json::from_str(&json).unwrap();
    assert_eq!(back, author);
}
