use masthead::shared::utils::logger::init_logger;
use masthead::{AppResult, CatalogRepository, InMemoryCatalog, PublishingStats};

fn main() -> AppResult<()> {
    init_logger();

    let mut catalog = InMemoryCatalog::new();
    let stats = PublishingStats::new();

    let imani = catalog.add_author("Imani Keller")?;
    let vantage = catalog.add_magazine("Vantage", "Photography")?;
    let ledger = catalog.add_magazine("Ledger", "Finance")?;

    catalog.add_article(imani, vantage, "Shooting the winter light")?;
    catalog.add_article(imani, vantage, "Darkroom economics")?;
    catalog.add_article(imani, ledger, "Bond ladders explained")?;

    if let Some(author) = catalog.author(&imani) {
        println!("Articles by {}:", author);
        for article in catalog.articles_by(author) {
            println!("  - {}", article);
        }

        let magazines: Vec<String> = stats
            .magazines_of(&catalog, author)
            .iter()
            .map(|magazine| magazine.name().to_string())
            .collect();
        println!("Magazines contributed to: {}", magazines.join(", "));

        match stats.topic_areas(&catalog, author) {
            Some(topics) => println!("Topic areas: {}", topics.join(", ")),
            None => println!("Topic areas: (none yet)"),
        }
    }

    if let Some(magazine) = catalog.magazine(&vantage) {
        match stats.article_titles(&catalog, magazine) {
            Some(titles) => println!("Titles in {}: {:?}", magazine, titles),
            None => println!("{} has not published anything", magazine),
        }

        let contributors: Vec<String> = stats
            .contributors(&catalog, magazine)
            .iter()
            .map(|author| author.name().to_string())
            .collect();
        println!("Contributors to {}: {}", magazine, contributors.join(", "));
    }

    if let Some(top) = stats.top_publisher(&catalog) {
        println!("Top publisher: {}", top.name());
        println!("{}", serde_json::to_string_pretty(top)?);
    }

    Ok(())
}
