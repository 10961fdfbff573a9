mod publishing_stats;

pub use publishing_stats::PublishingStats;
