#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod config;
pub mod enrich;
pub mod filter;
pub mod query;
pub mod rank;
pub mod record;
pub mod report;
pub mod runner;
pub mod summary;

pub use client::{ClientError, GitHubClient, RepositoryClient, RepositorySummary};
pub use config::{ConfigError, SurveyConfig, SurveySettings};
pub use enrich::{enrich_repositories, enrich_repository, EnrichError};
pub use filter::{default_exclusions, filter_repositories, is_excluded, ExclusionRule};
pub use query::{build_search_query, run_search, SearchRequest};
pub use rank::{rank_records, RankError};
pub use record::{RepositoryRecord, NO_LICENSE};
pub use report::{render_table, report_row, write_table, HEADERS};
pub use runner::{Survey, SurveyError, SurveyReport};
pub use summary::RunSummary;
