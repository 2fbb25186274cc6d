pub mod classifier;
pub mod config;
pub mod feed;
pub mod pub_date;
pub mod reader;
pub mod types;
pub mod url_join;
pub mod urls;

pub use classifier::classify;
pub use config::{
    FeedConfig, GenerateRssOptions, GithubOptions, RegistryOptions, RssOptions, UrlResolver,
};
pub use feed::{generate_registry_rss_feed, FeedGenerator};
pub use pub_date::{format_pub_date, PubDateProvider, PubDateStrategy, StrategyDateProvider};
pub use reader::{HttpRegistryReader, RegistryReader};
pub use types::{
    FeedError, ItemCategory, Registry, RegistryFile, RegistryItem, Result,
};
pub use url_join::concat_url_parts;
pub use urls::{build_item_url, registry_item_path};
