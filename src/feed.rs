//! Feed assembly: fetch the registry, filter excluded items, resolve URLs
//! and publication dates concurrently, and render the RSS 2.0 document.

use crate::config::{FeedConfig, GenerateRssOptions};
use crate::pub_date::{format_pub_date, PubDateProvider, StrategyDateProvider};
use crate::reader::{HttpRegistryReader, RegistryReader};
use crate::types::{FeedError, RegistryItem, Result};
use crate::url_join::concat_url_parts;
use crate::urls::build_item_url;
use futures::future::try_join_all;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, error, info};

/// Escapes text node content. The registry data is author-supplied, so `&`,
/// `<`, and `>` must not leak into the markup.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Orchestrates feed generation. Holds the registry reader and the
/// publication date provider; both default to the shipped HTTP-backed
/// implementations and can be swapped for tests or custom transports.
pub struct FeedGenerator {
    reader: Arc<dyn RegistryReader>,
    dates: Arc<dyn PubDateProvider>,
}

impl FeedGenerator {
    pub fn new() -> Self {
        Self {
            reader: Arc::new(HttpRegistryReader::new()),
            dates: Arc::new(StrategyDateProvider::new()),
        }
    }

    pub fn with_collaborators(
        reader: Arc<dyn RegistryReader>,
        dates: Arc<dyn PubDateProvider>,
    ) -> Self {
        Self { reader, dates }
    }

    /// Generates the RSS feed for the configured registry.
    ///
    /// Returns `None` both when there is nothing to publish (absent or
    /// empty item list) and when any part of the pipeline fails; the two
    /// cases are only distinguishable in the logs. A registry whose items
    /// were all dropped by the exclusion filter still yields a valid
    /// zero-item channel.
    pub async fn generate(&self, options: GenerateRssOptions) -> Option<String> {
        let config = FeedConfig::with_defaults(options);

        match self.try_generate(&config).await {
            Ok(feed) => feed,
            Err(e) => {
                error!("Error generating RSS feed: {}", e);
                None
            }
        }
    }

    async fn try_generate(&self, config: &FeedConfig) -> Result<Option<String>> {
        let registry_url = concat_url_parts(&[&config.base_url, &config.registry.path]);
        let registry = self.reader.read(&registry_url).await?;

        if registry.items.is_empty() {
            info!("Registry at {} has no items, nothing to publish", registry_url);
            return Ok(None);
        }

        let items: Vec<&RegistryItem> = registry
            .items
            .iter()
            .filter(|item| !self.is_excluded(item, config))
            .collect();

        debug!(
            "Rendering {} of {} registry items",
            items.len(),
            registry.items.len()
        );

        // Fan out per item; try_join_all keeps the registry's input order
        // regardless of which date lookup finishes first, and any single
        // failure fails the whole feed.
        let blocks = try_join_all(
            items
                .iter()
                .map(|item| self.render_item_xml(item, config)),
        )
        .await?;

        Ok(Some(render_channel_xml(&blocks, config)))
    }

    fn is_excluded(&self, item: &RegistryItem, config: &FeedConfig) -> bool {
        item.item_type
            .as_deref()
            .is_some_and(|t| config.exclude_item_types.iter().any(|e| e == t))
    }

    async fn render_item_xml(&self, item: &RegistryItem, config: &FeedConfig) -> Result<String> {
        let link = build_item_url(item, config);

        let date = timeout(config.item_timeout, self.dates.pub_date(item, config))
            .await
            .map_err(|_| FeedError::DateLookupTimeout {
                item: item.name.clone(),
            })??;
        let pub_date = format_pub_date(&date);

        let title = escape_xml(item.title.as_deref().unwrap_or(""));
        let description = escape_xml(item.description.as_deref().unwrap_or(""));

        Ok(format!(
            "<item>\n      \
             <title>{title}</title>\n      \
             <link>{link}</link>\n      \
             <guid>{link}</guid>\n      \
             <description>{description}</description>\n      \
             <pubDate>{pub_date}</pubDate>\n    \
             </item>"
        ))
    }
}

impl Default for FeedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn render_channel_xml(items: &[String], config: &FeedConfig) -> String {
    let self_href = concat_url_parts(&[&config.base_url, &config.rss.endpoint]);
    let title = escape_xml(&config.rss.title);
    let description = escape_xml(&config.rss.description);
    let link = &config.rss.link;
    let items = items.join("");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
         <rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n  \
         <channel>\n    \
         <title>{title}</title>\n    \
         <link>{link}</link>\n    \
         <description>{description}</description>\n    \
         <atom:link href=\"{self_href}\" rel=\"self\" type=\"application/rss+xml\" />\n  \
         {items}\n  \
         </channel>\n\
         </rss>\n"
    )
}

/// Generates an RSS 2.0 feed for a shadcn-style registry using the default
/// HTTP reader and date provider. See [`FeedGenerator::generate`] for the
/// `None` semantics.
pub async fn generate_registry_rss_feed(options: GenerateRssOptions) -> Option<String> {
    FeedGenerator::new().generate(options).await
}
