//! Per-item URL resolution: category lookup plus final URL construction.

use crate::classifier::classify;
use crate::config::{FeedConfig, UrlResolver};
use crate::types::{ItemCategory, RegistryItem};
use crate::url_join::concat_url_parts;

/// Selects the configured resolver for the item's category. Unknown
/// categories resolve to an empty path prefix, which makes string-based
/// resolution fall back to `base_url/name`.
pub fn registry_item_path(item: &RegistryItem, config: &FeedConfig) -> UrlResolver {
    match classify(item) {
        ItemCategory::Block => config.blocks_url.clone(),
        ItemCategory::Component => config.components_url.clone(),
        ItemCategory::Lib => config.libs_url.clone(),
        ItemCategory::Hook => config.hooks_url.clone(),
        ItemCategory::File => config.files_url.clone(),
        ItemCategory::Style => config.styles_url.clone(),
        ItemCategory::Theme => config.themes_url.clone(),
        ItemCategory::Item => config.items_url.clone(),
        ItemCategory::Unknown => UrlResolver::Path(String::new()),
    }
}

/// Builds the full URL for a registry item.
///
/// A `Path` prefix gets the item name appended; resolver functions return
/// the whole relative or absolute path themselves. An absolute resolver
/// result replaces `base_url` entirely via the joiner's override rule, and
/// an empty result never introduces a stray slash.
pub fn build_item_url(item: &RegistryItem, config: &FeedConfig) -> String {
    match registry_item_path(item, config) {
        UrlResolver::Path(prefix) => {
            concat_url_parts(&[&config.base_url, &prefix, &item.name])
        }
        UrlResolver::ByName(resolve) => {
            let resolved = resolve(&item.name);
            concat_url_parts(&[&config.base_url, &resolved])
        }
        UrlResolver::ByItem(resolve) => {
            let resolved = resolve(item);
            concat_url_parts(&[&config.base_url, &resolved])
        }
    }
}
