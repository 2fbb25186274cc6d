use crate::pub_date::PubDateStrategy;
use crate::types::RegistryItem;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_REGISTRY_PATH: &str = "r/registry.json";
pub const DEFAULT_RSS_TITLE: &str = "Shadcn Registry";
pub const DEFAULT_RSS_DESCRIPTION: &str =
    "Use the Wandry UI CLI to install custom components and templates from the community.";
pub const DEFAULT_RSS_ENDPOINT: &str = "/rss.xml";
/// Items with this type tag are dropped unless the caller supplies its own
/// exclusion list.
pub const DEFAULT_EXCLUDED_TYPE: &str = "registry:internal";
pub const DEFAULT_ITEM_TIMEOUT: Duration = Duration::from_secs(30);

/// How the URL path for one item category is produced.
///
/// A `Path` prefix gets the item name appended; the function variants return
/// the full relative or absolute path themselves. `ByName` receives just the
/// item name, `ByItem` the whole registry item.
#[derive(Clone)]
pub enum UrlResolver {
    Path(String),
    ByName(Arc<dyn Fn(&str) -> String + Send + Sync>),
    ByItem(Arc<dyn Fn(&RegistryItem) -> String + Send + Sync>),
}

impl UrlResolver {
    pub fn by_name<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::ByName(Arc::new(f))
    }

    pub fn by_item<F>(f: F) -> Self
    where
        F: Fn(&RegistryItem) -> String + Send + Sync + 'static,
    {
        Self::ByItem(Arc::new(f))
    }
}

impl From<&str> for UrlResolver {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for UrlResolver {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl fmt::Debug for UrlResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::ByName(_) => f.write_str("ByName(<fn>)"),
            Self::ByItem(_) => f.write_str("ByItem(<fn>)"),
        }
    }
}

/// GitHub API settings, consumed only by the `githubLastEdit` publication
/// date strategy.
#[derive(Debug, Clone, Default)]
pub struct GithubOptions {
    pub owner: String,
    pub repo: String,
    pub token: Option<String>,
    /// SHA or ref (branch or tag) name.
    pub sha: Option<String>,
    /// Base URL for the GitHub API, defaults to "https://api.github.com".
    pub base_url: Option<String>,
    /// Extra query parameters appended to the commit-listing request.
    pub params: Vec<(String, String)>,
}

/// Channel metadata supplied by the caller. Every field is optional and is
/// merged over the defaults key by key.
#[derive(Debug, Clone, Default)]
pub struct RssOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Channel link. Defaults to `base_url` when not set; an explicit empty
    /// string is preserved as-is.
    pub link: Option<String>,
    pub endpoint: Option<String>,
    pub pub_date_strategy: Option<PubDateStrategy>,
}

#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    /// Path of the registry JSON relative to `base_url`.
    pub path: Option<String>,
}

/// User-facing feed generation options. Everything is optional; see
/// [`FeedConfig::with_defaults`] for the merge rules.
#[derive(Debug, Clone, Default)]
pub struct GenerateRssOptions {
    pub base_url: Option<String>,
    pub registry: Option<RegistryOptions>,
    pub rss: Option<RssOptions>,
    pub github: Option<GithubOptions>,
    pub components_url: Option<UrlResolver>,
    pub blocks_url: Option<UrlResolver>,
    pub libs_url: Option<UrlResolver>,
    pub hooks_url: Option<UrlResolver>,
    pub files_url: Option<UrlResolver>,
    pub styles_url: Option<UrlResolver>,
    pub themes_url: Option<UrlResolver>,
    pub items_url: Option<UrlResolver>,
    /// Type tags whose items are dropped before rendering. `None` applies
    /// the library default of excluding `registry:internal`; an explicit
    /// empty vec excludes nothing.
    pub exclude_item_types: Option<Vec<String>>,
    /// Upper bound on one item's publication date lookup.
    pub item_timeout: Option<Duration>,
}

/// Fully resolved channel metadata.
#[derive(Debug, Clone)]
pub struct RssConfig {
    pub title: String,
    pub description: String,
    pub link: String,
    pub endpoint: String,
    pub pub_date_strategy: PubDateStrategy,
}

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub path: String,
}

/// Options merged over the built-in defaults. This is what the pipeline and
/// the URL resolver actually consume.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub base_url: String,
    pub registry: RegistryConfig,
    pub rss: RssConfig,
    pub github: Option<GithubOptions>,
    pub components_url: UrlResolver,
    pub blocks_url: UrlResolver,
    pub libs_url: UrlResolver,
    pub hooks_url: UrlResolver,
    pub files_url: UrlResolver,
    pub styles_url: UrlResolver,
    pub themes_url: UrlResolver,
    pub items_url: UrlResolver,
    pub exclude_item_types: Vec<String>,
    pub item_timeout: Duration,
}

impl FeedConfig {
    /// Merges user options over the defaults. Top-level keys override
    /// independently; the nested `rss` and `registry` sections merge key by
    /// key. A present-but-empty string always wins over its default.
    pub fn with_defaults(options: GenerateRssOptions) -> Self {
        let base_url = options.base_url.unwrap_or_default();
        let rss = options.rss.unwrap_or_default();
        let registry = options.registry.unwrap_or_default();

        Self {
            registry: RegistryConfig {
                path: registry
                    .path
                    .unwrap_or_else(|| DEFAULT_REGISTRY_PATH.to_string()),
            },
            rss: RssConfig {
                title: rss.title.unwrap_or_else(|| DEFAULT_RSS_TITLE.to_string()),
                description: rss
                    .description
                    .unwrap_or_else(|| DEFAULT_RSS_DESCRIPTION.to_string()),
                link: rss.link.unwrap_or_else(|| base_url.clone()),
                endpoint: rss
                    .endpoint
                    .unwrap_or_else(|| DEFAULT_RSS_ENDPOINT.to_string()),
                pub_date_strategy: rss.pub_date_strategy.unwrap_or(PubDateStrategy::DateNow),
            },
            github: options.github,
            components_url: options.components_url.unwrap_or_else(|| "components".into()),
            blocks_url: options.blocks_url.unwrap_or_else(|| "blocks".into()),
            libs_url: options.libs_url.unwrap_or_else(|| "libs".into()),
            hooks_url: options.hooks_url.unwrap_or_else(|| "hooks".into()),
            files_url: options.files_url.unwrap_or_else(|| "files".into()),
            styles_url: options.styles_url.unwrap_or_else(|| "styles".into()),
            themes_url: options.themes_url.unwrap_or_else(|| "themes".into()),
            items_url: options.items_url.unwrap_or_else(|| "items".into()),
            exclude_item_types: options
                .exclude_item_types
                .unwrap_or_else(|| vec![DEFAULT_EXCLUDED_TYPE.to_string()]),
            item_timeout: options.item_timeout.unwrap_or(DEFAULT_ITEM_TIMEOUT),
            base_url,
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::with_defaults(GenerateRssOptions::default())
    }
}
