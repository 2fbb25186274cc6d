use chrono::{TimeZone, Utc};
use registry_rss::{
    format_pub_date, FeedConfig, FeedError, GenerateRssOptions, GithubOptions, PubDateProvider,
    PubDateStrategy, RegistryFile, RegistryItem, RssOptions, StrategyDateProvider,
};
use std::io::Write;
use std::sync::Arc;

fn config_with_strategy(strategy: PubDateStrategy, github: Option<GithubOptions>) -> FeedConfig {
    FeedConfig::with_defaults(GenerateRssOptions {
        rss: Some(RssOptions {
            pub_date_strategy: Some(strategy),
            ..Default::default()
        }),
        github,
        ..Default::default()
    })
}

fn item_with_file(name: &str, path: &str) -> RegistryItem {
    let mut item = RegistryItem::new(name);
    item.files = vec![RegistryFile::new(path)];
    item
}

#[test]
fn test_format_pub_date_is_rfc822_gmt() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap();
    assert_eq!(format_pub_date(&date), "Mon, 15 Jan 2024 12:30:45 GMT");
}

#[tokio::test]
async fn test_date_now_strategy() {
    let provider = StrategyDateProvider::new();
    let config = config_with_strategy(PubDateStrategy::DateNow, None);
    let item = item_with_file("button", "components/ui/button.tsx");

    let before = Utc::now();
    let date = provider.pub_date(&item, &config).await.expect("dateNow");
    let after = Utc::now();

    assert!(date >= before && date <= after);
}

#[tokio::test]
async fn test_custom_strategy_receives_item() {
    let fixed = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
    let provider = StrategyDateProvider::new();
    let config = config_with_strategy(
        PubDateStrategy::Custom(Arc::new(move |item| {
            assert_eq!(item.name, "button");
            fixed
        })),
        None,
    );
    let item = item_with_file("button", "components/ui/button.tsx");

    let date = provider.pub_date(&item, &config).await.expect("custom");
    assert_eq!(date, fixed);
}

#[tokio::test]
async fn test_file_mtime_strategy_reads_modified_time() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "export const button = {{}};").expect("write");

    let provider = StrategyDateProvider::new();
    let config = config_with_strategy(PubDateStrategy::FileMtime, None);
    let item = item_with_file("button", file.path().to_str().expect("utf-8 path"));

    let date = provider.pub_date(&item, &config).await.expect("mtime");
    let age = Utc::now().signed_duration_since(date);
    assert!(age.num_seconds() < 60, "mtime should be recent: {}", date);
}

#[tokio::test]
async fn test_file_mtime_strategy_without_files_is_an_error() {
    let provider = StrategyDateProvider::new();
    let config = config_with_strategy(PubDateStrategy::FileMtime, None);
    let item = RegistryItem::new("ghost");

    let result = provider.pub_date(&item, &config).await;
    assert!(matches!(result, Err(FeedError::MissingFile { .. })));
}

#[tokio::test]
async fn test_file_mtime_strategy_missing_file_is_an_error() {
    let provider = StrategyDateProvider::new();
    let config = config_with_strategy(PubDateStrategy::FileMtime, None);
    let item = item_with_file("ghost", "no/such/file.tsx");

    let result = provider.pub_date(&item, &config).await;
    assert!(matches!(result, Err(FeedError::Io(_))));
}

#[tokio::test]
async fn test_github_strategy_without_config_falls_back_to_now() {
    let provider = StrategyDateProvider::new();
    let config = config_with_strategy(PubDateStrategy::GithubLastEdit, None);
    let item = item_with_file("button", "components/ui/button.tsx");

    let before = Utc::now();
    let date = provider.pub_date(&item, &config).await.expect("fallback");
    assert!(date >= before);
}

#[tokio::test]
async fn test_github_strategy_falls_back_to_now_on_http_error() {
    let provider = StrategyDateProvider::new();
    // Nothing listens on the discard port, so the lookup fails fast and the
    // strategy must absorb the error instead of failing the item.
    let config = config_with_strategy(
        PubDateStrategy::GithubLastEdit,
        Some(GithubOptions {
            owner: "acme".to_string(),
            repo: "ui".to_string(),
            base_url: Some("http://127.0.0.1:9".to_string()),
            ..Default::default()
        }),
    );
    let item = item_with_file("button", "components/ui/button.tsx");

    let before = Utc::now();
    let date = provider.pub_date(&item, &config).await.expect("fallback");
    assert!(date >= before);
}
