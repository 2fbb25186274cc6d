use registry_rss::{classify, ItemCategory, RegistryFile, RegistryItem};

fn item_with_files(name: &str, item_type: Option<&str>, files: Vec<RegistryFile>) -> RegistryItem {
    let mut item = RegistryItem::new(name);
    item.item_type = item_type.map(|t| t.to_string());
    item.files = files;
    item
}

#[test]
fn test_block_path_beats_component_type_tag() {
    // The one place registries most often contradict their own tags: a
    // declared component whose files live under /blocks/ is a block.
    let item = item_with_files(
        "hero",
        Some("registry:component"),
        vec![RegistryFile::new("src/blocks/hero.tsx")],
    );
    assert_eq!(classify(&item), ItemCategory::Block);
}

#[test]
fn test_block_type_tag_without_files() {
    let item = item_with_files("hero", Some("registry:block"), vec![]);
    assert_eq!(classify(&item), ItemCategory::Block);
}

#[test]
fn test_page_type_counts_as_block() {
    let item = item_with_files("landing", Some("registry:page"), vec![]);
    assert_eq!(classify(&item), ItemCategory::Block);

    let item = item_with_files(
        "landing",
        None,
        vec![RegistryFile::with_type("src/app/page.tsx", "registry:page")],
    );
    assert_eq!(classify(&item), ItemCategory::Block);
}

#[test]
fn test_component_from_ui_path() {
    let item = item_with_files(
        "button",
        None,
        vec![RegistryFile::new("components/ui/button.tsx")],
    );
    assert_eq!(classify(&item), ItemCategory::Component);
}

#[test]
fn test_component_from_type_tag() {
    let item = item_with_files("button", Some("registry:ui"), vec![]);
    assert_eq!(classify(&item), ItemCategory::Component);

    let item = item_with_files("button", Some("registry:component"), vec![]);
    assert_eq!(classify(&item), ItemCategory::Component);
}

#[test]
fn test_component_path_beats_lib_type_tag() {
    let item = item_with_files(
        "helper",
        Some("registry:lib"),
        vec![RegistryFile::new("src/components/helper.tsx")],
    );
    assert_eq!(classify(&item), ItemCategory::Component);
}

#[test]
fn test_lib_from_path_variants() {
    for path in [
        "src/lib/utils.ts",
        "src/libs/utils.ts",
        "src/library/utils.ts",
        "src/libraries/utils.ts",
    ] {
        let item = item_with_files("utils", None, vec![RegistryFile::new(path)]);
        assert_eq!(classify(&item), ItemCategory::Lib, "path: {}", path);
    }
}

#[test]
fn test_hook_from_path_and_tag() {
    let item = item_with_files(
        "use-toast",
        None,
        vec![RegistryFile::new("src/hooks/use-toast.ts")],
    );
    assert_eq!(classify(&item), ItemCategory::Hook);

    let item = item_with_files("use-toast", Some("registry:hook"), vec![]);
    assert_eq!(classify(&item), ItemCategory::Hook);
}

#[test]
fn test_hook_type_suppressed_by_component_path() {
    // A registry:hook whose file sits under /ui/ classifies as component
    // because the path signal wins.
    let item = item_with_files(
        "use-button",
        Some("registry:hook"),
        vec![RegistryFile::new("src/ui/use-button.ts")],
    );
    assert_eq!(classify(&item), ItemCategory::Component);
}

#[test]
fn test_file_from_type_tags() {
    let item = item_with_files(
        "env",
        None,
        vec![RegistryFile::with_type(".env.example", "registry:file")],
    );
    assert_eq!(classify(&item), ItemCategory::File);

    let item = item_with_files("env", Some("registry:file"), vec![]);
    assert_eq!(classify(&item), ItemCategory::File);
}

#[test]
fn test_style_and_theme() {
    let item = item_with_files(
        "globals",
        None,
        vec![RegistryFile::new("src/styles/globals.css")],
    );
    assert_eq!(classify(&item), ItemCategory::Style);

    let item = item_with_files(
        "midnight",
        None,
        vec![RegistryFile::new("src/themes/midnight.css")],
    );
    assert_eq!(classify(&item), ItemCategory::Theme);

    let item = item_with_files("midnight", Some("registry:theme"), vec![]);
    assert_eq!(classify(&item), ItemCategory::Theme);
}

#[test]
fn test_item_without_path_markers() {
    let item = item_with_files("starter", Some("registry:item"), vec![]);
    assert_eq!(classify(&item), ItemCategory::Item);

    let item = item_with_files(
        "starter",
        Some("registry:item"),
        vec![RegistryFile::new("src/starter/init.ts")],
    );
    assert_eq!(classify(&item), ItemCategory::Item);
}

#[test]
fn test_item_type_with_lib_path_is_not_item() {
    // A registry:item whose files sit under /lib/ is classified by the
    // path signal instead.
    let item = item_with_files(
        "starter",
        Some("registry:item"),
        vec![RegistryFile::new("src/lib/starter.ts")],
    );
    assert_eq!(classify(&item), ItemCategory::Lib);
}

#[test]
fn test_no_markers_is_unknown() {
    let item = item_with_files("mystery", None, vec![RegistryFile::new("src/misc/thing.ts")]);
    assert_eq!(classify(&item), ItemCategory::Unknown);

    let item = item_with_files("mystery", Some("registry:custom"), vec![]);
    assert_eq!(classify(&item), ItemCategory::Unknown);
}

#[test]
fn test_classification_is_deterministic() {
    let item = item_with_files(
        "card",
        Some("registry:component"),
        vec![
            RegistryFile::new("src/blocks/card.tsx"),
            RegistryFile::new("src/ui/card-footer.tsx"),
        ],
    );
    assert_eq!(classify(&item), classify(&item));
    assert_eq!(classify(&item), ItemCategory::Block);
}
