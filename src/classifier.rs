//! Registry item classification.
//!
//! File-path evidence is the most reliable signal (it reflects real on-disk
//! placement) and outranks an author-declared `type` tag. The one asymmetry:
//! a block path marker beats an explicit `registry:component` type, which is
//! where real-world registries most often contradict their own tags.

use crate::types::{ItemCategory, RegistryItem};

const BLOCK_PATHS: &[&str] = &["/blocks/", "/block/"];
const COMPONENT_PATHS: &[&str] = &["/ui/", "/components/", "/component/"];
const LIB_PATHS: &[&str] = &["/lib/", "/libs/", "/library/", "/libraries/"];
const HOOK_PATHS: &[&str] = &["/hooks/", "/hook/"];
const STYLE_PATHS: &[&str] = &["/styles/", "/style/"];
const THEME_PATHS: &[&str] = &["/themes/", "/theme/"];

fn any_path_contains(item: &RegistryItem, patterns: &[&str]) -> bool {
    item.files
        .iter()
        .any(|file| patterns.iter().any(|pattern| file.path.contains(pattern)))
}

fn any_file_type_in(item: &RegistryItem, types: &[&str]) -> bool {
    item.files.iter().any(|file| {
        file.file_type
            .as_deref()
            .is_some_and(|t| types.contains(&t))
    })
}

fn item_type_in(item: &RegistryItem, types: &[&str]) -> bool {
    item.item_type
        .as_deref()
        .is_some_and(|t| types.contains(&t))
}

fn is_block(item: &RegistryItem) -> bool {
    any_path_contains(item, BLOCK_PATHS)
        || any_file_type_in(item, &["registry:block", "registry:page"])
        || item_type_in(item, &["registry:block", "registry:page"])
}

fn is_component(item: &RegistryItem) -> bool {
    any_path_contains(item, COMPONENT_PATHS)
        || any_file_type_in(item, &["registry:component"])
        // Block path markers dominate an explicit component type tag.
        || (item_type_in(item, &["registry:ui", "registry:component"])
            && !any_path_contains(item, BLOCK_PATHS))
}

fn is_lib(item: &RegistryItem) -> bool {
    any_path_contains(item, LIB_PATHS)
        || any_file_type_in(item, &["registry:lib"])
        || (item_type_in(item, &["registry:lib"])
            && !any_path_contains(
                item,
                &["/blocks/", "/components/", "/ui/", "/hooks/", "/files/"],
            ))
}

fn is_hook(item: &RegistryItem) -> bool {
    any_path_contains(item, HOOK_PATHS)
        || any_file_type_in(item, &["registry:hook"])
        || (item_type_in(item, &["registry:hook"])
            && !any_path_contains(item, &["/blocks/", "/components/", "/ui/"]))
}

fn is_file(item: &RegistryItem) -> bool {
    any_file_type_in(item, &["registry:file"])
        || (item_type_in(item, &["registry:file"])
            && !any_path_contains(
                item,
                &["/blocks/", "/components/", "/ui/", "/hooks/", "/lib/", "/libs/"],
            ))
}

fn is_style(item: &RegistryItem) -> bool {
    any_path_contains(item, STYLE_PATHS)
        || any_file_type_in(item, &["registry:style"])
        || (item_type_in(item, &["registry:style"])
            && !any_path_contains(
                item,
                &["/blocks/", "/components/", "/ui/", "/hooks/", "/lib/"],
            ))
}

fn is_theme(item: &RegistryItem) -> bool {
    any_path_contains(item, THEME_PATHS)
        || any_file_type_in(item, &["registry:theme"])
        || (item_type_in(item, &["registry:theme"])
            && !any_path_contains(
                item,
                &["/blocks/", "/components/", "/ui/", "/hooks/", "/lib/"],
            ))
}

fn is_item(item: &RegistryItem) -> bool {
    // Any category path marker anywhere in the files disqualifies `item`.
    if any_path_contains(
        item,
        &[
            "/blocks/",
            "/components/",
            "/ui/",
            "/hooks/",
            "/lib/",
            "/libs/",
            "/styles/",
            "/themes/",
            "/files/",
        ],
    ) {
        return false;
    }

    if any_file_type_in(item, &["registry:item"]) {
        return true;
    }

    if item_type_in(item, &["registry:item"]) {
        return !any_path_contains(item, &["/lib/", "/libs/"]);
    }

    false
}

/// Classification rules in precedence order. First match wins; later rules
/// never override an earlier positive match.
const RULES: &[(fn(&RegistryItem) -> bool, ItemCategory)] = &[
    (is_block, ItemCategory::Block),
    (is_component, ItemCategory::Component),
    (is_lib, ItemCategory::Lib),
    (is_hook, ItemCategory::Hook),
    (is_file, ItemCategory::File),
    (is_style, ItemCategory::Style),
    (is_theme, ItemCategory::Theme),
    (is_item, ItemCategory::Item),
];

/// Maps a registry item to its semantic category. Pure and total:
/// `Unknown` is the fallback when no rule matches.
pub fn classify(item: &RegistryItem) -> ItemCategory {
    RULES
        .iter()
        .find(|(matches, _)| matches(item))
        .map(|(_, category)| *category)
        .unwrap_or(ItemCategory::Unknown)
}
