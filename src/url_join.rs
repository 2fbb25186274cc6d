//! URL part concatenation.
//!
//! Joins base URL, path segments, and item name into one normalized URL.
//! Later absolute parts override everything before them, query strings are
//! merged, and the last hash fragment wins.

use url::form_urlencoded;

fn is_absolute(part: &str) -> bool {
    part.get(..7)
        .is_some_and(|p| p.eq_ignore_ascii_case("http://"))
        || part
            .get(..8)
            .is_some_and(|p| p.eq_ignore_ascii_case("https://"))
}

/// Splits one part into (path, query, hash) on the first `#` and the first
/// `?` before it.
fn split_part(part: &str) -> (&str, &str, &str) {
    let (rest, hash) = match part.find('#') {
        Some(i) => (&part[..i], &part[i + 1..]),
        None => (part, ""),
    };
    let (path, query) = match rest.find('?') {
        Some(i) => (&rest[..i], &rest[i + 1..]),
        None => (rest, ""),
    };
    (path, query, hash)
}

fn append_query_pairs(pairs: &mut Vec<(String, String)>, query: &str) {
    if query.is_empty() {
        return;
    }
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        pairs.push((key.into_owned(), value.into_owned()));
    }
}

/// Collapses runs of slashes to a single slash, keeping the scheme's `//`
/// intact for absolute URLs.
fn collapse_slashes(path: &str) -> String {
    let scheme_end = if is_absolute(path) {
        path.find("//").map(|i| i + 2).unwrap_or(0)
    } else {
        0
    };

    let mut out = String::with_capacity(path.len());
    out.push_str(&path[..scheme_end]);

    let mut previous_was_slash = false;
    for c in path[scheme_end..].chars() {
        if c == '/' {
            if previous_was_slash {
                continue;
            }
            previous_was_slash = true;
        } else {
            previous_was_slash = false;
        }
        out.push(c);
    }
    out
}

/// Joins URL parts into one normalized URL.
///
/// Empty parts are dropped. The last absolute (`http://` / `https://`) part
/// becomes the base and everything before it is discarded. Query parameters
/// from all active parts are merged in first-occurrence order (duplicate
/// keys allowed); the last hash fragment seen wins. Duplicate slashes are
/// collapsed and a trailing slash is stripped unless the whole path is the
/// bare root. A relative first part stays relative.
pub fn concat_url_parts(parts: &[&str]) -> String {
    let valid: Vec<&str> = parts.iter().copied().filter(|p| !p.is_empty()).collect();
    if valid.is_empty() {
        return String::new();
    }

    // Last absolute URL wins; earlier parts are discarded.
    let start = valid.iter().rposition(|p| is_absolute(p)).unwrap_or(0);
    let active = &valid[start..];

    let (first_path, first_query, first_hash) = split_part(active[0]);
    let mut path = first_path.to_string();
    let mut query_pairs: Vec<(String, String)> = Vec::new();
    append_query_pairs(&mut query_pairs, first_query);
    let mut hash = first_hash;

    for part in &active[1..] {
        let (part_path, part_query, part_hash) = split_part(part);

        let trimmed = path.trim_end_matches('/').len();
        path.truncate(trimmed);

        let segment = part_path.trim_start_matches('/');
        if !segment.is_empty() {
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(segment);
        }

        append_query_pairs(&mut query_pairs, part_query);
        if !part_hash.is_empty() {
            hash = part_hash;
        }
    }

    let mut result = collapse_slashes(&path);

    let trimmed = result.trim_end_matches('/').len();
    if trimmed == 0 && !result.is_empty() {
        // Bare root stays "/".
        result.truncate(1);
    } else {
        result.truncate(trimmed);
    }

    if !query_pairs.is_empty() {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &query_pairs {
            serializer.append_pair(key, value);
        }
        result.push('?');
        result.push_str(&serializer.finish());
    }

    if !hash.is_empty() {
        result.push('#');
        result.push_str(hash);
    }

    result
}
