// SPDX-License-Identifier: MPL-2.0
//! Public URL resolution for discovered assets.
//!
//! A discovery key such as `/public/photos/beach.jpg` becomes
//! `<base_url><segment>beach.jpg`, e.g. `/gallery/photos/beach.jpg`. The result
//! only depends on the file name, never on where the file lives at build time.

/// Returns the last segment of a discovery key, accepting `/` and `\` separators.
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Ensures a base URL ends with exactly one trailing `/`. An empty base
/// becomes `/`.
#[must_use]
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim();
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

/// Builds the public URL of a discovered asset.
///
/// # Example
///
/// ```
/// use local_photos::media::resolve_src;
///
/// let src = resolve_src("/gallery/", "photos/", "/public/photos/beach.jpg");
/// assert_eq!(src, "/gallery/photos/beach.jpg");
/// ```
#[must_use]
pub fn resolve_src(base_url: &str, segment: &str, path: &str) -> String {
    format!("{}{}{}", normalize_base(base_url), segment, file_name(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_handles_nested_and_bare_keys() {
        assert_eq!(file_name("/public/photos/a.jpg"), "a.jpg");
        assert_eq!(file_name("a.jpg"), "a.jpg");
        assert_eq!(file_name(r"C:\site\public\photos\b.png"), "b.png");
    }

    #[test]
    fn normalize_base_appends_missing_slash() {
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/gallery"), "/gallery/");
        assert_eq!(normalize_base("/gallery/"), "/gallery/");
        assert_eq!(
            normalize_base("https://cdn.example.com/site"),
            "https://cdn.example.com/site/"
        );
    }

    #[test]
    fn resolve_src_defaults_to_root() {
        assert_eq!(
            resolve_src("/", "photos/", "/public/photos/image.jpg"),
            "/photos/image.jpg"
        );
    }

    #[test]
    fn resolve_src_uses_deployment_prefix() {
        assert_eq!(
            resolve_src("/EngageCollage/", "photos/", "/public/photos/image.jpg"),
            "/EngageCollage/photos/image.jpg"
        );
    }

    #[test]
    fn resolve_src_is_idempotent() {
        let first = resolve_src("/app/", "photos/", "/public/photos/x.webp");
        let second = resolve_src("/app/", "photos/", "/public/photos/x.webp");
        assert_eq!(first, second);
    }
}
