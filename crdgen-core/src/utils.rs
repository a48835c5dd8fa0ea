//! Shared string utility functions for code generation.

/// Upper-case the first character when it is an ASCII lowercase letter
/// (e.g., "widget" -> "Widget").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

/// Last element of a slash-separated import path (e.g., "k8s.io/api/apps/v1" -> "v1").
pub fn path_base(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" };
    }
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Everything but the last element of a slash-separated import path
/// (e.g., "k8s.io/api/apps/v1" -> "k8s.io/api/apps").
pub fn path_dir(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(i) => &trimmed[..i],
        None => ".",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("widget"), "Widget");
        assert_eq!(capitalize("Widget"), "Widget");
        assert_eq!(capitalize("int32"), "Int32");
        assert_eq!(capitalize("éclair"), "éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_path_base() {
        assert_eq!(path_base("k8s.io/api/apps/v1"), "v1");
        assert_eq!(path_base("k8s.io/api/apps/v1/"), "v1");
        assert_eq!(path_base("apps"), "apps");
        assert_eq!(path_base(""), ".");
        assert_eq!(path_base("/"), "/");
    }

    #[test]
    fn test_path_dir() {
        assert_eq!(path_dir("k8s.io/api/apps/v1"), "k8s.io/api/apps");
        assert_eq!(path_dir("k8s.io/api/a.b.c/v1"), "k8s.io/api/a.b.c");
        assert_eq!(path_dir("apps"), ".");
        assert_eq!(path_dir("/apps"), "/");
    }
}
