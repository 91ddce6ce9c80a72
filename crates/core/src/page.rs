//! URL hygiene for the dashboard shell.

/// Strip a `#fragment` suffix from a URL, leaving path and query untouched.
///
/// Returns `None` when there is nothing to strip, so callers can skip the
/// history rewrite entirely. Fragments otherwise carry stale analysis state
/// across navigations.
pub fn strip_fragment(url: &str) -> Option<String> {
    let idx = url.find('#').filter(|&i| i > 0)?;
    Some(url[..idx].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fragment_keeping_path() {
        assert_eq!(
            strip_fragment("https://host/path#fragment"),
            Some("https://host/path".to_string())
        );
    }

    #[test]
    fn keeps_query_string() {
        assert_eq!(
            strip_fragment("https://host/path?a=1&b=2#section-3"),
            Some("https://host/path?a=1&b=2".to_string())
        );
    }

    #[test]
    fn no_fragment_is_untouched() {
        assert_eq!(strip_fragment("https://host/path?a=1"), None);
    }

    #[test]
    fn idempotent_after_one_strip() {
        let clean = strip_fragment("https://host/path#x").unwrap();
        assert_eq!(strip_fragment(&clean), None);
    }

    #[test]
    fn empty_fragment_still_stripped() {
        assert_eq!(
            strip_fragment("https://host/path#"),
            Some("https://host/path".to_string())
        );
    }
}
