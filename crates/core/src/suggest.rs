//! Worksheet search autocomplete: wire shape, display shaping, query gating,
//! and the generation counter behind the idle-delay debounce.

use serde::Deserialize;

/// Placeholder token in the configured sample-detail URL. The host backend
/// renders the URL once at page build time with this token in place of a
/// worksheet id; the client substitutes the selected id at navigation time.
pub const URL_PLACEHOLDER: &str = "temp";

/// One entry returned by the suggestion endpoint. `sample` is null for
/// matches found via the worksheet or run id rather than a sample id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionItem {
    pub ws: String,
    pub sample: Option<String>,
    pub run: String,
}

impl SuggestionItem {
    /// Plain-text rendering of the entry, used for tooltips and tests.
    pub fn summary(&self) -> String {
        match &self.sample {
            Some(sample) => format!("Worksheet {} - contains sample {}", self.ws, sample),
            None => format!("Worksheet {}", self.ws),
        }
    }
}

/// A query is only sent once it reaches the configured minimum length.
/// Length is counted on the raw input, matching the host search box.
pub fn should_search(query: &str, min_len: usize) -> bool {
    query.chars().count() >= min_len
}

/// Build the navigation target for a selected worksheet. Only the first
/// occurrence of the placeholder is substituted.
pub fn sample_detail_url(template_url: &str, ws: &str) -> String {
    template_url.replacen(URL_PLACEHOLDER, ws, 1)
}

/// Generation counter behind the idle-delay debounce. Every keystroke bumps
/// the generation; a delayed task only fires if its generation is still
/// current, and a response is only applied under the same check, so
/// superseded requests are dropped instead of racing the newer one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    /// Start a new generation, invalidating all earlier ones.
    pub fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(ws: &str, sample: Option<&str>) -> SuggestionItem {
        SuggestionItem {
            ws: ws.to_string(),
            sample: sample.map(str::to_string),
            run: "RUN1".to_string(),
        }
    }

    #[test]
    fn short_queries_are_gated() {
        assert!(!should_search("", 4));
        assert!(!should_search("24-", 4));
        assert!(should_search("24-1", 4));
        assert!(should_search("24-1234", 4));
    }

    #[test]
    fn worksheet_only_entry_omits_sample_text() {
        let summary = item("24-1234", None).summary();
        assert_eq!(summary, "Worksheet 24-1234");
        assert!(!summary.contains("sample"));
    }

    #[test]
    fn sample_entry_carries_both_ids() {
        let summary = item("24-1234", Some("S1")).summary();
        assert!(summary.contains("24-1234"));
        assert!(summary.contains("contains sample S1"));
    }

    #[test]
    fn null_sample_decodes() {
        let items: Vec<SuggestionItem> =
            serde_json::from_str(r#"[{"ws": "24-1234", "sample": null, "run": "X"}]"#).unwrap();
        assert_eq!(items, vec![item("24-1234", None)]);
    }

    #[test]
    fn placeholder_replaced_exactly_once() {
        assert_eq!(
            sample_detail_url("https://host/samples/temp/", "24-1234"),
            "https://host/samples/24-1234/"
        );
        // the token may appear again later in the path; only the first hit counts
        assert_eq!(
            sample_detail_url("https://host/temp/view/temp/", "24-1234"),
            "https://host/24-1234/view/temp/"
        );
    }

    #[test]
    fn newer_generation_supersedes_older() {
        let mut gate = DebounceGate::default();
        let first = gate.bump();
        let second = gate.bump();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }
}
