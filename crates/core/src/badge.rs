//! Status badges: the endpoint registry, wire payloads, and the severity
//! class relay. Severity thresholds are computed server-side; the client
//! copies the returned token into the markup unchanged.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Badge registry
// ---------------------------------------------------------------------------

/// The badge endpoints a deployment may expose. Any subset may be configured;
/// an absent badge renders nothing and does not affect the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    Assigned,
    Pending,
    Qc,
}

impl BadgeKind {
    pub const ALL: [BadgeKind; 3] = [BadgeKind::Assigned, BadgeKind::Pending, BadgeKind::Qc];

    pub fn label(self) -> &'static str {
        match self {
            Self::Assigned => "Checks assigned to you",
            Self::Pending => "Worksheets awaiting IGV checks",
            Self::Qc => "Worksheets awaiting QC sign-off",
        }
    }

    /// Element id of the count span in the rendered tree.
    pub fn text_id(self) -> &'static str {
        match self {
            Self::Assigned => "num_assigned_text",
            Self::Pending => "num_pending_text",
            Self::Qc => "num_qc_text",
        }
    }

    /// Element id of the surrounding alert box.
    pub fn alert_id(self) -> &'static str {
        match self {
            Self::Assigned => "num_assigned_alert",
            Self::Pending => "num_pending_alert",
            Self::Qc => "num_qc_alert",
        }
    }
}

// ---------------------------------------------------------------------------
// Wire payload
// ---------------------------------------------------------------------------

/// Wire payload of a badge endpoint. The count field is named `num_checks`
/// on the assigned endpoint and `num_pending` on the others; both decode
/// into `count`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BadgePayload {
    #[serde(alias = "num_checks", alias = "num_pending")]
    pub count: u64,
    pub css_class: SeverityClass,
}

/// Server-computed severity token. The known values form a small closed set,
/// but unknown tokens are relayed verbatim so the markup always matches what
/// the server asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeverityClass {
    Success,
    Warning,
    Danger,
    Info,
    Other(String),
}

impl SeverityClass {
    pub fn from_token(token: &str) -> Self {
        match token {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            "info" => Self::Info,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Other(token) => token,
        }
    }

    /// Class for the count span, e.g. `badge-success`.
    pub fn badge_class(&self) -> String {
        format!("badge-{}", self.token())
    }

    /// Class for the surrounding box, e.g. `alert-warning`.
    pub fn alert_class(&self) -> String {
        format!("alert-{}", self.token())
    }
}

impl<'de> Deserialize<'de> for SeverityClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token))
    }
}

// ---------------------------------------------------------------------------
// Slot state
// ---------------------------------------------------------------------------

/// Render state of one badge slot. A slot starts out Loading and resolves
/// exactly once, so there is never more than one in-flight render per badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeSlot {
    Loading,
    Ready(BadgePayload),
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigned_payload_decodes_num_checks() {
        let payload: BadgePayload =
            serde_json::from_str(r#"{"num_checks": 3, "css_class": "warning"}"#).unwrap();
        assert_eq!(payload.count, 3);
        assert_eq!(payload.css_class, SeverityClass::Warning);
    }

    #[test]
    fn pending_payload_decodes_num_pending() {
        let payload: BadgePayload =
            serde_json::from_str(r#"{"num_pending": 0, "css_class": "success"}"#).unwrap();
        assert_eq!(payload.count, 0);
        assert_eq!(payload.css_class, SeverityClass::Success);
    }

    #[test]
    fn unknown_severity_token_passes_through() {
        let severity = SeverityClass::from_token("secondary");
        assert_eq!(severity.badge_class(), "badge-secondary");
        assert_eq!(severity.alert_class(), "alert-secondary");
    }

    #[test]
    fn known_severity_tokens_round_trip() {
        for token in ["success", "warning", "danger", "info"] {
            assert_eq!(SeverityClass::from_token(token).token(), token);
        }
    }

    #[test]
    fn element_ids_match_host_markup() {
        assert_eq!(BadgeKind::Assigned.text_id(), "num_assigned_text");
        assert_eq!(BadgeKind::Assigned.alert_id(), "num_assigned_alert");
        assert_eq!(BadgeKind::Pending.text_id(), "num_pending_text");
        assert_eq!(BadgeKind::Qc.alert_id(), "num_qc_alert");
    }
}
