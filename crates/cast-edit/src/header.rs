//! Cast header model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Recording metadata, the first line of a cast file.
///
/// Only the format version and terminal dimensions are required; everything
/// else is optional and omitted from output when absent. Unknown fields in
/// input headers are tolerated and dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Format version; files this crate writes are always version 2.
    pub version: u8,
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
    /// Recording start, seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// Total recording duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Idle time limit applied while recording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_time_limit: Option<f64>,
    /// Command that was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Recording title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Captured environment variables.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

impl Default for Header {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl Header {
    /// Create a version-2 header with the given terminal dimensions.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            version: 2,
            width,
            height,
            timestamp: None,
            duration: None,
            idle_time_limit: None,
            command: None,
            title: None,
            env: HashMap::new(),
        }
    }

    /// Set the recorded command.
    #[must_use]
    pub fn with_command(mut self, cmd: impl Into<String>) -> Self {
        self.command = Some(cmd.into());
        self
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_header_roundtrips() {
        let header = Header::new(80, 24);
        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(json, r#"{"version":2,"width":80,"height":24}"#);

        let parsed: Header = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn optional_fields_survive_roundtrip() {
        let mut header = Header::new(120, 40)
            .with_command("/bin/bash")
            .with_title("Demo");
        header.timestamp = Some(1_704_067_200);
        header.env.insert("SHELL".to_string(), "/bin/bash".to_string());

        let json = serde_json::to_string(&header).unwrap();
        let parsed: Header = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let json = r##"{"version": 2, "width": 80, "height": 24, "theme": {"fg": "#ffffff"}}"##;
        let parsed: Header = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.width, 80);
    }

    #[test]
    fn missing_dimensions_are_rejected() {
        let json = r#"{"version": 2}"#;
        assert!(serde_json::from_str::<Header>(json).is_err());
    }
}
