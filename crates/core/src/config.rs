use serde::Deserialize;

/// Where the dataset lives and which page elements the app binds to.
///
/// Every field has a default, so a partial JSON override is enough:
/// `{"dataset_url": "data/tactics.json"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub dataset_url: String,
    pub map_select_id: String,
    pub side_select_id: String,
    pub operator_select_id: String,
    pub map_panel_id: String,
    pub operator_panel_id: String,
    /// Most verbose `tracing` level forwarded to the console.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            dataset_url: "tactics.json".to_string(),
            map_select_id: "map-selection".to_string(),
            side_select_id: "side-selection".to_string(),
            operator_select_id: "operator-selection".to_string(),
            map_panel_id: "tactics-container".to_string(),
            operator_panel_id: "operator-tactics-container".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json_overrides(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parsed `log_level`; unknown names fall back to `INFO`.
    pub fn max_log_level(&self) -> tracing::Level {
        self.log_level
            .trim()
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = PageConfig::from_json_overrides(r#"{"dataset_url":"data/r6.json"}"#).unwrap();
        assert_eq!(cfg.dataset_url, "data/r6.json");
        assert_eq!(cfg.map_select_id, "map-selection");
        assert_eq!(cfg.operator_panel_id, "operator-tactics-container");
    }

    #[test]
    fn empty_override_is_default() {
        assert_eq!(
            PageConfig::from_json_overrides("{}").unwrap(),
            PageConfig::default()
        );
    }

    #[test]
    fn log_level_parses_with_info_fallback() {
        assert_eq!(PageConfig::default().max_log_level(), tracing::Level::INFO);

        let cfg = PageConfig::from_json_overrides(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(cfg.max_log_level(), tracing::Level::DEBUG);

        let cfg = PageConfig::from_json_overrides(r#"{"log_level":"chatty"}"#).unwrap();
        assert_eq!(cfg.max_log_level(), tracing::Level::INFO);
    }

    #[test]
    fn invalid_override_is_rejected() {
        assert!(PageConfig::from_json_overrides("dataset_url=x").is_err());
    }
}
