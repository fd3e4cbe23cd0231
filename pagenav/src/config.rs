use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub results_per_page: u32,
    /// Url of the svg sprite sheet holding the arrow icons
    pub icons_href: String,
    /// Class that marks an element as a navigation button
    pub button_class: String,
    /// When set, buttons also submit `{form_field}={page}` from a surrounding form
    pub form_field: Option<String>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            results_per_page: 10,
            icons_href: "/static/icons.svg".to_string(),
            button_class: "btn--inline".to_string(),
            form_field: None,
        }
    }
}

impl PaginationConfig {
    /// Defaults overlaid with `PAGENAV_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup("PAGENAV_RESULTS_PER_PAGE") {
            let key = "PAGENAV_RESULTS_PER_PAGE";
            let per_page = value
                .trim()
                .parse::<u32>()
                .map_err(|source| ConfigError::ParseInt {
                    key,
                    value: value.clone(),
                    source,
                })?;
            if per_page == 0 {
                return Err(ConfigError::Zero { key });
            }
            config.results_per_page = per_page;
        }
        if let Some(icons_href) = lookup("PAGENAV_ICONS_HREF") {
            config.icons_href = icons_href;
        }
        if let Some(field) = lookup("PAGENAV_FORM_FIELD").filter(|f| !f.is_empty()) {
            config.form_field = Some(field);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PaginationConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PaginationConfig::default());
        assert_eq!(config.results_per_page, 10);
    }

    #[test]
    fn test_overrides() {
        let config = PaginationConfig::from_lookup(lookup(&[
            ("PAGENAV_RESULTS_PER_PAGE", " 25"),
            ("PAGENAV_ICONS_HREF", "/img/icons.svg"),
            ("PAGENAV_FORM_FIELD", "page"),
        ]))
        .unwrap();
        assert_eq!(config.results_per_page, 25);
        assert_eq!(config.icons_href, "/img/icons.svg");
        assert_eq!(config.form_field.as_deref(), Some("page"));
    }

    #[test]
    fn test_bad_page_size() {
        let err =
            PaginationConfig::from_lookup(lookup(&[("PAGENAV_RESULTS_PER_PAGE", "ten")])).unwrap_err();
        assert!(matches!(err, ConfigError::ParseInt { .. }));

        let err =
            PaginationConfig::from_lookup(lookup(&[("PAGENAV_RESULTS_PER_PAGE", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Zero { .. }));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: PaginationConfig =
            serde_json::from_str(r#"{ "results_per_page": 5 }"#).unwrap();
        assert_eq!(config.results_per_page, 5);
        assert_eq!(config.button_class, "btn--inline");
    }
}
