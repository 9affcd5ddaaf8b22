//! Selector and class configuration for the nav toggle

use serde::{Deserialize, Serialize};

use crate::error::{NavResult, NavToggleError};

pub const DEFAULT_TOGGLE_SELECTOR: &str = ".nav-toggle-btn";
pub const DEFAULT_LINKS_SELECTOR: &str = ".nav-links";
pub const DEFAULT_CLASS_NAME: &str = "show-nav";

/// Which elements to wire up and which class to flip.
///
/// Every field is optional when deserializing; missing ones fall back to the
/// markup conventions of the stock site template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavToggleConfig {
    /// Selector for the toggle button (first match is used)
    #[serde(alias = "toggleSelector")]
    pub toggle_selector: String,
    /// Selector for the nav link containers (all matches are toggled)
    #[serde(alias = "linksSelector")]
    pub links_selector: String,
    /// Presentation class flipped on each link container
    #[serde(alias = "className")]
    pub class_name: String,
}

impl Default for NavToggleConfig {
    fn default() -> Self {
        Self {
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_string(),
            links_selector: DEFAULT_LINKS_SELECTOR.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl NavToggleConfig {
    pub fn new(
        toggle_selector: impl Into<String>,
        links_selector: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            toggle_selector: toggle_selector.into(),
            links_selector: links_selector.into(),
            class_name: class_name.into(),
        }
    }

    /// Parse a config from a JSON object
    pub fn from_json(json: &str) -> NavResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn with_toggle_selector(mut self, selector: impl Into<String>) -> Self {
        self.toggle_selector = selector.into();
        self
    }

    pub fn with_links_selector(mut self, selector: impl Into<String>) -> Self {
        self.links_selector = selector.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Check the config before it is used against a document.
    ///
    /// Selector syntax is left to the DOM backend; here we only reject blank
    /// selectors and class names `classList.toggle` would throw on.
    pub fn validate(&self) -> NavResult<()> {
        if self.toggle_selector.trim().is_empty() {
            return Err(NavToggleError::InvalidConfig(
                "toggle selector is empty".to_string(),
            ));
        }
        if self.links_selector.trim().is_empty() {
            return Err(NavToggleError::InvalidConfig(
                "links selector is empty".to_string(),
            ));
        }
        if self.class_name.is_empty() {
            return Err(NavToggleError::InvalidConfig(
                "class name is empty".to_string(),
            ));
        }
        if self.class_name.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(NavToggleError::InvalidConfig(format!(
                "class name '{}' contains whitespace",
                self.class_name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NavToggleConfig::default();
        assert_eq!(config.toggle_selector, ".nav-toggle-btn");
        assert_eq!(config.links_selector, ".nav-links");
        assert_eq!(config.class_name, "show-nav");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = NavToggleConfig::from_json(r#"{"class_name": "open"}"#).unwrap();
        assert_eq!(config.class_name, "open");
        assert_eq!(config.toggle_selector, DEFAULT_TOGGLE_SELECTOR);
        assert_eq!(config.links_selector, DEFAULT_LINKS_SELECTOR);
    }

    #[test]
    fn test_camel_case_keys() {
        let config = NavToggleConfig::from_json(
            r##"{"toggleSelector": "#menu-btn", "linksSelector": "nav ul"}"##,
        )
        .unwrap();
        assert_eq!(config.toggle_selector, "#menu-btn");
        assert_eq!(config.links_selector, "nav ul");
        assert_eq!(config.class_name, DEFAULT_CLASS_NAME);
    }

    #[test]
    fn test_malformed_json() {
        let err = NavToggleConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, NavToggleError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_class_names() {
        let config = NavToggleConfig::default().with_class_name("");
        assert!(matches!(
            config.validate(),
            Err(NavToggleError::InvalidConfig(_))
        ));

        let config = NavToggleConfig::default().with_class_name("show nav");
        assert!(matches!(
            config.validate(),
            Err(NavToggleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_blank_selectors() {
        let config = NavToggleConfig::default().with_toggle_selector("   ");
        assert!(config.validate().is_err());

        let config = NavToggleConfig::default().with_links_selector("");
        assert!(config.validate().is_err());
    }
}
