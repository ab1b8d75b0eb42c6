//! Light/dark theme preference.
//!
//! Persisted under `crm-theme` and applied as a `data-theme` attribute on
//! the document element so the stylesheet can switch palettes.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

const THEME_KEY: &str = "crm-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button describing the switch target.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

/// Saved preference, defaulting to light.
pub fn load() -> Theme {
    LocalStorage::get(THEME_KEY).unwrap_or_default()
}

/// Persists the preference and applies it to the document.
pub fn apply(theme: Theme) {
    let _ = LocalStorage::set(THEME_KEY, theme);
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        match theme {
            Theme::Dark => {
                let _ = root.set_attribute("data-theme", "dark");
            }
            Theme::Light => {
                let _ = root.remove_attribute("data-theme");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn toggling_flips_and_returns() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
