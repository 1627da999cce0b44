//! Editor configuration.
//!
//! All fields have defaults, so a configuration file only needs the values it
//! changes:
//!
//! ```toml
//! panel_offset = 24.0
//! title = "Box styles"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Layout and text settings for a [`StyleEditor`](crate::widget::StyleEditor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Gap between the bottom edge of the box and the panel, in pixels.
    pub panel_offset: f32,
    /// Height of the panel's drag header.
    pub header_height: f32,
    /// Width of the close control at the right end of the header.
    pub close_button_width: f32,
    /// Panel width.
    pub panel_width: f32,
    /// Panel height, header included.
    pub panel_height: f32,
    /// Placeholder shown in the empty input.
    pub placeholder: String,
    /// Heading text inside the box.
    pub title: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            panel_offset: 10.0,
            header_height: 20.0,
            close_button_width: 24.0,
            panel_width: 320.0,
            panel_height: 200.0,
            placeholder: "Enter CSS (e.g., width: 50px)".to_string(),
            title: "The Box".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Set the gap between the box and the panel.
    pub fn with_panel_offset(mut self, offset: f32) -> Self {
        self.panel_offset = offset;
        self
    }

    /// Set the header height.
    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = height.max(0.0);
        self
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
