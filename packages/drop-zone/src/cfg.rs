use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{DropZoneError, Result};

/// Configuration for the drop zone controller.
///
/// The defaults match the page layout the controller was written for: a `drop-area` region, a
/// `fileInput` picker and a `file-name-display` label.
///
/// # Example
///
/// ```rust, ignore
/// drop_zone::launch(Config::new().with_drop_area_id("upload").with_active_class("hover"))
/// ```
///
/// From JS, the same options can be passed as a plain object with camelCase keys:
///
/// ```js
/// startDropZone({ dropAreaId: "upload", activeClass: "hover" });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub(crate) drop_area_id: String,
    pub(crate) file_input_id: String,
    pub(crate) label_id: String,
    pub(crate) active_class: String,
    pub(crate) label_prefix: String,
    pub(crate) log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drop_area_id: "drop-area".to_string(),
            file_input_id: "fileInput".to_string(),
            label_id: "file-name-display".to_string(),
            active_class: "active".to_string(),
            label_prefix: "Selected: ".to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new config with the default element ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config out of a JS options object. `undefined` and `null` give the defaults.
    pub fn from_js(options: JsValue) -> Result<Self> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }

        serde_wasm_bindgen::from_value(options)
            .map_err(|err| DropZoneError::InvalidOptions(err.to_string()))
    }

    /// Set the id of the element that receives drag and drop events.
    pub fn with_drop_area_id(mut self, id: impl Into<String>) -> Self {
        self.drop_area_id = id.into();
        self
    }

    /// Set the id of the `<input type="file">` element.
    pub fn with_file_input_id(mut self, id: impl Into<String>) -> Self {
        self.file_input_id = id.into();
        self
    }

    /// Set the id of the element that displays the selected file name.
    pub fn with_label_id(mut self, id: impl Into<String>) -> Self {
        self.label_id = id.into();
        self
    }

    /// Set the class toggled on the drop area while a drag hovers over it.
    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    /// Set the text written in front of the file name.
    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    /// Set the maximum level the logger installed by [`crate::start`] records.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn drop_area_id(&self) -> &str {
        &self.drop_area_id
    }

    pub fn file_input_id(&self) -> &str {
        &self.file_input_id
    }

    pub fn label_id(&self) -> &str {
        &self.label_id
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    pub fn label_prefix(&self) -> &str {
        &self.label_prefix
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }
}

/// Log verbosity, mirrored from [`tracing::Level`] so it can be read from JS options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
