//! Drop Zone
//!
//! ## Overview
//! ------------
//! Drag-and-drop file selection for a web page. Three elements the page already contains are
//! wired together:
//! - a drop area, highlighted with a class while a file is dragged over it,
//! - an `<input type="file">` picker, which holds the selected file list,
//! - a label showing `"Selected: <name>"` for the first selected file.
//!
//! Dropping files on the area and choosing them with the picker produce the same label. A
//! gesture that carries no files leaves the label alone.
//!
//! The rules live in [`DropZone`], which knows nothing about the DOM. [`DropZoneController`]
//! forwards browser events to it and writes the result back into the page.
//!
//! ## Usage
//! ------------
//! From Rust:
//!
//! ```rust, ignore
//! drop_zone::launch(drop_zone::Config::new())?;
//! ```
//!
//! From JS, after loading the wasm module:
//!
//! ```js
//! startDropZone({ activeClass: "highlight", logLevel: "debug" });
//! ```

use wasm_bindgen::prelude::*;

pub use crate::cfg::{Config, LogLevel};
pub use crate::dom::{DropZoneController, DropZoneElements};
pub use crate::error::{DropZoneError, Result};
pub use crate::files::file_names;
pub use crate::state::{DropZone, FileSelection, SelectionSource};

mod cfg;
mod dom;
mod error;
mod files;
mod state;

/// Attach a drop zone to the current document and keep it alive for the rest of the page's life.
pub fn launch(config: Config) -> Result<()> {
    let document = web_sys::window()
        .ok_or(DropZoneError::NoWindow)?
        .document()
        .ok_or(DropZoneError::NoDocument)?;

    let elements = DropZoneElements::from_document(&document, &config)?;
    DropZoneController::new(elements, &config)?.forget();

    tracing::info!(
        "drop zone attached to #{} (input #{}, label #{})",
        config.drop_area_id(),
        config.file_input_id(),
        config.label_id()
    );

    Ok(())
}

/// JS entry point. `options` is an optional object with camelCase [`Config`] fields.
#[wasm_bindgen(js_name = startDropZone)]
pub fn start(options: JsValue) -> Result<(), JsValue> {
    let config = Config::from_js(options)?;
    init_logger(config.log_level());
    launch(config)?;
    Ok(())
}

/// Install `tracing-wasm` as the global subscriber unless one is already set.
#[cfg(feature = "logger")]
pub fn init_logger(level: LogLevel) {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::default()
            .set_max_level(level.into())
            .build(),
    );
}

#[cfg(not(feature = "logger"))]
pub fn init_logger(_level: LogLevel) {}
