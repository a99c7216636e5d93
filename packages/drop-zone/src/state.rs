//! Selection state of the drop zone, independent of the DOM.
//!
//! The controller forwards every browser event here and then writes [`DropZone::is_active`] and
//! [`DropZone::label`] back into the page.

use crate::error::{DropZoneError, Result};

/// Where a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Drop,
    Picker,
}

/// The files picked by the most recent drop or picker change.
///
/// Never empty: a gesture that carries no files does not produce a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    names: Vec<String>,
    source: SelectionSource,
}

impl FileSelection {
    fn new(names: Vec<String>, source: SelectionSource) -> Result<Self> {
        if names.is_empty() {
            return Err(DropZoneError::EmptySelection);
        }

        Ok(Self { names, source })
    }

    /// Name of the first file, the one shown in the label.
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn source(&self) -> SelectionSource {
        self.source
    }
}

#[derive(Debug, Clone)]
pub struct DropZone {
    prefix: String,
    active: bool,
    selection: Option<FileSelection>,
}

impl DropZone {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            active: false,
            selection: None,
        }
    }

    /// A drag entered or moved over the drop target.
    pub fn drag_over(&mut self) {
        self.active = true;
    }

    /// The drag left the drop target without dropping.
    pub fn drag_leave(&mut self) {
        self.active = false;
    }

    /// Files were dropped on the target. The highlight is cleared even if nothing was dropped.
    pub fn drop_files<I>(&mut self, names: I) -> Result<&FileSelection>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.active = false;
        self.select(names, SelectionSource::Drop)
    }

    /// The file picker's selection changed.
    pub fn pick_files<I>(&mut self, names: I) -> Result<&FileSelection>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.select(names, SelectionSource::Picker)
    }

    fn select<I>(&mut self, names: I, source: SelectionSource) -> Result<&FileSelection>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        let selection = FileSelection::new(names, source)?;
        Ok(&*self.selection.insert(selection))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn selection(&self) -> Option<&FileSelection> {
        self.selection.as_ref()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The status text, or `None` while nothing has been selected.
    pub fn label(&self) -> Option<String> {
        self.selection
            .as_ref()
            .map(|selection| format!("{}{}", self.prefix, selection.name()))
    }
}

impl Default for DropZone {
    fn default() -> Self {
        Self::new("Selected: ")
    }
}
