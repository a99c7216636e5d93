//! Binding of the drop zone state to real DOM elements.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Document, DragEvent, Event, EventTarget, HtmlElement, HtmlInputElement};

use crate::{
    error::{js_message, DropZoneError, Result},
    files::file_names,
    state::DropZone,
    Config,
};

/// The three page elements the controller works with. They belong to the page; the controller
/// only borrows them for the lifetime of its listeners.
#[derive(Debug, Clone)]
pub struct DropZoneElements {
    pub drop_area: HtmlElement,
    pub file_input: HtmlInputElement,
    pub label: HtmlElement,
}

impl DropZoneElements {
    /// Look up the elements named in `config` by id.
    pub fn from_document(document: &Document, config: &Config) -> Result<Self> {
        Ok(Self {
            drop_area: element_by_id(document, config.drop_area_id(), "HTMLElement")?,
            file_input: element_by_id(document, config.file_input_id(), "HTMLInputElement")?,
            label: element_by_id(document, config.label_id(), "HTMLElement")?,
        })
    }
}

fn element_by_id<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DropZoneError::MissingElement { id: id.to_string() })?
        .dyn_into::<T>()
        .map_err(|_| DropZoneError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

type Handler = Closure<dyn FnMut(Event)>;

struct Listener {
    target: EventTarget,
    event: &'static str,
    handler: Handler,
}

/// Shared between the listener closures. Only ever borrowed for the length of one handler.
struct Inner {
    elements: DropZoneElements,
    active_class: String,
    state: DropZone,
}

impl Inner {
    fn on_drag_over(&mut self, event: &Event) {
        event.prevent_default();
        self.state.drag_over();
        self.render();
    }

    fn on_drag_leave(&mut self) {
        self.state.drag_leave();
        self.render();
    }

    fn on_drop(&mut self, event: &Event) {
        event.prevent_default();

        let files = event
            .dyn_ref::<DragEvent>()
            .and_then(DragEvent::data_transfer)
            .and_then(|transfer| transfer.files());

        let names = files.as_ref().map(file_names).unwrap_or_default();
        match self.state.drop_files(names) {
            Ok(selection) => {
                tracing::trace!(
                    "dropped {} file(s), first: {:?}",
                    selection.names().len(),
                    selection.name()
                );
                // Keep the picker as the holder of the authoritative file list.
                self.elements.file_input.set_files(files.as_ref());
            }
            Err(err) => tracing::debug!("ignoring drop: {err}"),
        }

        self.render();
    }

    fn on_change(&mut self) {
        let names = self
            .elements
            .file_input
            .files()
            .as_ref()
            .map(file_names)
            .unwrap_or_default();

        match self.state.pick_files(names) {
            Ok(selection) => tracing::trace!("picked {:?}", selection.name()),
            Err(err) => tracing::debug!("ignoring picker change: {err}"),
        }

        self.render();
    }

    fn render(&self) {
        let classes = self.elements.drop_area.class_list();
        let res = if self.state.is_active() {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        if let Err(err) = res {
            tracing::error!(
                "failed to toggle class {:?}: {}",
                self.active_class,
                js_message(&err)
            );
        }

        if let Some(label) = self.state.label() {
            self.elements.label.set_text_content(Some(&label));
        }
    }
}

/// Wires the drop area, the file input and the label together.
///
/// Listeners stay registered for as long as the controller lives. Dropping it detaches them.
pub struct DropZoneController {
    inner: Rc<RefCell<Inner>>,
    listeners: Vec<Listener>,
}

impl DropZoneController {
    pub fn new(elements: DropZoneElements, config: &Config) -> Result<Self> {
        let drop_area: EventTarget = elements.drop_area.clone().into();
        let file_input: EventTarget = elements.file_input.clone().into();

        let inner = Rc::new(RefCell::new(Inner {
            elements,
            active_class: config.active_class().to_string(),
            state: DropZone::new(config.label_prefix()),
        }));

        let mut controller = Self {
            inner,
            listeners: Vec::with_capacity(5),
        };

        controller.listen(&drop_area, "dragenter", |inner, event| inner.on_drag_over(event))?;
        controller.listen(&drop_area, "dragover", |inner, event| inner.on_drag_over(event))?;
        controller.listen(&drop_area, "dragleave", |inner, _| inner.on_drag_leave())?;
        controller.listen(&drop_area, "drop", |inner, event| inner.on_drop(event))?;
        controller.listen(&file_input, "change", |inner, _| inner.on_change())?;

        Ok(controller)
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        mut callback: impl FnMut(&mut Inner, &Event) + 'static,
    ) -> Result<()> {
        let inner = Rc::downgrade(&self.inner);
        let handler: Handler = Closure::new(move |evt: Event| {
            let Some(shared) = inner.upgrade() else {
                return;
            };
            // A handler re-entered through a synchronously dispatched event is skipped.
            let Ok(mut state) = shared.try_borrow_mut() else {
                tracing::warn!("skipping re-entrant {event} event");
                return;
            };
            callback(&mut *state, &evt);
        });

        target
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .map_err(|err| DropZoneError::Listener(js_message(&err)))?;

        self.listeners.push(Listener {
            target: target.clone(),
            event,
            handler,
        });

        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().state.is_active()
    }

    pub fn label(&self) -> Option<String> {
        self.inner.borrow().state.label()
    }

    /// Names in the current selection, first one displayed.
    pub fn selected_names(&self) -> Vec<String> {
        self.inner
            .borrow()
            .state
            .selection()
            .map(|selection| selection.names().to_vec())
            .unwrap_or_default()
    }

    /// Keep the listeners registered for the rest of the page's life.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for DropZoneController {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let res = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.handler.as_ref().unchecked_ref(),
            );
            if let Err(err) = res {
                tracing::debug!(
                    "failed to remove {} listener: {}",
                    listener.event,
                    js_message(&err)
                );
            }
        }
    }
}
