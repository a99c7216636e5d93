#![cfg(target_arch = "wasm32")]

use drop_zone::{Config, DropZoneController, DropZoneElements, DropZoneError};
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::{
    window, DataTransfer, Document, DragEvent, DragEventInit, Event, EventInit, File,
    HtmlElement, HtmlInputElement,
};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    window().unwrap().document().unwrap()
}

fn mount_page() -> DropZoneElements {
    document().body().unwrap().set_inner_html(
        r#"
        <div id="drop-area">Drop a file here</div>
        <input type="file" id="fileInput" />
        <p id="file-name-display"></p>
        "#,
    );

    DropZoneElements::from_document(&document(), &Config::default()).unwrap()
}

fn transfer(names: &[&str]) -> DataTransfer {
    let transfer = DataTransfer::new().unwrap();
    for name in names {
        let parts = Array::of1(&JsValue::from_str("contents"));
        let file = File::new_with_str_sequence(&parts, name).unwrap();
        transfer.items().add_with_file(&file).unwrap();
    }
    transfer
}

/// Dispatch a cancelable drag event and report whether its default action was suppressed.
fn drag(target: &HtmlElement, kind: &str, transfer: Option<&DataTransfer>) -> bool {
    let init = DragEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_data_transfer(transfer);

    let event = DragEvent::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn change(input: &HtmlInputElement) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("change", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

fn label_text(elements: &DropZoneElements) -> String {
    elements.label.text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
fn drag_over_highlights_and_leave_clears() {
    let elements = mount_page();
    let controller = DropZoneController::new(elements.clone(), &Config::default()).unwrap();

    assert!(drag(&elements.drop_area, "dragenter", None));
    assert!(elements.drop_area.class_list().contains("active"));
    assert!(controller.is_active());

    assert!(drag(&elements.drop_area, "dragover", None));
    assert!(elements.drop_area.class_list().contains("active"));

    drag(&elements.drop_area, "dragleave", None);
    assert!(!elements.drop_area.class_list().contains("active"));
    assert!(!controller.is_active());
    assert_eq!(label_text(&elements), "");
}

#[wasm_bindgen_test]
fn drop_names_the_file() {
    let elements = mount_page();
    let controller = DropZoneController::new(elements.clone(), &Config::default()).unwrap();

    drag(&elements.drop_area, "dragover", None);
    let prevented = drag(&elements.drop_area, "drop", Some(&transfer(&["report.pdf"])));

    assert!(prevented);
    assert!(!elements.drop_area.class_list().contains("active"));
    assert_eq!(label_text(&elements), "Selected: report.pdf");
    assert_eq!(controller.label().as_deref(), Some("Selected: report.pdf"));

    // the picker now holds the dropped files
    let files = elements.file_input.files().unwrap();
    assert_eq!(files.length(), 1);
    assert_eq!(files.get(0).unwrap().name(), "report.pdf");
}

#[wasm_bindgen_test]
fn drop_keeps_spaces() {
    let elements = mount_page();
    let _controller = DropZoneController::new(elements.clone(), &Config::default()).unwrap();

    drag(&elements.drop_area, "drop", Some(&transfer(&["a b.txt"])));
    assert_eq!(label_text(&elements), "Selected: a b.txt");
}

#[wasm_bindgen_test]
fn drop_names_first_of_many() {
    let elements = mount_page();
    let controller = DropZoneController::new(elements.clone(), &Config::default()).unwrap();

    drag(
        &elements.drop_area,
        "drop",
        Some(&transfer(&["first.pdf", "second.pdf"])),
    );
    assert_eq!(label_text(&elements), "Selected: first.pdf");
    assert_eq!(controller.selected_names(), ["first.pdf", "second.pdf"]);
}

#[wasm_bindgen_test]
fn picker_change_uses_same_format() {
    let elements = mount_page();
    let _controller = DropZoneController::new(elements.clone(), &Config::default()).unwrap();

    let picked = transfer(&["cv final.docx"]);
    elements.file_input.set_files(picked.files().as_ref());
    change(&elements.file_input);

    assert_eq!(label_text(&elements), "Selected: cv final.docx");
    assert!(!elements.drop_area.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn empty_drop_does_not_break_the_zone() {
    let elements = mount_page();
    let _controller = DropZoneController::new(elements.clone(), &Config::default()).unwrap();

    drag(&elements.drop_area, "dragover", None);
    assert!(drag(&elements.drop_area, "drop", Some(&transfer(&[]))));
    assert!(!elements.drop_area.class_list().contains("active"));
    assert_eq!(label_text(&elements), "");

    // a drop without any DataTransfer at all
    assert!(drag(&elements.drop_area, "drop", None));
    assert_eq!(label_text(&elements), "");

    // the zone still works afterwards
    drag(&elements.drop_area, "drop", Some(&transfer(&["later.pdf"])));
    assert_eq!(label_text(&elements), "Selected: later.pdf");

    // and an empty drop keeps the previous label and file list
    drag(&elements.drop_area, "drop", Some(&transfer(&[])));
    assert_eq!(label_text(&elements), "Selected: later.pdf");
    assert_eq!(elements.file_input.files().unwrap().length(), 1);
}

#[wasm_bindgen_test]
fn custom_class_and_prefix() {
    let elements = mount_page();
    let config = Config::new()
        .with_active_class("highlight")
        .with_label_prefix("File: ");
    let _controller = DropZoneController::new(elements.clone(), &config).unwrap();

    drag(&elements.drop_area, "dragenter", None);
    assert!(elements.drop_area.class_list().contains("highlight"));
    assert!(!elements.drop_area.class_list().contains("active"));

    drag(&elements.drop_area, "drop", Some(&transfer(&["x.txt"])));
    assert_eq!(label_text(&elements), "File: x.txt");
}

#[wasm_bindgen_test]
fn dropping_the_controller_detaches_listeners() {
    let elements = mount_page();
    let controller = DropZoneController::new(elements.clone(), &Config::default()).unwrap();
    drop(controller);

    assert!(!drag(&elements.drop_area, "dragover", None));
    assert!(!elements.drop_area.class_list().contains("active"));

    drag(&elements.drop_area, "drop", Some(&transfer(&["ignored.pdf"])));
    assert_eq!(label_text(&elements), "");
}

#[wasm_bindgen_test]
fn missing_and_mistyped_elements() {
    document()
        .body()
        .unwrap()
        .set_inner_html(r#"<div id="drop-area"></div><div id="fileInput"></div>"#);

    let err = DropZoneElements::from_document(&document(), &Config::default()).unwrap_err();
    assert_eq!(
        err,
        DropZoneError::WrongElementType {
            id: "fileInput".to_string(),
            expected: "HTMLInputElement",
        }
    );

    let config = Config::new().with_drop_area_id("nowhere");
    let err = DropZoneElements::from_document(&document(), &config).unwrap_err();
    assert_eq!(
        err,
        DropZoneError::MissingElement {
            id: "nowhere".to_string()
        }
    );
}

#[wasm_bindgen_test]
fn start_reads_js_options() {
    document().body().unwrap().set_inner_html(
        r#"
        <div id="zone"></div>
        <input type="file" id="picker" />
        <span id="status"></span>
        "#,
    );

    let options = js_sys::JSON::parse(
        r#"{ "dropAreaId": "zone", "fileInputId": "picker", "labelId": "status", "logLevel": "trace" }"#,
    )
    .unwrap();
    drop_zone::start(options).unwrap();

    let zone = document()
        .get_element_by_id("zone")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    drag(&zone, "drop", Some(&transfer(&["from-js.pdf"])));

    let status = document().get_element_by_id("status").unwrap();
    assert_eq!(status.text_content().unwrap(), "Selected: from-js.pdf");
}

#[wasm_bindgen_test]
fn start_rejects_bad_options() {
    let options = js_sys::JSON::parse(r#"{ "logLevel": "loud" }"#).unwrap();
    let err = drop_zone::start(options).unwrap_err();
    let message = err.dyn_into::<js_sys::Error>().unwrap().message();
    assert!(String::from(message).starts_with("Invalid drop zone options"));
}
