//! dom_utils.rs – thin helper layer for repetitive DOM operations.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

/// Fetch an element by id, failing with a readable error when it is missing.
pub fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))
}

/// Fetch an `<input>` element by id and cast it to `HtmlInputElement`.
pub fn input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    element_by_id(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an <input>", id)))
}

/// Add every class in `classes` to the element.
pub fn add_classes(el: &Element, classes: &[&str]) -> Result<(), JsValue> {
    let list = el.class_list();
    for class in classes {
        list.add_1(class)?;
    }
    Ok(())
}

/// Scroll a container so its last child is visible.
pub fn scroll_to_bottom(el: &Element) {
    el.set_scroll_top(el.scroll_height());
}

/// Create `<tag id=…>` unless an element with that id already exists.
pub fn ensure_child(
    document: &Document,
    parent: &Element,
    tag: &str,
    id: &str,
) -> Result<Element, JsValue> {
    if let Some(existing) = document.get_element_by_id(id) {
        return Ok(existing);
    }
    let el = document.create_element(tag)?;
    el.set_id(id);
    parent.append_child(&el)?;
    Ok(el)
}
