use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::constants::{
    AI_BUBBLE_CLASSES, ATTR_BOUND, ATTR_MESSAGE_ID, ID_CHAT_ROOT, ID_CHAT_WINDOW, ID_FILE_UPLOAD,
    ID_MESSAGE_INPUT, ID_SEND_BUTTON, MESSAGE_BASE_CLASSES, USER_BUBBLE_CLASSES,
};
use crate::dom_utils::{add_classes, element_by_id, ensure_child, input_by_id, scroll_to_bottom};
use crate::messages::Message;
use crate::models::{ChatMessage, Sender};
use crate::state::dispatch_global_message;

/// Bind the widget to the page.
///
/// Missing handles are created inside `#chat-root` (or `<body>`). Listeners
/// are attached once; mounting again is a no-op.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    ensure_markup(document)?;

    let chat_window = element_by_id(document, ID_CHAT_WINDOW)?;
    if chat_window.has_attribute(ATTR_BOUND) {
        return Ok(());
    }

    setup_event_handlers(document)?;
    chat_window.set_attribute(ATTR_BOUND, "true")?;
    crate::debug_log!("Chat widget mounted");
    Ok(())
}

fn ensure_markup(document: &Document) -> Result<(), JsValue> {
    let ids = [ID_CHAT_WINDOW, ID_MESSAGE_INPUT, ID_FILE_UPLOAD, ID_SEND_BUTTON];
    if ids.iter().all(|id| document.get_element_by_id(id).is_some()) {
        return Ok(());
    }

    let parent: Element = match document.get_element_by_id(ID_CHAT_ROOT) {
        Some(root) => root,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("No body found"))?
            .into(),
    };

    let chat_window = ensure_child(document, &parent, "div", ID_CHAT_WINDOW)?;
    if chat_window.class_name().is_empty() {
        chat_window.set_class_name("flex flex-col gap-2 overflow-y-auto");
    }

    let input = ensure_child(document, &parent, "input", ID_MESSAGE_INPUT)?;
    if !input.has_attribute("type") {
        input.set_attribute("type", "text")?;
        input.set_attribute("placeholder", "Ask about your document...")?;
    }

    let file = ensure_child(document, &parent, "input", ID_FILE_UPLOAD)?;
    if !file.has_attribute("type") {
        file.set_attribute("type", "file")?;
        file.set_attribute("accept", ".pdf,.docx,.txt")?;
    }

    let send = ensure_child(document, &parent, "button", ID_SEND_BUTTON)?;
    if send.text_content().unwrap_or_default().is_empty() {
        send.set_attribute("type", "button")?;
        send.set_text_content(Some("Send"));
    }

    Ok(())
}

fn setup_event_handlers(document: &Document) -> Result<(), JsValue> {
    // File picked -> upload immediately
    {
        let file_input = input_by_id(document, ID_FILE_UPLOAD)?;
        let input_clone = file_input.clone();
        let change_handler = Closure::wrap(Box::new(move |_: Event| {
            let file = input_clone.files().and_then(|files| files.get(0));
            if let Some(file) = file {
                dispatch_global_message(Message::FileSelected {
                    file_name: file.name(),
                    file,
                });
            }
        }) as Box<dyn FnMut(_)>);

        file_input.add_event_listener_with_callback("change", change_handler.as_ref().unchecked_ref())?;
        change_handler.forget();
    }

    // Send button
    {
        let send_button = element_by_id(document, ID_SEND_BUTTON)?;
        let input = input_by_id(document, ID_MESSAGE_INPUT)?;
        let click_handler = Closure::wrap(Box::new(move |_: Event| {
            dispatch_global_message(Message::SendRequested(input.value()));
        }) as Box<dyn FnMut(_)>);

        send_button.add_event_listener_with_callback("click", click_handler.as_ref().unchecked_ref())?;
        click_handler.forget();
    }

    // Enter in the text input
    {
        let input = input_by_id(document, ID_MESSAGE_INPUT)?;
        let input_clone = input.clone();
        let keypress_handler = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                dispatch_global_message(Message::SendRequested(input_clone.value()));
            }
        }) as Box<dyn FnMut(_)>);

        input.add_event_listener_with_callback("keypress", keypress_handler.as_ref().unchecked_ref())?;
        keypress_handler.forget();
    }

    Ok(())
}

/// Append one bubble to `#chat-window` and scroll it into view.
pub fn append_message(document: &Document, message: &ChatMessage) -> Result<(), JsValue> {
    let chat_window = element_by_id(document, ID_CHAT_WINDOW)?;

    let bubble = document.create_element("div")?;
    add_classes(&bubble, &MESSAGE_BASE_CLASSES)?;
    bubble.class_list().add_1(message.sender.as_str())?;
    match message.sender {
        Sender::User => add_classes(&bubble, &USER_BUBBLE_CLASSES)?,
        Sender::Ai => add_classes(&bubble, &AI_BUBBLE_CLASSES)?,
    }
    bubble.set_attribute(ATTR_MESSAGE_ID, &message.id.to_string())?;

    // innerText turns newlines into <br> and never parses markup
    let bubble: HtmlElement = bubble.dyn_into()?;
    bubble.set_inner_text(&message.text);

    chat_window.append_child(&bubble)?;
    scroll_to_bottom(&chat_window);
    Ok(())
}

/// Empty the file picker so selecting the same file fires `change` again.
pub fn reset_file_input(document: &Document) -> Result<(), JsValue> {
    input_by_id(document, ID_FILE_UPLOAD)?.set_value("");
    Ok(())
}

pub fn clear_message_input(document: &Document) -> Result<(), JsValue> {
    let input: HtmlInputElement = input_by_id(document, ID_MESSAGE_INPUT)?;
    input.set_value("");
    Ok(())
}
