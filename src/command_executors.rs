use web_sys::Document;

use crate::components::chat_window;
use crate::messages::{Command, Message};
use crate::network::api_client::ApiClient;
use crate::state::{dispatch_global_message, APP_STATE};

/// Run one side effect produced by `update`.
///
/// DOM failures are logged and swallowed; network results always come back
/// as a `*Settled` message, success or not.
pub fn execute(cmd: Command) {
    match cmd {
        Command::UploadDocument { request_id, file } => {
            debug_log!("Upload {} started ({})", request_id, file.name());
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::upload_document(&file).await.map_err(|e| {
                    let reason = format!("{:?}", e);
                    web_sys::console::error_1(
                        &format!("Upload {} failed: {}", request_id, reason).into(),
                    );
                    reason
                });
                let file_name = APP_STATE.with(|state| {
                    state
                        .borrow()
                        .pending_uploads
                        .get(&request_id)
                        .map(|pending| pending.file_name.clone())
                });
                debug_log!("Upload {} settled ({:?})", request_id, file_name);
                dispatch_global_message(Message::UploadSettled { request_id, result });
            });
        }
        Command::SendChat { request_id, text } => {
            debug_log!("Chat {} started ({} chars)", request_id, text.chars().count());
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::send_chat(&text).await.map_err(|e| {
                    let reason = format!("{:?}", e);
                    web_sys::console::error_1(
                        &format!("Chat {} failed: {}", request_id, reason).into(),
                    );
                    reason
                });
                debug_log!("Chat {} settled", request_id);
                dispatch_global_message(Message::ChatSettled { request_id, result });
            });
        }
        Command::RenderMessage(message) => {
            with_document("render message", |doc| chat_window::append_message(doc, &message));
        }
        Command::ResetFileInput => {
            with_document("reset file input", chat_window::reset_file_input);
        }
        Command::ClearMessageInput => {
            with_document("clear message input", chat_window::clear_message_input);
        }
    }
}

fn with_document<F>(what: &str, f: F)
where
    F: FnOnce(&Document) -> Result<(), wasm_bindgen::JsValue>,
{
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            web_sys::console::error_1(&format!("Failed to {}: no document", what).into());
            return;
        }
    };
    if let Err(e) = f(&document) {
        web_sys::console::error_1(&format!("Failed to {}: {:?}", what, e).into());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::constants::{CHAT_FAILED_NOTICE, ID_CHAT_WINDOW, ID_MESSAGE_INPUT};
    use crate::dom_utils::{element_by_id, input_by_id};
    use uuid::Uuid;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        let doc = web_sys::window().unwrap().document().unwrap();
        chat_window::mount(&doc).unwrap();
        doc
    }

    #[wasm_bindgen_test]
    fn chat_failure_appends_one_error_and_clears_input() {
        let doc = document();
        let window = element_by_id(&doc, ID_CHAT_WINDOW).unwrap();
        let before = window.child_element_count();
        let input = input_by_id(&doc, ID_MESSAGE_INPUT).unwrap();
        input.set_value("what is this about?");

        dispatch_global_message(Message::ChatSettled {
            request_id: Uuid::new_v4(),
            result: Err("TypeError: Failed to fetch".into()),
        });

        assert_eq!(window.child_element_count(), before + 1);
        let last = window.last_element_child().unwrap();
        assert_eq!(last.text_content().unwrap_or_default(), CHAT_FAILED_NOTICE);
        assert_eq!(input.value(), "");
    }

    #[wasm_bindgen_test]
    fn dom_mirrors_transcript_tail() {
        let doc = document();
        dispatch_global_message(Message::ChatSettled {
            request_id: Uuid::new_v4(),
            result: Ok(crate::models::ChatReply {
                ai: Some("hi".into()),
                error: Some("oops".into()),
                summary: None,
            }),
        });

        let window = element_by_id(&doc, ID_CHAT_WINDOW).unwrap();
        let last = window.last_element_child().unwrap();
        let tail = APP_STATE.with(|s| s.borrow().transcript.last().cloned()).unwrap();
        assert_eq!(last.text_content().unwrap_or_default(), tail.text);
        assert_eq!(
            last.get_attribute(crate::constants::ATTR_MESSAGE_ID),
            Some(tail.id.to_string())
        );
    }
}
