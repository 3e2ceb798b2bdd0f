// Pure reducer for the chat widget. Touches no DOM, network or console;
// every effect is returned as a `Command`. Failures are logged where they
// happen, in the command executors.
//
use uuid::Uuid;

use crate::constants::{
    CHAT_ERROR_PREFIX, CHAT_FAILED_NOTICE, NO_SUMMARY_NOTICE, SUMMARIZING_PLACEHOLDER,
    SUMMARY_PREFIX, UPLOAD_ERROR_PREFIX, UPLOAD_FAILED_NOTICE, UPLOAD_NOTICE_PREFIX,
};
use crate::messages::{Command, Message};
use crate::models::{ChatMessage, ChatReply, PendingUpload};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::FileSelected { file_name, file } => {
            let request_id = Uuid::new_v4();

            commands.push(state.push_message(ChatMessage::user(format!(
                "{}{}",
                UPLOAD_NOTICE_PREFIX, file_name
            ))));
            commands.push(state.push_message(ChatMessage::ai(SUMMARIZING_PLACEHOLDER)));

            state
                .pending_uploads
                .insert(request_id, PendingUpload { file_name });
            commands.push(Command::UploadDocument { request_id, file });
        }

        Message::SendRequested(raw) => {
            let text = raw.trim();
            if text.is_empty() {
                return commands;
            }

            let request_id = Uuid::new_v4();
            commands.push(state.push_message(ChatMessage::user(text)));
            state.chats_in_flight.insert(request_id);
            commands.push(Command::SendChat {
                request_id,
                text: text.to_string(),
            });
        }

        Message::UploadSettled { request_id, result } => {
            state.pending_uploads.remove(&request_id);

            let text = match result {
                Ok(reply) => upload_reply_text(&reply),
                Err(_) => UPLOAD_FAILED_NOTICE.to_string(),
            };
            commands.push(state.push_message(ChatMessage::ai(text)));
            commands.push(Command::ResetFileInput);
        }

        Message::ChatSettled { request_id, result } => {
            state.chats_in_flight.remove(&request_id);

            match result {
                Ok(reply) => {
                    // Not exclusive: a reply carrying both renders both.
                    if let Some(ai) = reply.ai {
                        commands.push(state.push_message(ChatMessage::ai(ai)));
                    }
                    if let Some(error) = reply.error {
                        commands.push(state.push_message(ChatMessage::ai(format!(
                            "{}{}",
                            CHAT_ERROR_PREFIX, error
                        ))));
                    }
                }
                Err(_) => {
                    commands.push(state.push_message(ChatMessage::ai(CHAT_FAILED_NOTICE)));
                }
            }
            commands.push(Command::ClearMessageInput);
        }
    }

    commands
}

/// Text of the ai bubble answering an upload. `summary` wins over `error`;
/// the `ai` field is ignored for uploads.
pub fn upload_reply_text(reply: &ChatReply) -> String {
    if let Some(summary) = &reply.summary {
        format!("{}{}", SUMMARY_PREFIX, summary)
    } else if let Some(error) = &reply.error {
        format!("{}{}", UPLOAD_ERROR_PREFIX, error)
    } else {
        NO_SUMMARY_NOTICE.to_string()
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn text_file(name: &str) -> web_sys::File {
        let parts = js_sys::Array::of1(&JsValue::from_str("hello"));
        web_sys::File::new_with_str_sequence(&parts, name).unwrap()
    }

    #[wasm_bindgen_test]
    fn file_selection_renders_two_messages_then_uploads() {
        let mut state = AppState::new();
        let file = text_file("notes.txt");
        let cmds = update(
            &mut state,
            Message::FileSelected {
                file_name: "notes.txt".into(),
                file: file.clone(),
            },
        );

        assert_eq!(cmds.len(), 3);
        assert_eq!(state.transcript.len(), 2);
        assert_eq!(state.transcript[0].text, "📎 Uploaded: notes.txt");
        assert_eq!(state.transcript[1].text, SUMMARIZING_PLACEHOLDER);
        match &cmds[2] {
            Command::UploadDocument { request_id, file: f } => {
                assert_eq!(f, &file);
                assert_eq!(state.pending_uploads[request_id].file_name, "notes.txt");
            }
            other => panic!("expected UploadDocument, got {:?}", other),
        }
    }
}
