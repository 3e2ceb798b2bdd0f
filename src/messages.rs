// The events the widget reacts to, and the side effects the reducer asks
// for in return.
//
use crate::models::{ChatMessage, ChatReply, RequestId};
use web_sys::File;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // User actions
    FileSelected {
        file_name: String,
        file: File,
    },
    SendRequested(String),               // raw text input value, untrimmed

    // Network completions. `Err` carries a transport or decode failure.
    UploadSettled {
        request_id: RequestId,
        result: Result<ChatReply, String>,
    },
    ChatSettled {
        request_id: RequestId,
        result: Result<ChatReply, String>,
    },
}

/// Side effects produced by `update`, executed once the state borrow is
/// released.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a bubble to the chat window and scroll to it
    RenderMessage(ChatMessage),

    /// POST the file as multipart field `file`
    UploadDocument {
        request_id: RequestId,
        file: File,
    },

    /// POST the text as multipart field `message`
    SendChat {
        request_id: RequestId,
        text: String,
    },

    /// Empty the file input so the same file can be picked again
    ResetFileInput,

    /// Empty the text input
    ClearMessageInput,
}
