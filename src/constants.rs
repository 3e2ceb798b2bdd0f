// DOM ids of the four widget handles. The page template provides them; the
// widget creates them itself when they are missing.
pub const ID_CHAT_ROOT: &str = "chat-root";
pub const ID_CHAT_WINDOW: &str = "chat-window";
pub const ID_MESSAGE_INPUT: &str = "message-input";
pub const ID_FILE_UPLOAD: &str = "file-upload";
pub const ID_SEND_BUTTON: &str = "send-button";

// Marks elements whose listeners are already attached.
pub const ATTR_BOUND: &str = "data-bound";
pub const ATTR_MESSAGE_ID: &str = "data-message-id";

// HTTP contract with the summarisation endpoint
pub const CHAT_PATH: &str = "/chat";
pub const FIELD_FILE: &str = "file";
pub const FIELD_MESSAGE: &str = "message";

// Rendered texts
pub const UPLOAD_NOTICE_PREFIX: &str = "📎 Uploaded: ";
pub const SUMMARIZING_PLACEHOLDER: &str = "⏳ Summarizing your document, please wait...";
pub const SUMMARY_PREFIX: &str = "📘 Summary:\n";
pub const UPLOAD_ERROR_PREFIX: &str = "❌ Error: ";
pub const NO_SUMMARY_NOTICE: &str = "⚠️ No summary returned.";
pub const UPLOAD_FAILED_NOTICE: &str = "❌ Error: Could not summarize the document.";
pub const CHAT_ERROR_PREFIX: &str = "❌ ";
pub const CHAT_FAILED_NOTICE: &str = "❌ Error: Could not get a response.";

// Bubble styling (Tailwind utility classes used by the page template)
pub const MESSAGE_BASE_CLASSES: [&str; 4] = ["message", "p-2", "rounded", "max-w-[75%]"];
pub const USER_BUBBLE_CLASSES: [&str; 3] = ["self-end", "bg-blue-500", "text-white"];
pub const AI_BUBBLE_CLASSES: [&str; 2] = ["self-start", "bg-gray-200"];
