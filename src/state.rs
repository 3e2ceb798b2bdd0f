use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::messages::{Command, Message};
use crate::models::{ChatMessage, PendingUpload, RequestId};
use crate::update::update;

// Store global application state
#[derive(Debug, Default)]
pub struct AppState {
    // Everything rendered so far, in append order. Mirrors #chat-window.
    pub transcript: Vec<ChatMessage>,
    // Uploads whose request has not settled yet
    pub pending_uploads: HashMap<RequestId, PendingUpload>,
    // Chat requests whose reply has not arrived yet
    pub chats_in_flight: HashSet<RequestId>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the reducer for one message and hand back the side effects.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }

    /// Record a new bubble and return the command that draws it.
    pub fn push_message(&mut self, message: ChatMessage) -> Command {
        self.transcript.push(message.clone());
        Command::RenderMessage(message)
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Dispatch a message against the global state and run the resulting
/// commands.
///
/// The mutable borrow is released before any command executes, so a command
/// (or a future it spawns) may dispatch again.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    for cmd in commands {
        crate::command_executors::execute(cmd);
    }
}
