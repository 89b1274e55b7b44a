//! Conversation state for the embeddable chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget component keeps one [`ChatSession`] in a signal. Every
//! transition here writes through to the key-value store so a reload (or
//! another page of the same ERP) picks up the same conversation.
//!
//! DESIGN
//! ======
//! - Open/closed state and the active chat id live under [`STATE_KEY`].
//! - Messages live under `erp-chat-messages-{chat_id}` as the full ordered
//!   list; each append rewrites the whole list.
//! - Sends are not serialized. `pending` counts in-flight requests and the
//!   typing indicator shows while it is non-zero.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::api::ChatError;
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const STATE_KEY: &str = "erp-chat-widget-state";
pub const MESSAGES_KEY_PREFIX: &str = "erp-chat-messages-";
pub const MAX_MESSAGE_CHARS: usize = 500;

pub const GREETING: &str = "Hi! I'm your AI assistant. How can I help you today?";
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";
pub const OFFLINE_REPLY: &str = "Unable to connect to the server. Please check your connection.";

pub fn messages_key(chat_id: &str) -> String {
    format!("{MESSAGES_KEY_PREFIX}{chat_id}")
}

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }

    pub fn avatar(self) -> &'static str {
        match self {
            Self::User => "👤",
            Self::Bot => "🤖",
        }
    }
}

/// A single persisted chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    /// ISO-8601 creation time.
    pub timestamp: String,
}

/// Shape stored under [`STATE_KEY`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub current_chat_id: Option<String>,
}

/// Live conversation state for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSession {
    pub chat_id: String,
    pub is_open: bool,
    pub messages: Vec<Message>,
    /// Placeholder greeting shown until the first user message.
    pub greeting_visible: bool,
    /// Requests awaiting a reply.
    pub pending: usize,
}

impl ChatSession {
    /// Rebuild the session from `store`.
    ///
    /// A persisted `{isOpen, currentChatId}` wins over `minimized`; with no
    /// persisted state the widget starts open iff it is not minimized and
    /// uses `fresh_id`. Messages are loaded for whichever chat id results.
    pub fn restore<S>(store: &S, minimized: bool, fresh_id: String) -> Self
    where
        S: KeyValueStore + ?Sized,
    {
        let (is_open, chat_id) = match load_json::<_, PersistedState>(store, STATE_KEY) {
            Some(saved) => {
                let chat_id = saved.current_chat_id.filter(|id| !id.is_empty()).unwrap_or(fresh_id);
                (saved.is_open, chat_id)
            }
            None => (!minimized, fresh_id),
        };
        let messages: Vec<Message> = load_json(store, &messages_key(&chat_id)).unwrap_or_default();
        let greeting_visible = messages.is_empty();
        Self { chat_id, is_open, messages, greeting_visible, pending: 0 }
    }

    pub fn typing(&self) -> bool {
        self.pending > 0
    }

    /// Flip open/minimized. Returns the new open flag.
    pub fn toggle<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> bool {
        self.set_open(store, !self.is_open);
        self.is_open
    }

    pub fn minimize<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        self.set_open(store, false);
    }

    pub fn open<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        self.set_open(store, true);
    }

    pub fn close<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        self.set_open(store, false);
    }

    fn set_open<S: KeyValueStore + ?Sized>(&mut self, store: &S, open: bool) {
        self.is_open = open;
        self.save_state(store);
    }

    /// Persist `{isOpen, currentChatId}`.
    pub fn save_state<S: KeyValueStore + ?Sized>(&self, store: &S) {
        let state = PersistedState { is_open: self.is_open, current_chat_id: Some(self.chat_id.clone()) };
        save_json(store, STATE_KEY, &state);
    }

    /// Append a message and persist the full list.
    pub fn push<S: KeyValueStore + ?Sized>(&mut self, store: &S, message: Message) {
        if message.sender == Sender::User {
            self.greeting_visible = false;
        }
        self.messages.push(message);
        save_json(store, &messages_key(&self.chat_id), &self.messages);
    }

    /// Accept user input for sending.
    ///
    /// Returns the trimmed text to post, or `None` for blank input. On accept
    /// the user message is appended and a request is counted as pending.
    pub fn begin_send<S: KeyValueStore + ?Sized>(&mut self, store: &S, input: &str, timestamp: String) -> Option<String> {
        let text: String = input.trim().chars().take(MAX_MESSAGE_CHARS).collect();
        if text.is_empty() {
            return None;
        }
        self.push(store, Message { text: text.clone(), sender: Sender::User, timestamp });
        self.pending += 1;
        Some(text)
    }

    /// Settle one in-flight request.
    ///
    /// The pending count drops before the bot reply is appended, so the
    /// typing indicator never outlives its round trip.
    pub fn finish_send<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        outcome: Result<String, ChatError>,
        timestamp: String,
    ) {
        self.pending = self.pending.saturating_sub(1);
        self.push(store, Message { text: reply_text(outcome), sender: Sender::Bot, timestamp });
    }
}

/// Send is enabled iff the input holds non-whitespace text.
pub fn can_send(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Text shown for a request outcome.
pub fn reply_text(outcome: Result<String, ChatError>) -> String {
    match outcome {
        Ok(text) => text,
        Err(ChatError::Transport(_)) => OFFLINE_REPLY.to_owned(),
        Err(ChatError::Status(_) | ChatError::Decode(_)) => ERROR_REPLY.to_owned(),
    }
}
