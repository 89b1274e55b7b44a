use super::*;
use crate::util::storage::MemoryStore;

fn ts() -> String {
    "2024-05-01T09:30:00.000Z".to_owned()
}

fn stored_messages(store: &MemoryStore, chat_id: &str) -> Vec<Message> {
    load_json(store, &messages_key(chat_id)).unwrap_or_default()
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_without_saved_state_follows_minimized() {
    let store = MemoryStore::new();
    let minimized = ChatSession::restore(&store, true, "chat_1_a".to_owned());
    assert!(!minimized.is_open);
    assert_eq!(minimized.chat_id, "chat_1_a");
    assert!(minimized.messages.is_empty());
    assert!(minimized.greeting_visible);

    let expanded = ChatSession::restore(&store, false, "chat_1_b".to_owned());
    assert!(expanded.is_open);
}

#[test]
fn restore_prefers_saved_state_over_minimized() {
    let store = MemoryStore::new();
    store.set(STATE_KEY, r#"{"isOpen":true,"currentChatId":"chat_9_saved"}"#);
    let session = ChatSession::restore(&store, true, "chat_1_fresh".to_owned());
    assert!(session.is_open);
    assert_eq!(session.chat_id, "chat_9_saved");
}

#[test]
fn restore_missing_is_open_defaults_to_closed() {
    let store = MemoryStore::new();
    store.set(STATE_KEY, r#"{"currentChatId":"chat_9_saved"}"#);
    let session = ChatSession::restore(&store, false, "chat_1_fresh".to_owned());
    assert!(!session.is_open);
}

#[test]
fn restore_with_stored_messages_hides_greeting() {
    let store = MemoryStore::new();
    store.set(STATE_KEY, r#"{"isOpen":false,"currentChatId":"chat_9_saved"}"#);
    store.set(
        &messages_key("chat_9_saved"),
        r#"[{"text":"hi","sender":"user","timestamp":"t1"},{"text":"hello","sender":"bot","timestamp":"t2"},{"text":"bye","sender":"user","timestamp":"t3"}]"#,
    );
    let session = ChatSession::restore(&store, true, "chat_1_fresh".to_owned());
    assert_eq!(session.messages.len(), 3);
    assert_eq!(session.messages[1].sender, Sender::Bot);
    assert_eq!(session.messages[2].text, "bye");
    assert!(!session.greeting_visible);
}

#[test]
fn restore_with_empty_history_keeps_greeting() {
    let store = MemoryStore::new();
    store.set(STATE_KEY, r#"{"isOpen":true,"currentChatId":"chat_9_saved"}"#);
    store.set(&messages_key("chat_9_saved"), "[]");
    let session = ChatSession::restore(&store, true, "chat_1_fresh".to_owned());
    assert!(session.messages.is_empty());
    assert!(session.greeting_visible);
}

#[test]
fn restore_treats_malformed_state_as_absent() {
    let store = MemoryStore::new();
    store.set(STATE_KEY, "{oops");
    store.set(&messages_key("chat_1_fresh"), "not json either");
    let session = ChatSession::restore(&store, false, "chat_1_fresh".to_owned());
    assert!(session.is_open);
    assert_eq!(session.chat_id, "chat_1_fresh");
    assert!(session.messages.is_empty());
}

#[test]
fn restore_ignores_blank_saved_chat_id() {
    let store = MemoryStore::new();
    store.set(STATE_KEY, r#"{"isOpen":true,"currentChatId":""}"#);
    let session = ChatSession::restore(&store, true, "chat_1_fresh".to_owned());
    assert_eq!(session.chat_id, "chat_1_fresh");
}

// =============================================================
// Open / minimized transitions
// =============================================================

#[test]
fn transitions_persist_state() {
    let store = MemoryStore::new();
    let mut session = ChatSession::restore(&store, true, "chat_1_a".to_owned());

    assert!(session.toggle(&store));
    let saved: PersistedState = load_json(&store, STATE_KEY).unwrap();
    assert_eq!(saved, PersistedState { is_open: true, current_chat_id: Some("chat_1_a".to_owned()) });

    session.minimize(&store);
    assert!(!session.is_open);
    assert!(!load_json::<_, PersistedState>(&store, STATE_KEY).unwrap().is_open);

    session.open(&store);
    session.open(&store);
    assert!(session.is_open);

    session.close(&store);
    assert!(!session.is_open);
    assert!(session.toggle(&store));
    assert!(session.is_open);
}

#[test]
fn saved_state_uses_host_facing_keys() {
    let store = MemoryStore::new();
    let session = ChatSession::restore(&store, false, "chat_1_a".to_owned());
    session.save_state(&store);
    assert_eq!(store.get(STATE_KEY).as_deref(), Some(r#"{"isOpen":true,"currentChatId":"chat_1_a"}"#));
}

// =============================================================
// Sending
// =============================================================

#[test]
fn whitespace_input_is_a_noop() {
    let store = MemoryStore::new();
    let mut session = ChatSession::restore(&store, true, "chat_1_a".to_owned());
    assert_eq!(session.begin_send(&store, "   \t ", ts()), None);
    assert!(session.messages.is_empty());
    assert!(!session.typing());
    assert!(session.greeting_visible);
    assert!(!can_send("   \t "));
    assert!(store.get(&messages_key("chat_1_a")).is_none());
}

#[test]
fn successful_round_trip_appends_user_then_bot() {
    let store = MemoryStore::new();
    let mut session = ChatSession::restore(&store, true, "chat_1_a".to_owned());

    let text = session.begin_send(&store, "  hello  ", ts()).unwrap();
    assert_eq!(text, "hello");
    assert_eq!(session.messages.len(), 1);
    assert!(session.typing());
    assert!(!session.greeting_visible);

    session.finish_send(&store, Ok("Hi! How can I help?".to_owned()), ts());
    assert!(!session.typing());
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[0].sender, Sender::User);
    assert_eq!(session.messages[0].text, "hello");
    assert_eq!(session.messages[1].sender, Sender::Bot);
    assert_eq!(session.messages[1].text, "Hi! How can I help?");
    assert_eq!(stored_messages(&store, "chat_1_a"), session.messages);
}

#[test]
fn transport_failure_appends_offline_reply() {
    let store = MemoryStore::new();
    let mut session = ChatSession::restore(&store, true, "chat_1_a".to_owned());
    session.begin_send(&store, "hello", ts());
    session.finish_send(&store, Err(ChatError::Transport("offline".to_owned())), ts());
    assert!(!session.typing());
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[1].text, OFFLINE_REPLY);
    assert_eq!(session.messages[1].sender, Sender::Bot);
}

#[test]
fn success_status_without_reply_field_appends_apology() {
    let store = MemoryStore::new();
    let mut session = ChatSession::restore(&store, true, "chat_1_a".to_owned());
    session.begin_send(&store, "hello", ts());
    session.finish_send(&store, Err(ChatError::Decode("missing field `response`".to_owned())), ts());
    assert!(!session.typing());
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[1].sender, Sender::Bot);
    assert_eq!(session.messages[1].text, ERROR_REPLY);
    assert_eq!(stored_messages(&store, "chat_1_a"), session.messages);
}

#[test]
fn status_failure_appends_apology() {
    let store = MemoryStore::new();
    let mut session = ChatSession::restore(&store, true, "chat_1_a".to_owned());
    session.begin_send(&store, "hello", ts());
    session.finish_send(&store, Err(ChatError::Status(500)), ts());
    assert_eq!(session.messages[1].text, ERROR_REPLY);
    assert!(!session.typing());
}

#[test]
fn overlapping_sends_keep_indicator_until_last_reply() {
    let store = MemoryStore::new();
    let mut session = ChatSession::restore(&store, true, "chat_1_a".to_owned());
    session.begin_send(&store, "first", ts());
    session.begin_send(&store, "second", ts());
    assert_eq!(session.pending, 2);

    session.finish_send(&store, Ok("reply to second".to_owned()), ts());
    assert!(session.typing());
    session.finish_send(&store, Ok("reply to first".to_owned()), ts());
    assert!(!session.typing());

    let texts: Vec<&str> = session.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "reply to second", "reply to first"]);
}

#[test]
fn long_input_is_capped() {
    let store = MemoryStore::new();
    let mut session = ChatSession::restore(&store, true, "chat_1_a".to_owned());
    let sent = session.begin_send(&store, &"x".repeat(MAX_MESSAGE_CHARS + 20), ts()).unwrap();
    assert_eq!(sent.chars().count(), MAX_MESSAGE_CHARS);
}

#[test]
fn bot_message_alone_does_not_hide_greeting() {
    let store = MemoryStore::new();
    let mut session = ChatSession::restore(&store, true, "chat_1_a".to_owned());
    session.push(&store, Message { text: "notice".to_owned(), sender: Sender::Bot, timestamp: ts() });
    assert!(session.greeting_visible);
}

#[test]
fn reload_restores_conversation_for_same_chat() {
    let store = MemoryStore::new();
    let mut session = ChatSession::restore(&store, true, "chat_1_a".to_owned());
    session.toggle(&store);
    session.begin_send(&store, "hello", ts());
    session.finish_send(&store, Ok("hi".to_owned()), ts());

    let reloaded = ChatSession::restore(&store, true, "chat_2_other".to_owned());
    assert_eq!(reloaded.chat_id, "chat_1_a");
    assert!(reloaded.is_open);
    assert_eq!(reloaded.messages, session.messages);
    assert!(!reloaded.greeting_visible);
}

#[test]
fn message_json_uses_lowercase_sender() {
    let msg = Message { text: "a".to_owned(), sender: Sender::Bot, timestamp: "t".to_owned() };
    assert_eq!(
        serde_json::to_value(&msg).unwrap(),
        serde_json::json!({ "text": "a", "sender": "bot", "timestamp": "t" })
    );
}
