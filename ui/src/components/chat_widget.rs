//! Floating chat toggle and message panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered into a host element by [`crate::widget::ChatWidgetHandle`]. All
//! state lives in the [`WidgetContext`] signals; this component only maps
//! user events onto `ChatSession` transitions and performs the network call.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::send_chat;
use crate::net::types::ChatRequest;
use crate::state::chat::{ChatSession, GREETING, MAX_MESSAGE_CHARS, Sender, can_send};
use crate::util::clock::now_iso;
use crate::util::storage::BrowserStore;
use crate::widget::{WIDGET_ROOT_ID, WidgetContext, root_class};

/// Chat widget: toggle button plus the collapsible chat window.
#[component]
pub fn ChatWidget(ctx: WidgetContext) -> impl IntoView {
    let session = ctx.session;
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let (theme, z_index) = ctx.config.with_value(|c| (c.theme, c.z_index));
    let root_style = format!("--erp-chat-z-index: {z_index}; z-index: {z_index};");
    let class =
        move || root_class(ctx.position.get(), theme, session.with(|s| s.is_open), ctx.adjusted.get());

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = session.with(|s| (s.messages.len(), s.pending));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_toggle = move |_| {
        let opened = session.try_update(|s| s.toggle(&BrowserStore)).unwrap_or(false);
        if opened {
            #[cfg(feature = "hydrate")]
            {
                if let Some(el) = input_ref.get() {
                    let _ = el.focus();
                }
            }
        }
    };

    let on_minimize = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        session.update(|s| s.minimize(&BrowserStore));
    };

    let do_send = move || {
        let raw = input.get_untracked();
        let Some(text) = session.try_update(|s| s.begin_send(&BrowserStore, &raw, now_iso())).flatten() else {
            return;
        };
        input.set(String::new());

        let request = ChatRequest::new(text, session.with_untracked(|s| s.chat_id.clone()));
        let endpoint = ctx.config.with_value(crate::config::WidgetConfig::chat_endpoint);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = send_chat(&endpoint, &request).await;
            if let Err(e) = &outcome {
                leptos::logging::warn!("chat request failed: {e}");
            }
            session.update(|s| s.finish_send(&BrowserStore, outcome, now_iso()));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, request);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div id=WIDGET_ROOT_ID class=class style=root_style>
            <div class="chat-toggle" id="chatToggle" on:click=on_toggle>
                <div class="chat-icon">
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path
                            d="M20 2H4C2.9 2 2 2.9 2 4V22L6 18H20C21.1 18 22 17.1 22 16V4C22 2.9 21.1 2 20 2ZM20 16H5.17L4 17.17V4H20V16Z"
                            fill="currentColor"
                        ></path>
                        <circle cx="7" cy="9" r="1" fill="currentColor"></circle>
                        <circle cx="12" cy="9" r="1" fill="currentColor"></circle>
                        <circle cx="17" cy="9" r="1" fill="currentColor"></circle>
                    </svg>
                </div>
                <div class="notification-badge" id="notificationBadge" style="display: none;">
                    "1"
                </div>
            </div>

            <div class="chat-window" id="chatWindow">
                <div class="chat-header">
                    <div class="chat-title">
                        <span class="title-text">"AI Assistant"</span>
                        <span class="status-indicator">"●"</span>
                    </div>
                    <div class="chat-controls">
                        <button class="control-btn minimize-btn" id="minimizeBtn" title="Minimize" on:click=on_minimize>
                            <svg width="16" height="16" viewBox="0 0 24 24" fill="none">
                                <path d="M19 13H5V11H19V13Z" fill="currentColor"></path>
                            </svg>
                        </button>
                    </div>
                </div>

                <div class="chat-messages" id="chatMessages" node_ref=messages_ref>
                    <Show when=move || session.with(|s| s.greeting_visible)>
                        <div class="welcome-message">
                            <div class="bot-avatar">"💬"</div>
                            <div class="welcome-text">
                                <p>{GREETING}</p>
                            </div>
                        </div>
                    </Show>
                    {move || {
                        session
                            .with(|s| s.messages.clone())
                            .into_iter()
                            .map(|msg| view! { <MessageRow sender=msg.sender text=msg.text/> })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || session.with(ChatSession::typing)>
                        <div class="typing-indicator" id="typingIndicator">
                            <div class="message-avatar">"🤖"</div>
                            <div class="typing-dots">
                                <div class="typing-dot"></div>
                                <div class="typing-dot"></div>
                                <div class="typing-dot"></div>
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="chat-input-container">
                    <div class="chat-input">
                        <input
                            type="text"
                            id="messageInput"
                            placeholder="Type your message..."
                            maxlength={MAX_MESSAGE_CHARS.to_string()}
                            node_ref=input_ref
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="send-btn"
                            id="sendBtn"
                            disabled=move || !can_send(&input.get())
                            on:click=move |_| do_send()
                        >
                            <svg width="16" height="16" viewBox="0 0 24 24" fill="none">
                                <path d="M2.01 21L23 12L2.01 3L2 10L17 12L2 14L2.01 21Z" fill="currentColor"></path>
                            </svg>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One rendered message. Text is inserted as a text node, never as markup.
#[component]
fn MessageRow(sender: Sender, text: String) -> impl IntoView {
    view! {
        <div class=format!("message {}", sender.class_name())>
            <div class="message-avatar">{sender.avatar()}</div>
            <div class="message-content">{text}</div>
        </div>
    }
}
