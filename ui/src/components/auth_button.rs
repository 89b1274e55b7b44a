//! Header control reflecting the stored sign-in state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed out: "Sign In" navigates to the login page. Signed in: a greeting
//! whose click offers a confirmation-gated logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::auth::LOGIN_URL;
#[cfg(feature = "hydrate")]
use crate::util::storage::BrowserStore;

#[component]
pub fn AuthButton(auth: RwSignal<AuthState>) -> impl IntoView {
    let on_click = move |_| {
        let Some(prompt) = auth.with_untracked(AuthState::logout_prompt) else {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(LOGIN_URL);
                }
            }
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if window.confirm_with_message(&prompt).unwrap_or(false) {
                auth.update(|a| a.logout(&BrowserStore));
                let _ = window.alert_with_message("You have been logged out successfully.");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = prompt;
        }
    };

    view! {
        <button class="auth-btn" id="authBtn" on:click=on_click>
            {move || auth.with(AuthState::button_label)}
        </button>
    }
}
