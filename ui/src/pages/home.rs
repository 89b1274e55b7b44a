//! Industry selection landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on the server and hydrated in the browser. Stored auth state is
//! only readable client-side, so the header starts signed out and refreshes
//! once hydrated.

use leptos::prelude::*;

use crate::components::auth_button::AuthButton;
use crate::components::industry_card::IndustryCard;
use crate::state::auth::AuthState;
use crate::state::industry::{INDUSTRIES, SelectionState};

/// Home page: header with auth control, industry grid and continue button.
#[component]
pub fn HomePage() -> impl IntoView {
    let selection = RwSignal::new(SelectionState::default());
    let auth = RwSignal::new(AuthState::default());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        auth.set(AuthState::load(&crate::util::storage::BrowserStore));
    });

    let on_select = Callback::new(move |id: &'static str| selection.update(|s| s.select(id)));

    let on_continue = move || {
        let target = selection.with_untracked(SelectionState::continue_target);
        match target {
            Ok(url) => {
                #[cfg(feature = "hydrate")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(url);
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = url;
                }
            }
            Err(crate::state::industry::ContinueError::NothingSelected) => {}
            Err(e) => {
                leptos::logging::warn!("{e}");
                #[cfg(feature = "hydrate")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&e.to_string());
                    }
                }
            }
        }
    };

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Enter" && selection.with_untracked(SelectionState::can_continue) {
            on_continue();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="home-page">
            <header class="home-header">
                <span class="home-header__brand">"IndustryHub"</span>
                <AuthButton auth=auth/>
            </header>

            <main class="home-main">
                <h1 class="home-title">"Choose your industry"</h1>
                <p class="home-subtitle">"Select the industry that best describes your business."</p>

                <div class="industry-grid" id="industryGrid">
                    {INDUSTRIES
                        .iter()
                        .map(|industry| {
                            let id = industry.id;
                            view! {
                                <IndustryCard
                                    industry=*industry
                                    selected=Signal::derive(move || selection.with(|s| s.is_selected(id)))
                                    on_select=on_select
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button
                    class="continue-btn"
                    id="continueBtn"
                    disabled=move || !selection.with(SelectionState::can_continue)
                    on:click=move |_| on_continue()
                >
                    {move || selection.with(SelectionState::continue_label)}
                </button>
            </main>
        </div>
    }
}
