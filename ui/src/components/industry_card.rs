//! Selectable card for one industry on the home page.

use leptos::prelude::*;

use crate::state::industry::Industry;

/// Card showing an industry's icon, name and description.
#[component]
pub fn IndustryCard(
    industry: Industry,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    let id = industry.id;
    view! {
        <div
            class="industry-card"
            class:selected=move || selected.get()
            data-industry-id=id
            on:click=move |_| on_select.run(id)
        >
            <div class="industry-content">
                <div class=format!("industry-icon {}", industry.icon_class)>{industry.icon}</div>
                <h3 class="industry-name">{industry.name}</h3>
                <p class="industry-description">{industry.description}</p>
            </div>
        </div>
    }
}
