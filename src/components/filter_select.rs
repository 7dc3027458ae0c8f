//! Filter Select Component
//!
//! Column dropdown for the historical tables. The empty option clears the
//! column's filter.

use leptos::prelude::*;

#[component]
pub fn FilterSelect(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span class="filter-label">{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"Todos"</option>
                {move || options.get().into_iter().map(|option| {
                    let text = option.clone();
                    view! { <option value=option>{text}</option> }
                }).collect_view()}
            </select>
        </label>
    }
}
