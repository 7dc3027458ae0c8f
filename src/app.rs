//! Campaign Dashboard App
//!
//! Sidebar, summary cards, the editable roster, and the historical tables.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CandidatesTable, FederalHistoryTable, Header, LeadersTable, MetricsCards, ProjectionCards, Sidebar};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::{
    store_set_confirmed, store_set_female_affiliated, store_set_negotiation, store_set_ppi, DashboardMetrics,
};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(ApiConfig::from_env()));

    let (sidebar_open, set_sidebar_open) = signal(false);
    let metrics = Store::new(DashboardMetrics::default());

    view! {
        <div class="app">
            <button
                class="mobile-menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <div
                class=move || if sidebar_open.get() { "mobile-overlay show" } else { "mobile-overlay" }
                on:click=move |_| set_sidebar_open.set(false)
            ></div>

            <Sidebar is_open=sidebar_open on_close=move |_| set_sidebar_open.set(false) />

            <div class="main-content">
                <Header />
                <MetricsCards metrics=metrics />
                <CandidatesTable
                    on_female_affiliated_change=move |n| store_set_female_affiliated(&metrics, n)
                    on_confirmed_change=move |n| store_set_confirmed(&metrics, n)
                    on_negotiation_change=move |n| store_set_negotiation(&metrics, n)
                    on_ppi_change=move |n| store_set_ppi(&metrics, n)
                />
                <div class="bottom-cards">
                    <div class="center-card">
                        <FederalHistoryTable />
                    </div>
                    <div class="right-card">
                        <ProjectionCards />
                    </div>
                </div>
                <div class="bottom-cards">
                    <div class="center-card">
                        <LeadersTable />
                    </div>
                </div>
            </div>
        </div>
    }
}
