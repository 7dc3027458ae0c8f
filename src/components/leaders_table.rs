//! Historical Leader Tables
//!
//! Read-only tables of past results with exact-match dropdown filters:
//! non-elected state representatives (2022) and SP candidates (2022/2024).

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::FilterSelect;
use crate::api::CandidateGateway;
use crate::config::{FEDERAL_HISTORY_LIMIT, STATE_LEADERS_LIMIT};
use crate::context::use_gateway;
use crate::history::{
    unique_values, ColumnFilters, FederalColumn, FederalRow, LeaderColumn, LeaderRow, LoadState, LOAD_ERROR,
};

#[component]
fn ClearFiltersButton(#[prop(into)] visible: Signal<bool>, #[prop(into)] on_clear: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <button class="clear-filters-btn" on:click=move |_| on_clear.run(())>
                "Limpar Filtros"
            </button>
        </Show>
    }
}

#[component]
fn TableStatus(state: ReadSignal<LoadState>, colspan: usize) -> impl IntoView {
    view! {
        <Show when=move || state.get() == LoadState::Loading>
            <tr><td class="table-status" colspan=colspan>"Carregando..."</td></tr>
        </Show>
        <Show when=move || state.get() == LoadState::Failed>
            <tr><td class="table-status error" colspan=colspan>{LOAD_ERROR}</td></tr>
        </Show>
    }
}

#[component]
pub fn LeadersTable() -> impl IntoView {
    let gateway = use_gateway();
    let rows = RwSignal::new(Vec::<LeaderRow>::new());
    let (state, set_state) = signal(LoadState::Loading);
    let filters = RwSignal::new(ColumnFilters::<LeaderColumn>::default());

    Effect::new(move |_| {
        let gateway = gateway.clone();
        spawn_local(async move {
            match gateway.list_state_leaders().await {
                Ok(records) => {
                    log::info!("[HISTORY] Loaded {} state leaders", records.len());
                    rows.set(records.into_iter().map(LeaderRow::from).collect());
                    set_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("[HISTORY] State leaders failed: {}", e);
                    set_state.set(LoadState::Failed);
                }
            }
        });
    });

    let filtered = Memo::new(move |_| filters.with(|f| rows.with(|r| f.apply(r))));
    let has_filters = Memo::new(move |_| filters.with(|f| f.has_active()));

    view! {
        <div class="leaders-section">
            <div class="leaders-header">
                <h3>{format!("Top líderes não eleitos – Dep. Estadual 2022 (até {})", STATE_LEADERS_LIMIT)}</h3>
                <ClearFiltersButton visible=has_filters on_clear=move |_| filters.update(|f| f.clear()) />
            </div>
            <div class="filters-row">
                {LeaderColumn::ALL.iter().map(|column| {
                    let column = *column;
                    view! {
                        <FilterSelect
                            label=column.label()
                            options=Signal::derive(move || rows.with(|r| unique_values(r, column)))
                            value=Signal::derive(move || filters.with(|f| f.get(column).to_string()))
                            on_change=move |value: String| filters.update(|f| f.set(column, &value))
                        />
                    }
                }).collect_view()}
            </div>
            <table class="table leaders-table">
                <thead>
                    <tr>
                        <th>"Nome"</th>
                        <th>"Partido"</th>
                        <th>"Votos"</th>
                        <th>"FEFC"</th>
                        <th>"Gênero"</th>
                        <th>"Situação"</th>
                    </tr>
                </thead>
                <tbody>
                    <TableStatus state=state colspan=6 />
                    {move || filtered.get().into_iter().map(|row| view! {
                        <tr>
                            <td>{row.name}</td>
                            <td>{row.party}</td>
                            <td>{row.votes}</td>
                            <td>{row.fund}</td>
                            <td>{row.gender}</td>
                            <td>{row.situation}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn FederalHistoryTable() -> impl IntoView {
    let gateway = use_gateway();
    let rows = RwSignal::new(Vec::<FederalRow>::new());
    let (state, set_state) = signal(LoadState::Loading);
    let filters = RwSignal::new(ColumnFilters::<FederalColumn>::default());

    Effect::new(move |_| {
        let gateway = gateway.clone();
        spawn_local(async move {
            match gateway.list_federal_history().await {
                Ok(records) => {
                    log::info!("[HISTORY] Loaded {} SP candidate results", records.len());
                    rows.set(records.into_iter().map(FederalRow::from).collect());
                    set_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("[HISTORY] SP candidate results failed: {}", e);
                    set_state.set(LoadState::Failed);
                }
            }
        });
    });

    let filtered = Memo::new(move |_| filters.with(|f| rows.with(|r| f.apply(r))));
    let has_filters = Memo::new(move |_| filters.with(|f| f.has_active()));

    view! {
        <div class="leaders-section">
            <div class="leaders-header">
                <h3>{format!("Candidatos SP – 2022 / 2024 (até {})", FEDERAL_HISTORY_LIMIT)}</h3>
                <ClearFiltersButton visible=has_filters on_clear=move |_| filters.update(|f| f.clear()) />
            </div>
            <div class="filters-row">
                {FederalColumn::ALL.iter().map(|column| {
                    let column = *column;
                    view! {
                        <FilterSelect
                            label=column.label()
                            options=Signal::derive(move || rows.with(|r| unique_values(r, column)))
                            value=Signal::derive(move || filters.with(|f| f.get(column).to_string()))
                            on_change=move |value: String| filters.update(|f| f.set(column, &value))
                        />
                    }
                }).collect_view()}
            </div>
            <table class="table leaders-table">
                <thead>
                    <tr>
                        <th>"Nome"</th>
                        <th>"Nome de Urna"</th>
                        <th>"Partido"</th>
                        <th>"Votos"</th>
                        <th>"Fundo Total"</th>
                        <th>"Cargo"</th>
                        <th>"Gênero"</th>
                        <th>"Raça"</th>
                        <th>"Ano"</th>
                        <th>"Resultado"</th>
                    </tr>
                </thead>
                <tbody>
                    <TableStatus state=state colspan=10 />
                    {move || filtered.get().into_iter().map(|row| view! {
                        <tr>
                            <td>{row.full_name}</td>
                            <td>{row.ballot_name}</td>
                            <td>{row.party}</td>
                            <td>{row.votes}</td>
                            <td>{row.total_fund}</td>
                            <td>{row.office}</td>
                            <td>{row.gender}</td>
                            <td>{row.race}</td>
                            <td>{row.year}</td>
                            <td>{row.outcome}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
