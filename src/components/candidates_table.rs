//! Candidates Table Component
//!
//! The editable roster: search with debounced autocomplete, the add form,
//! the candidate rows, and the counts pushed up to the metrics cards.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use super::draft_inputs::{DraftInput, DraftNoteCheckbox, DraftRaceSelect, DraftStatusSelect};
use super::CandidateRow;
use crate::aggregate::count_candidates;
use crate::api::{CandidateGateway, HttpGateway};
use crate::autocomplete::{Autocomplete, Resolution, SearchTicket};
use crate::config::AUTOCOMPLETE_DEBOUNCE_MS;
use crate::context::use_gateway;
use crate::models::{CandidateField, Suggestion};
use crate::notify::{alert, submit_failure_message, CREATE_FAILED, FORM_ALREADY_OPEN, LOAD_FAILED, UPDATE_FAILED};
use crate::roster::{load_roster, submit_create, submit_update, Roster};

type AbortSlot = StoredValue<Option<AbortController>, LocalStorage>;

fn abort_in_flight(slot: AbortSlot) {
    slot.update_value(|controller| {
        if let Some(controller) = controller.take() {
            controller.abort();
        }
    });
}

/// Wait out the quiet period, then send the query if nothing newer arrived.
async fn run_search(
    gateway: Arc<HttpGateway>,
    autocomplete: RwSignal<Autocomplete>,
    abort: AbortSlot,
    ticket: SearchTicket,
) {
    TimeoutFuture::new(AUTOCOMPLETE_DEBOUNCE_MS).await;
    let Some(query) = autocomplete.try_update(|ac| ac.fire(ticket)).flatten() else {
        return;
    };

    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(AbortController::signal);
    abort_in_flight(abort);
    abort.set_value(controller);

    let result = gateway.search_suggestions(&query.term, signal.as_ref()).await;
    match autocomplete.try_update(|ac| ac.resolve(query.ticket, result)) {
        Some(Resolution::Applied(count)) => {
            log::debug!("[SEARCH] {} suggestion(s) for '{}'", count, query.term);
        }
        Some(Resolution::Failed(e)) => {
            log::error!("[SEARCH] Suggestion lookup failed: {}", e);
        }
        _ => {}
    }
}

/// Candidates table
///
/// Props:
/// - on_*_change: receive the recomputed counts after every roster change
#[component]
pub fn CandidatesTable(
    #[prop(into)] on_female_affiliated_change: Callback<usize>,
    #[prop(into)] on_confirmed_change: Callback<usize>,
    #[prop(into)] on_negotiation_change: Callback<usize>,
    #[prop(into)] on_ppi_change: Callback<usize>,
) -> impl IntoView {
    let gateway = use_gateway();

    let roster = RwSignal::new(Roster::default());
    let autocomplete = RwSignal::new(Autocomplete::default());
    let (loading, set_loading) = signal(true);
    let submitting = RwSignal::new(false);
    let abort: AbortSlot = StoredValue::new_local(None);

    // Structural views read these, so draft keystrokes never rebuild rows
    let search_term = Memo::new(move |_| autocomplete.with(|ac| ac.term().to_string()));
    let visible_rows = Memo::new(move |_| {
        let term = search_term.get();
        roster.with(|r| r.visible_rows(&term))
    });
    let editing_id = Memo::new(move |_| roster.with(|r| r.editing_id()));
    let is_adding = Memo::new(move |_| roster.with(|r| r.is_adding()));
    let has_open_form = Memo::new(move |_| roster.with(|r| r.has_open_form()));
    let fetch_failed = Memo::new(move |_| roster.with(|r| r.fetch_failed()));

    // Publish counts on every roster change
    let counts = Memo::new(move |_| roster.with(|r| count_candidates(r.rows())));
    Effect::new(move |_| {
        let c = counts.get();
        on_female_affiliated_change.run(c.female_affiliated);
        on_confirmed_change.run(c.confirmed);
        on_negotiation_change.run(c.negotiation);
        on_ppi_change.run(c.ppi);
    });

    // Load roster on mount
    {
        let gateway = gateway.clone();
        Effect::new(move |_| {
            let gateway = gateway.clone();
            spawn_local(async move {
                set_loading.set(true);
                match load_roster(&*gateway).await {
                    Ok(list) => roster.update(|r| r.apply_loaded(list)),
                    Err(_) => {
                        roster.update(|r| r.apply_load_failure());
                        alert(LOAD_FAILED);
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let on_search_input = {
        let gateway = gateway.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            let ticket = autocomplete.try_update(|ac| ac.set_term(&value)).flatten();
            abort_in_flight(abort);
            if let Some(ticket) = ticket {
                spawn_local(run_search(gateway.clone(), autocomplete, abort, ticket));
            }
        }
    };

    let select_suggestion = move |suggestion: Suggestion| {
        abort_in_flight(abort);
        log::info!("[SEARCH] Selected suggestion {}", suggestion.id);
        autocomplete.update(|ac| ac.select(suggestion));
    };

    let open_add_form = move |_| {
        let prefill = autocomplete.with_untracked(|ac| ac.selected().cloned());
        if let Some(Err(_)) = roster.try_update(|r| r.begin_add(prefill.as_ref())) {
            alert(FORM_ALREADY_OPEN);
        }
    };

    let create = {
        let gateway = gateway.clone();
        Callback::new(move |_: ()| {
            let Some(draft) = roster.with_untracked(|r| r.draft().cloned()) else {
                return;
            };
            let gateway = gateway.clone();
            submitting.set(true);
            spawn_local(async move {
                match submit_create(&*gateway, &draft).await {
                    Ok(created) => roster.update(|r| r.insert_created(created)),
                    Err(e) => alert(&submit_failure_message(&e, CREATE_FAILED)),
                }
                submitting.set(false);
            });
        })
    };

    let save_edit = Callback::new(move |_: ()| {
        let Some(draft) = roster.with_untracked(|r| r.draft().cloned()) else {
            return;
        };
        let gateway = gateway.clone();
        submitting.set(true);
        spawn_local(async move {
            match submit_update(&*gateway, &draft).await {
                Ok(saved) => roster.update(|r| r.apply_updated(saved)),
                Err(e) => alert(&submit_failure_message(&e, UPDATE_FAILED)),
            }
            submitting.set(false);
        });
    });

    view! {
        <div class="table-container">
            <div class="search-container">
                <div class="search-row">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Buscar por nome de urna..."
                        prop:value=move || search_term.get()
                        on:input=on_search_input
                    />
                    <button
                        class="add-button"
                        title="Adicionar novo candidato"
                        disabled=move || editing_id.get().is_some()
                        on:click=open_add_form
                    >
                        "+ Add"
                    </button>
                </div>
                <Show when=move || !search_term.get().is_empty()>
                    <div class="search-feedback">
                        <span class="search-results">
                            {move || format!("{} resultado(s) encontrado(s)", visible_rows.get().len())}
                        </span>
                        {move || autocomplete.with(|ac| ac.selected().cloned()).map(|s| view! {
                            <div class="search-selected">
                                "Selecionado: " <strong>{s.name}</strong> " " <span>{s.party}</span>
                            </div>
                        })}
                    </div>
                    <SuggestionList autocomplete=autocomplete on_select=select_suggestion />
                </Show>
                <Show when=move || fetch_failed.get()>
                    <div class="search-error">
                        "Não foi possível conectar ao backend. Verifique se o servidor está ativo."
                    </div>
                </Show>
            </div>

            <Show when=move || is_adding.get()>
                <AddForm roster=roster submitting=submitting on_submit=create />
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-message">"Carregando candidatos..."</div> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            {CandidateField::TABLE_ORDER.iter().map(|field| view! {
                                <th>{field.label()}</th>
                            }).collect_view()}
                            <th>"Raça"</th>
                            <th>"Status"</th>
                            <th>"Obs:"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows.get().into_iter().map(|candidate| view! {
                            <CandidateRow
                                candidate=candidate
                                roster=roster
                                editing_id=editing_id
                                has_open_form=has_open_form
                                submitting=submitting
                                on_save=save_edit
                            />
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn SuggestionList(
    autocomplete: RwSignal<Autocomplete>,
    #[prop(into)] on_select: Callback<Suggestion>,
) -> impl IntoView {
    let is_loading = Memo::new(move |_| autocomplete.with(|ac| ac.is_loading()));
    let no_results = Memo::new(move |_| autocomplete.with(|ac| ac.shows_no_results()));
    let options = Memo::new(move |_| autocomplete.with(|ac| ac.options().to_vec()));

    view! {
        <div class="search-autocomplete">
            <Show when=move || is_loading.get()>
                <div class="search-autocomplete__status">"Buscando sugestões..."</div>
            </Show>
            <Show when=move || no_results.get()>
                <div class="search-autocomplete__status">"Nenhum candidato encontrado"</div>
            </Show>
            <Show when=move || !options.get().is_empty()>
                <ul class="search-autocomplete__list">
                    {move || options.get().into_iter().map(|option| {
                        let name = option.name.clone();
                        let party = option.party.clone();
                        let office = option.office.clone();
                        view! {
                            <li
                                class="search-autocomplete__item"
                                on:click=move |_| on_select.run(option.clone())
                            >
                                <div class="search-autocomplete__item-main">
                                    <strong>{name}</strong>
                                    <span>{party}</span>
                                </div>
                                <small>{office}</small>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn AddForm(
    roster: RwSignal<Roster>,
    submitting: RwSignal<bool>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let cancel = move |_| roster.update(|r| r.cancel_form());

    view! {
        <div class="add-form-container">
            <div class="add-form-header">
                <h3>"Adicionar Novo Candidato"</h3>
                <button class="cancel-button" on:click=cancel>"✕"</button>
            </div>
            <div class="add-form-grid">
                {CandidateField::TABLE_ORDER.iter().map(|field| view! {
                    <div class="form-cell">
                        <label>{field.label()}</label>
                        <DraftInput field=*field roster=roster class="form-input" />
                    </div>
                }).collect_view()}
                <div class="form-cell">
                    <label>"Raça"</label>
                    <DraftRaceSelect roster=roster />
                </div>
                <div class="form-cell">
                    <label>"Status"</label>
                    <DraftStatusSelect roster=roster />
                </div>
                <div class="form-cell checkbox-cell">
                    <label class="checkbox-label">
                        <DraftNoteCheckbox roster=roster />
                        "Possui observação"
                    </label>
                </div>
            </div>
            <div class="add-form-actions">
                <button
                    class="ok-button"
                    disabled=move || submitting.get()
                    on:click=move |_| on_submit.run(())
                >
                    {move || if submitting.get() { "Salvando..." } else { "OK" }}
                </button>
                <button class="cancel-form-button" on:click=cancel>"Cancelar"</button>
            </div>
        </div>
    }
}
