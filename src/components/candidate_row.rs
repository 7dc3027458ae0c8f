//! Candidate Row Component
//!
//! One roster row: read-only cells with a quick status dropdown, or the
//! inline edit form when this row owns the edit session.

use leptos::prelude::*;

use super::draft_inputs::{DraftInput, DraftNoteCheckbox, DraftRaceSelect, DraftStatusSelect};
use super::DeleteConfirmButton;
use crate::models::{Candidate, CandidateField, CandidateStatus};
use crate::notify::{alert, FORM_ALREADY_OPEN};
use crate::roster::Roster;

#[component]
pub fn CandidateRow(
    candidate: Candidate,
    roster: RwSignal<Roster>,
    editing_id: Memo<Option<i64>>,
    has_open_form: Memo<bool>,
    submitting: RwSignal<bool>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let id = candidate.real_id();
    let is_editing = Memo::new(move |_| id.is_some() && editing_id.get() == id);

    let start_edit = move |_| {
        let Some(id) = id else { return };
        match roster.try_update(|r| r.begin_edit(id)) {
            Some(Err(_)) => alert(FORM_ALREADY_OPEN),
            Some(Ok(false)) => log::warn!("[ROSTER] Row {} vanished before edit", id),
            _ => {}
        }
    };

    let read_only = candidate.clone();
    view! {
        <tr class=move || if is_editing.get() { "editing" } else { "" }>
            <Show
                when=move || is_editing.get()
                fallback=move || view! { <ReadOnlyCells candidate=read_only.clone() roster=roster /> }
            >
                {CandidateField::TABLE_ORDER.iter().map(|field| view! {
                    <td><DraftInput field=*field roster=roster class="edit-input" /></td>
                }).collect_view()}
                <td><DraftRaceSelect roster=roster /></td>
                <td><DraftStatusSelect roster=roster /></td>
                <td><DraftNoteCheckbox roster=roster /></td>
            </Show>
            <td>
                <div class="action-buttons">
                    {move || {
                        if id.is_none() {
                            view! { <span></span> }.into_any()
                        } else if is_editing.get() {
                            view! {
                                <button
                                    class="action-btn save-btn"
                                    title="Salvar alterações"
                                    disabled=move || submitting.get()
                                    on:click=move |_| on_save.run(())
                                >
                                    {move || if submitting.get() { "..." } else { "✓" }}
                                </button>
                                <button
                                    class="action-btn cancel-btn"
                                    title="Cancelar"
                                    on:click=move |_| roster.update(|r| r.cancel_form())
                                >
                                    "✕"
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <button
                                    class="action-btn edit-btn"
                                    title="Editar"
                                    disabled=move || has_open_form.get()
                                    on:click=start_edit
                                >
                                    "✎"
                                </button>
                                <DeleteConfirmButton
                                    on_confirm=move |_| {
                                        if let Some(id) = id {
                                            roster.update(|r| {
                                                r.remove(id);
                                            });
                                            log::info!("[ROSTER] Removed candidate {} locally", id);
                                        }
                                    }
                                />
                            }.into_any()
                        }
                    }}
                </div>
            </td>
        </tr>
    }
}

#[component]
fn ReadOnlyCells(candidate: Candidate, roster: RwSignal<Roster>) -> impl IntoView {
    let id = candidate.real_id();
    let status = candidate.parsed_status();
    let status_class = format!(
        "status-select {}",
        status.map(|s| s.css_class()).unwrap_or_default()
    );
    let status_value = candidate.status.clone();
    let race = if candidate.race.trim().is_empty() { "-".to_string() } else { candidate.race.clone() };
    let note_class = if candidate.has_note { "info-icon" } else { "info-icon disabled" };

    view! {
        {CandidateField::TABLE_ORDER.iter().map(|field| view! {
            <td>{candidate.display(*field)}</td>
        }).collect_view()}
        <td>{race}</td>
        <td>
            <select
                class=status_class
                prop:value=status_value
                disabled=id.is_none()
                on:change=move |ev| {
                    let Some(id) = id else { return };
                    if let Some(parsed) = CandidateStatus::parse(&event_target_value(&ev)) {
                        roster.update(|r| {
                            r.set_status(id, parsed);
                        });
                    }
                }
            >
                {CandidateStatus::ALL.iter().map(|s| view! {
                    <option value=s.as_str()>{s.label()}</option>
                }).collect_view()}
            </select>
        </td>
        <td><div class=note_class>"i"</div></td>
    }
}
