//! Draft Input Components
//!
//! Inputs bound to the open add/edit draft. Shared by the add form and the
//! inline edit row; they only touch the draft, never the roster rows.

use leptos::prelude::*;

use crate::models::{CandidateField, CandidateStatus};
use crate::normalize::RACE_OPTIONS;
use crate::roster::{CandidateDraft, Roster};

fn read_draft<T: Default>(roster: RwSignal<Roster>, f: impl FnOnce(&CandidateDraft) -> T) -> T {
    roster.with(|r| r.draft().map(f).unwrap_or_default())
}

fn write_draft(roster: RwSignal<Roster>, f: impl FnOnce(&mut CandidateDraft)) {
    roster.update(|r| {
        if let Some(draft) = r.draft_mut() {
            f(draft);
        }
    });
}

/// Free-text (or numeric, for position) draft field
#[component]
pub fn DraftInput(field: CandidateField, roster: RwSignal<Roster>, class: &'static str) -> impl IntoView {
    view! {
        <input
            type=field.input_type()
            class=class
            placeholder=field.hint()
            prop:value=move || read_draft(roster, |d| d.field(field).to_string())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                write_draft(roster, |d| d.set_field(field, value));
            }
        />
    }
}

/// Race picker; the stored value is always a canonical race or empty
#[component]
pub fn DraftRaceSelect(roster: RwSignal<Roster>) -> impl IntoView {
    view! {
        <select
            class="status-select"
            prop:value=move || read_draft(roster, |d| d.race.clone())
            on:change=move |ev| {
                let value = event_target_value(&ev);
                write_draft(roster, |d| d.set_race(&value));
            }
        >
            <option value="">"Selecione"</option>
            {RACE_OPTIONS.iter().map(|race| view! { <option value=*race>{*race}</option> }).collect_view()}
        </select>
    }
}

#[component]
pub fn DraftStatusSelect(roster: RwSignal<Roster>) -> impl IntoView {
    let status = move || read_draft(roster, |d| d.status);

    view! {
        <select
            class=move || format!("status-select {}", status().css_class())
            prop:value=move || status().as_str()
            on:change=move |ev| {
                if let Some(parsed) = CandidateStatus::parse(&event_target_value(&ev)) {
                    write_draft(roster, |d| d.status = parsed);
                }
            }
        >
            {CandidateStatus::ALL.iter().map(|s| view! {
                <option value=s.as_str()>{s.label()}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn DraftNoteCheckbox(roster: RwSignal<Roster>) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            prop:checked=move || read_draft(roster, |d| d.has_note)
            on:change=move |ev| {
                let checked = event_target_checked(&ev);
                write_draft(roster, |d| d.has_note = checked);
            }
        />
    }
}
