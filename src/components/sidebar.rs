//! Sidebar Component
//!
//! Collapsible navigation with the per-state submenu.

use leptos::prelude::*;

const STATES: [&str; 27] = [
    "ACRE", "ALAGOAS", "AMAPÁ", "AMAZONAS", "BAHIA", "CEARÁ",
    "DISTRITO FEDERAL", "ESPÍRITO SANTO", "GOIÁS", "MARANHÃO",
    "MATO GROSSO", "MATO GROSSO DO SUL", "MINAS GERAIS", "PARÁ",
    "PARAÍBA", "PARANÁ", "PERNAMBUCO", "PIAUÍ", "RIO DE JANEIRO",
    "RIO GRANDE DO NORTE", "RIO GRANDE DO SUL", "RONDÔNIA",
    "RORAIMA", "SANTA CATARINA", "SÃO PAULO", "SERGIPE", "TOCANTINS",
];

/// Sidebar navigation
///
/// Props:
/// - is_open: mobile drawer visibility
/// - on_close: called when any destination is picked
#[component]
pub fn Sidebar(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (states_open, set_states_open) = signal(false);

    view! {
        <div class=move || if is_open.get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <div class="logo">"20 PODEMOS MUDAR O BRASIL"</div>
            </div>

            <div class="profile-section">
                <div class="profile-image">"👤"</div>
                <div class="state-info">
                    <div class="state-name">"Olá, < Nome do Gestor>"</div>
                    <div class="election-year">"ELEIÇÕES 2026"</div>
                </div>
            </div>

            <nav class="nav-menu">
                <div class="nav-item-container">
                    <button
                        class=move || if states_open.get() { "nav-item active" } else { "nav-item" }
                        on:click=move |_| set_states_open.update(|open| *open = !*open)
                    >
                        <span class="icon">"👥"</span>
                        "CANDIDATOS DEP. ESTADUAIS"
                        <span class="chevron">{move || if states_open.get() { "▼" } else { "▶" }}</span>
                    </button>
                    <Show when=move || states_open.get()>
                        <div class="submenu">
                            {STATES.iter().map(|state| view! {
                                <button class="submenu-item" on:click=move |_| on_close.run(())>
                                    {*state}
                                </button>
                            }).collect_view()}
                        </div>
                    </Show>
                </div>

                <button class="nav-item" on:click=move |_| on_close.run(())>
                    <span class="icon">"👥"</span>
                    "CANDIDATOS DEP. FEDERAIS"
                </button>
                <button class="nav-item" on:click=move |_| on_close.run(())>
                    <span class="icon">"🏛️"</span>
                    "PODEMOS BRASIL"
                </button>
                <button class="nav-item" on:click=move |_| on_close.run(())>
                    <span class="icon">"⚙️"</span>
                    "CONFIGURAÇÕES"
                </button>
            </nav>

            <div class="footer">"SEDIP SECRETARIA DE DESENVOLVIMENTO E INOVAÇÃO PARTIDÁRIA"</div>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <div class="user-info">
                "Olá, " <strong>"Nome do Coordenador"</strong>
                <div class="user-avatar">"👤"</div>
            </div>
        </div>
    }
}
