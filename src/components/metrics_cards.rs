//! Metrics Cards Component
//!
//! Summary cards above the roster. Only the composition card is live; the
//! rest are fixed reference figures.

use leptos::prelude::*;

use crate::config::{FEMALE_QUOTA, TOTAL_SEATS};
use crate::store::{store_counts, MetricsStore};

const VOTING_2026: [(&str, &str); 5] = [
    ("Quociente Eleitoral para Dept. Federal", "352.119,96"),
    ("10% do Q.E.", "35.211,99"),
    ("20% do Q.E.", "70.423,99"),
    ("80% do Q.E.", "281.695,96"),
    ("Cláusula de Barreira", "000.000"),
];

/// (party, votes, seats, FEFC)
const WINNING_SLATES_2022: [(&str, &str, &str, &str); 6] = [
    ("Progressistas", "000.000", "3", "R$ 1.203.000"),
    ("União Brasil", "000.000", "2", "R$ 800.000"),
    ("Republicanos", "000.000", "2", "R$ 750.000"),
    ("PT", "000.000", "1", "R$ 600.000"),
    ("PL", "000.000", "1", "R$ 550.000"),
    ("PSDB", "000.000", "1", "R$ 500.000"),
];

#[component]
fn MetricItem(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    view! {
        <div class="metric-item">
            <span class=if highlight { "metric-label highlight" } else { "metric-label" }>{label}</span>
            <span class="metric-value">{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn MetricsCards(metrics: MetricsStore) -> impl IntoView {
    let counts = Memo::new(move |_| store_counts(&metrics));

    view! {
        <div class="cards-grid">
            <div class="card purple">
                <div class="card-header purple">"VOTAÇÃO EM 2026"</div>
                <div class="card-content">
                    {VOTING_2026.iter().map(|(label, value)| view! {
                        <MetricItem label=*label value=value.to_string() />
                    }).collect_view()}
                </div>
            </div>

            <div class="card green">
                <div class="card-header green">"CHAPAS VENCEDORAS EM 2022"</div>
                <div class="card-content">
                    <table class="slates-table">
                        <thead>
                            <tr>
                                <th>"Partido"</th>
                                <th>"Votos"</th>
                                <th>"Cadeiras"</th>
                                <th>"FEFC"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {WINNING_SLATES_2022.iter().map(|(party, votes, seats, fund)| view! {
                                <tr>
                                    <td>{*party}</td>
                                    <td>{*votes}</td>
                                    <td>{*seats}</td>
                                    <td>{*fund}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>

            <div class="card purple">
                <div class="card-header purple">"COMPOSIÇÃO ELEITORAL 2026"</div>
                <div class="card-content">
                    <MetricItem label="Vagas Totais" value=TOTAL_SEATS.to_string() />
                    <MetricItem label="Vagas para Mulheres" value=FEMALE_QUOTA.to_string() />
                    <MetricItem
                        label="Candidatos Confirmados"
                        value=Signal::derive(move || counts.get().confirmed.to_string())
                    />
                    <MetricItem
                        label="Candidatos em Negociação"
                        value=Signal::derive(move || counts.get().negotiation.to_string())
                    />
                    <MetricItem
                        label="Mulheres Faltantes (Cota de Gênero)"
                        value=Signal::derive(move || counts.get().missing_women(FEMALE_QUOTA).to_string())
                        highlight=true
                    />
                    <MetricItem
                        label="Candidatos Declarados PPI"
                        value=Signal::derive(move || counts.get().ppi.to_string())
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectionCards() -> impl IntoView {
    view! {
        <div class="projection-cards">
            <div class="projection-card">
                <div class="card-header green">"PROJEÇÃO MÁXIMA DE CADEIRAS"</div>
                <div class="projection-value">"05"</div>
            </div>
            <div class="projection-card">
                <div class="card-header green">"PROJEÇÃO MÍNIMA DE CADEIRAS"</div>
                <div class="projection-value">"01"</div>
            </div>
            <div class="projection-card">
                <div class="card-header green">"SOMA DE VOTOS - PELO HISTÓRICO"</div>
                <div class="projection-value">"1.234.560"</div>
                <div class="projection-subtitle">"Equivalente a X% do Quociente Eleitoral"</div>
            </div>
            <div class="projection-card">
                <div class="card-header green">"PROJEÇÃO DE VOTOS"</div>
                <div class="projection-range">
                    <div class="projection-bound">"MÁX: 1.265.365"</div>
                    <div class="projection-bound">"MÍN: 1.125.002"</div>
                </div>
            </div>
            <div class="projection-card">
                <div class="card-header green">"PROJEÇÃO DE VOTOS - HISTÓRICO"</div>
                <div class="projection-value">"1.234.560"</div>
                <div class="projection-subtitle">"Histórico de Votos / Quociente Eleitoral"</div>
            </div>
        </div>
    }
}
