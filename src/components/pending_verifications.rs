use yew::prelude::*;
use crate::hooks::{use_navigation, use_verifications, Route};
use crate::models::VerificationSummary;
use crate::utils::format_date_es;
use crate::viewmodels::verification_viewmodel::pending_count_label;

#[derive(Properties, PartialEq)]
struct VerificationCardProps {
    summary: VerificationSummary,
    #[prop_or_default]
    compact: bool,
    on_open: Callback<i64>,
}

#[function_component(VerificationCard)]
fn verification_card(props: &VerificationCardProps) -> Html {
    let summary = &props.summary;
    let onclick = {
        let id = summary.id;
        props.on_open.reform(move |_: MouseEvent| id)
    };

    if props.compact {
        return html! {
            <div class="verification-card compact" {onclick}>
                <span class="card-title">{summary.product_name.clone()}</span>
                <span class={classes!("status-badge", summary.status.css_class())}>
                    {summary.status.label()}
                </span>
            </div>
        };
    }

    html! {
        <div class="verification-card">
            <div class="card-header">
                <h3 class="card-title">{summary.product_name.clone()}</h3>
                <span class={classes!("status-badge", summary.status.css_class())}>
                    {summary.status.label()}
                </span>
            </div>
            <div class="card-body">
                <p>{format!("Lote: {}", summary.lot_number)}</p>
                <p>{format!("Inicio: {}", format_date_es(&summary.created_at))}</p>
                <p>{format!("Inspector: {}", summary.client)}</p>
                <p class="card-notes">{summary.notes.clone()}</p>
            </div>
            <button class="btn-outline" {onclick}>{"Ver Detalles"}</button>
        </div>
    }
}

/// Una tarjeta por verificación, con el id como key
fn verification_cards(summaries: Vec<VerificationSummary>, compact: bool, on_open: &Callback<i64>) -> Html {
    summaries
        .into_iter()
        .map(|summary| {
            let id = summary.id;
            html! {
                <VerificationCard key={id} summary={summary} compact={compact} on_open={on_open.clone()} />
            }
        })
        .collect()
}

#[function_component(PendingVerifications)]
pub fn pending_verifications() -> Html {
    let nav = use_navigation();
    let verifications = use_verifications();
    let state = &*verifications.state;

    if state.loading {
        return html! {
            <div class="loading">{"Cargando verificaciones..."}</div>
        };
    }

    let on_open = nav.navigate.reform(Route::Detail);
    let go_new = nav.navigate.reform(|_: MouseEvent| Route::NewVerification);
    let go_back = nav.navigate.reform(|_: MouseEvent| Route::Menu);

    let pending = state.pending();
    let completed = state.completed_preview();

    html! {
        <div class="pending-page">
            <div class="page-header">
                <button class="btn-back" onclick={go_back}>{"← Volver"}</button>
                <h2>{"Verificaciones Pendientes"}</h2>
                <p>{pending_count_label(pending.len())}</p>
            </div>

            if let Some(error) = &state.error {
                <div class="error-card">
                    <p>{error.clone()}</p>
                    <button class="btn-primary" onclick={verifications.refresh.reform(|_: MouseEvent| ())}>
                        {"Reintentar"}
                    </button>
                </div>
            }

            if pending.is_empty() {
                <div class="empty-state">
                    <h3>{"No hay verificaciones pendientes"}</h3>
                    <p>{"Todas las verificaciones han sido completadas"}</p>
                    <button class="btn-primary" onclick={go_new}>{"Iniciar Nueva Verificación"}</button>
                </div>
            } else {
                <div class="verification-list">
                    {verification_cards(pending, false, &on_open)}
                </div>
            }

            if !completed.is_empty() {
                <div class="completed-section">
                    <h3>{"Completadas Recientemente"}</h3>
                    {verification_cards(completed, true, &on_open)}
                </div>
            }
        </div>
    }
}
