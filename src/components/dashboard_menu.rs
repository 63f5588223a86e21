use yew::prelude::*;
use crate::hooks::{use_navigation, use_verifications, Route};
use crate::models::VerificationStatus;

#[function_component(DashboardMenu)]
pub fn dashboard_menu() -> Html {
    let nav = use_navigation();
    let verifications = use_verifications();
    let state = &*verifications.state;

    if state.loading {
        return html! {
            <div class="loading">{"Cargando datos..."}</div>
        };
    }

    if let Some(error) = &state.error {
        return html! {
            <div class="error-card">
                <h3>{"Error de conexión"}</h3>
                <p>{error.clone()}</p>
                <button class="btn-primary" onclick={verifications.refresh.reform(|_: MouseEvent| ())}>
                    {"Reintentar"}
                </button>
            </div>
        };
    }

    let pending_count = state.pending().len();
    let completed_count = state
        .summaries
        .iter()
        .filter(|s| s.status == VerificationStatus::Completed)
        .count();
    let total = state.summaries.len();

    let go_new = nav.navigate.reform(|_: MouseEvent| Route::NewVerification);
    let go_pending = nav.navigate.reform(|_: MouseEvent| Route::Pending);

    html! {
        <div class="menu">
            <div class="page-header">
                <h2>{"Panel de Control"}</h2>
                <p>{"Gestiona las verificaciones de productos BIOFLEX"}</p>
            </div>

            <div class="stats">
                <div class="stat-card">
                    <p class="stat-value">{pending_count}</p>
                    <p class="stat-label">{"Pendientes"}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-value">{completed_count}</p>
                    <p class="stat-label">{"Completadas"}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-value">{total}</p>
                    <p class="stat-label">{"Total"}</p>
                </div>
            </div>

            <div class="menu-options">
                <div class="menu-card" onclick={go_new}>
                    <h3>{"Iniciar Nueva Verificación"}</h3>
                    <p>{"Comienza el proceso de verificación para un nuevo lote de BIOFLEX"}</p>
                    <span class="btn-primary">{"Comenzar →"}</span>
                </div>
                <div class="menu-card" onclick={go_pending}>
                    <h3>{"Ver Verificaciones Pendientes"}</h3>
                    <p>{"Revisa y continúa con las verificaciones en proceso"}</p>
                    <span class="btn-outline">
                        {"Ver Pendientes"}
                        if pending_count > 0 {
                            <span class="badge">{pending_count}</span>
                        }
                    </span>
                </div>
            </div>
        </div>
    }
}
