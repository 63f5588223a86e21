// ============================================================================
// VERIFICATION DETAIL - Dashboard de una verificación
// ============================================================================

use yew::prelude::*;
use crate::hooks::{use_dashboard, use_navigation, Route};
use crate::models::Client;
use crate::utils::{format_elapsed_minutes, format_percent};
use crate::viewmodels::verification_viewmodel::actions_for;
use crate::viewmodels::VerificationViewModel;
use super::{EvidenceModal, FinishModal, PalletPanel, ScanModal, ScanModalDestiny};

#[derive(Clone, Copy, PartialEq)]
enum ActiveModal {
    Scan,
    Evidence,
    Finish,
}

#[derive(Properties, PartialEq)]
pub struct VerificationDetailProps {
    pub verificacion_id: i64,
}

#[function_component(VerificationDetail)]
pub fn verification_detail(props: &VerificationDetailProps) -> Html {
    let nav = use_navigation();
    let dashboard = use_dashboard(props.verificacion_id);
    let modal = use_state(|| None::<ActiveModal>);
    let notice = use_state(|| None::<String>);
    let reopening = use_state(|| false);
    let action_error = use_state(|| None::<String>);

    let state = &*dashboard.state;
    let go_back = nav.navigate.reform(|_: MouseEvent| Route::Pending);

    if state.loading && state.dashboard.is_none() {
        return html! {
            <div class="loading">{"Cargando dashboard de verificación..."}</div>
        };
    }

    let Some(data) = state.dashboard.clone() else {
        let error = state.error.clone().unwrap_or_default();
        return html! {
            <div class="error-card">
                <h3>{"Error al cargar"}</h3>
                <p>{error}</p>
                <button class="btn-primary" onclick={dashboard.refresh.reform(|_: MouseEvent| ())}>
                    {"Reintentar Carga"}
                </button>
                <button class="btn-outline" onclick={go_back}>{"← Volver"}</button>
            </div>
        };
    };

    let actions = actions_for(&data);
    let verificacion_id = data.verificacion_id;

    let open_modal = |target: ActiveModal| {
        let modal = modal.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            notice.set(None);
            modal.set(Some(target));
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(None))
    };

    // Cierra el modal, muestra el aviso y recarga
    let on_done = {
        let modal = modal.clone();
        let notice = notice.clone();
        let refresh = dashboard.refresh.clone();
        Callback::from(move |message: Option<String>| {
            modal.set(None);
            notice.set(message);
            refresh.emit(());
        })
    };

    let on_reopen = {
        let reopening = reopening.clone();
        let action_error = action_error.clone();
        let notice = notice.clone();
        let refresh = dashboard.refresh.clone();
        Callback::from(move |_: MouseEvent| {
            reopening.set(true);
            action_error.set(None);
            let reopening = reopening.clone();
            let action_error = action_error.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = VerificationViewModel::new();
                match vm.reopen(verificacion_id).await {
                    Ok(()) => {
                        log::info!("🔓 [VERIF] Verificación {} reabierta", verificacion_id);
                        notice.set(Some("Verificación reabierta.".to_string()));
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ [VERIF] {}", e);
                        action_error.set(Some(e));
                    }
                }
                reopening.set(false);
            });
        })
    };

    let modal_html = match *modal {
        Some(ActiveModal::Scan) if data.cliente == Some(Client::Destiny) => html! {
            <ScanModalDestiny
                verificacion_id={verificacion_id}
                on_close={close_modal.clone()}
                on_registered={on_done.reform(|_: ()| None)}
            />
        },
        Some(ActiveModal::Scan) => html! {
            <ScanModal
                verificacion_id={verificacion_id}
                on_close={close_modal.clone()}
                on_registered={on_done.reform(|_: ()| None)}
            />
        },
        Some(ActiveModal::Evidence) => html! {
            <EvidenceModal
                verificacion_id={verificacion_id}
                on_close={close_modal.clone()}
                on_uploaded={on_done.reform(Some)}
            />
        },
        Some(ActiveModal::Finish) => html! {
            <FinishModal
                verificacion_id={verificacion_id}
                on_close={close_modal.clone()}
                on_finished={on_done.reform(Some)}
            />
        },
        None => html! {},
    };

    html! {
        <div class="verification-detail">
            <div class="page-header">
                <button class="btn-back" onclick={go_back}>{"← Volver"}</button>
                <h2>{format!("Verificación #{}", verificacion_id)}</h2>
                <p>{format!("Estado: {}", data.estado)}</p>
                <p>{format!("Lote/Orden: {}", data.lote_orden)}</p>
                <p>{format!("Producto Info: {}", data.producto_info)}</p>
                if let Some(cliente) = data.cliente {
                    <span class="client-badge">{cliente.label()}</span>
                }
            </div>

            if let Some(message) = &*notice {
                <div class="notice">{message.clone()}</div>
            }
            if let Some(error) = &*action_error {
                <div class="form-error">{error.clone()}</div>
            }
            if let Some(error) = &state.error {
                <div class="form-error">{error.clone()}</div>
            }

            <div class="kpis">
                <div class="kpi">
                    <p class="kpi-label">{"Avance"}</p>
                    <p class="kpi-value">{format_percent(data.porcentaje_avance)}</p>
                    <div class="progress">
                        <div
                            class="progress-bar"
                            style={format!("width: {}", format_percent(data.porcentaje_avance))}
                        ></div>
                    </div>
                </div>
                <div class="kpi">
                    <p class="kpi-label">{"Cajas Registradas"}</p>
                    <p class="kpi-value">{data.cajas_actuales}</p>
                    <p class="kpi-hint">{format!("({} pz)", data.piezas_actuales)}</p>
                </div>
                <div class="kpi">
                    <p class="kpi-label">{"Tarimas Actuales"}</p>
                    <p class="kpi-value">{data.tarimas_actuales}</p>
                    <p class="kpi-hint">{format!("({} estimadas)", data.tarimas_totales_estimadas)}</p>
                </div>
                <div class="kpi">
                    <p class="kpi-label">{"Tiempo"}</p>
                    <p class="kpi-value">{format_elapsed_minutes(data.tiempo_transcurrido_minutos)}</p>
                </div>
            </div>

            <div class="detail-actions">
                <button class="btn-primary" onclick={open_modal(ActiveModal::Scan)} disabled={!actions.scan}>
                    {"Agregar Cajas Individuales"}
                </button>
                <button class="btn-outline" onclick={open_modal(ActiveModal::Evidence)} disabled={!actions.evidence}>
                    {"Agregar evidencia"}
                </button>
                <button class="btn-outline" onclick={open_modal(ActiveModal::Finish)} disabled={!actions.finish}>
                    {"Finalizar revisión"}
                </button>
                if actions.reopen {
                    <button class="btn-outline" onclick={on_reopen} disabled={*reopening}>
                        { if *reopening { "Reabriendo..." } else { "Reabrir verificación" } }
                    </button>
                }
            </div>

            <PalletPanel
                verificacion_id={verificacion_id}
                active={state.active_pallets.clone()}
                finished={state.finished_pallets.clone()}
                error={state.pallets_error.clone()}
                enabled={actions.pallets}
                on_changed={dashboard.refresh.clone()}
            />

            {modal_html}
        </div>
    }
}
