// ============================================================================
// PALLET PANEL - Tarimas activas y terminadas de una verificación
// ============================================================================

use std::collections::HashMap;

use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::hooks::use_auth_context;
use crate::models::Pallet;
use crate::utils::{format_date_es, format_percent};
use crate::viewmodels::VerificationViewModel;

#[derive(Properties, PartialEq)]
pub struct PalletPanelProps {
    pub verificacion_id: i64,
    pub active: Vec<Pallet>,
    pub finished: Vec<Pallet>,
    #[prop_or_default]
    pub error: Option<String>,
    /// Solo con la verificación EN PROCESO
    pub enabled: bool,
    pub on_changed: Callback<()>,
}

#[function_component(PalletPanel)]
pub fn pallet_panel(props: &PalletPanelProps) -> Html {
    let auth = use_auth_context();
    let busy = use_state(|| false);
    let action_error = use_state(|| None::<String>);
    let motivos = use_state(HashMap::<i64, String>::new);
    let expanded = use_state(|| None::<i64>);

    let on_start = {
        let busy = busy.clone();
        let action_error = action_error.clone();
        let on_changed = props.on_changed.clone();
        let verificacion_id = props.verificacion_id;
        let user = auth.as_ref().and_then(|a| a.state.user.clone());

        Callback::from(move |_: MouseEvent| {
            busy.set(true);
            action_error.set(None);
            let busy = busy.clone();
            let action_error = action_error.clone();
            let on_changed = on_changed.clone();
            let user = user.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = VerificationViewModel::new();
                match vm.start_pallet(verificacion_id, user.as_ref()).await {
                    Ok(()) => {
                        log::info!("🧱 [TARIMA] Nueva tarima en verificación {}", verificacion_id);
                        on_changed.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ [TARIMA] {}", e);
                        action_error.set(Some(e));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_finish = {
        let busy = busy.clone();
        let action_error = action_error.clone();
        let motivos = motivos.clone();
        let on_changed = props.on_changed.clone();
        let verificacion_id = props.verificacion_id;

        Callback::from(move |tarima_id: i64| {
            busy.set(true);
            action_error.set(None);
            let reason = motivo_for(&motivos, tarima_id).to_string();
            let busy = busy.clone();
            let action_error = action_error.clone();
            let motivos = motivos.clone();
            let on_changed = on_changed.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = VerificationViewModel::new();
                match vm.finish_pallet(verificacion_id, tarima_id, &reason).await {
                    Ok(()) => {
                        log::info!("🧱 [TARIMA] Tarima {} cerrada", tarima_id);
                        motivos.set(with_motivo(&motivos, tarima_id, String::new()));
                        on_changed.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ [TARIMA] {}", e);
                        action_error.set(Some(e));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_motivo_change = {
        let motivos = motivos.clone();
        Callback::from(move |(tarima_id, e): (i64, InputEvent)| {
            let input: HtmlInputElement = e.target_unchecked_into();
            motivos.set(with_motivo(&motivos, tarima_id, input.value()));
        })
    };

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |id: i64| {
            let next = if *expanded == Some(id) { None } else { Some(id) };
            expanded.set(next);
        })
    };

    html! {
        <section class="pallet-panel">
            <div class="section-header">
                <h3>{"Tarimas"}</h3>
                if props.enabled {
                    <button class="btn-primary" onclick={on_start} disabled={*busy}>{"Iniciar tarima"}</button>
                }
            </div>

            if let Some(error) = props.error.clone().or_else(|| (*action_error).clone()) {
                <div class="form-error">{error}</div>
            }

            <h4>{"Activas"}</h4>
            if props.active.is_empty() {
                <p class="empty-hint">{"Sin tarimas activas."}</p>
            }
            { for props.active.iter().map(|pallet| {
                let tarima_id = pallet.id;
                let finish = on_finish.reform(move |_: MouseEvent| tarima_id);
                let oninput = on_motivo_change.reform(move |e: InputEvent| (tarima_id, e));
                html! {
                    <div class="pallet-card" key={pallet.id}>
                        <PalletHeader pallet={pallet.clone()} />
                        if props.enabled {
                            <div class="pallet-actions">
                                <input
                                    type="text"
                                    placeholder="Motivo de cierre (opcional)"
                                    value={motivo_for(&motivos, tarima_id).to_string()}
                                    {oninput}
                                />
                                <button class="btn-outline" onclick={finish} disabled={*busy}>{"Terminar tarima"}</button>
                            </div>
                        }
                    </div>
                }
            })}

            <h4>{"Terminadas"}</h4>
            if props.finished.is_empty() {
                <p class="empty-hint">{"Sin tarimas terminadas."}</p>
            }
            { for props.finished.iter().map(|pallet| {
                let tarima_id = pallet.id;
                let is_open = *expanded == Some(tarima_id);
                let onclick = toggle.reform(move |_: MouseEvent| tarima_id);
                html! {
                    <div class="pallet-card finished" key={pallet.id}>
                        <PalletHeader pallet={pallet.clone()} />
                        <button class="btn-link" {onclick}>
                            { if is_open { "Ocultar cajas" } else { "Ver cajas" } }
                        </button>
                        if is_open {
                            <ul class="box-list">
                                { for pallet.cajas.iter().map(|caja| html! {
                                    <li class={classes!("box-item", caja.tiene_defecto.then_some("defect"))}>
                                        <span>{caja.identificador.clone()}</span>
                                        <span>{format!("{} pz", caja.cantidad)}</span>
                                        if let Some(comentario) = &caja.comentario_defecto {
                                            <span class="defect-note">{comentario.clone()}</span>
                                        }
                                    </li>
                                })}
                            </ul>
                        }
                    </div>
                }
            })}
        </section>
    }
}

/// Motivo capturado para una tarima (vacío si no hay)
fn motivo_for(motivos: &HashMap<i64, String>, tarima_id: i64) -> &str {
    motivos.get(&tarima_id).map(String::as_str).unwrap_or_default()
}

fn with_motivo(motivos: &HashMap<i64, String>, tarima_id: i64, value: String) -> HashMap<i64, String> {
    let mut next = motivos.clone();
    if value.is_empty() {
        next.remove(&tarima_id);
    } else {
        next.insert(tarima_id, value);
    }
    next
}

#[derive(Properties, PartialEq)]
struct PalletHeaderProps {
    pallet: Pallet,
}

#[function_component(PalletHeader)]
fn pallet_header(props: &PalletHeaderProps) -> Html {
    let pallet = &props.pallet;
    let defects = pallet.defect_count();

    html! {
        <div class="pallet-header">
            <strong>{format!("Tarima #{}", pallet.numero_tarima)}</strong>
            <span>{format!("{} / {} cajas", pallet.cajas_actuales, pallet.cajas_meta)}</span>
            <span class="pallet-progress">{format_percent(pallet.progress_percent())}</span>
            if let Some(fecha) = &pallet.fecha_inicio {
                <span class="pallet-date">{format_date_es(fecha)}</span>
            }
            if let Some(creador) = &pallet.creado_por {
                <span class="pallet-owner">{creador.clone()}</span>
            }
            if defects > 0 {
                <span class="badge defect">{format!("{} con defecto", defects)}</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_pallet_keeps_its_own_reason() {
        let motivos = with_motivo(&HashMap::new(), 4, "rota".to_string());
        let motivos = with_motivo(&motivos, 9, "incompleta".to_string());
        assert_eq!(motivo_for(&motivos, 4), "rota");
        assert_eq!(motivo_for(&motivos, 9), "incompleta");
        assert_eq!(motivo_for(&motivos, 12), "");
    }

    #[test]
    fn clearing_one_reason_leaves_the_others() {
        let motivos = with_motivo(&HashMap::new(), 4, "rota".to_string());
        let motivos = with_motivo(&motivos, 9, "incompleta".to_string());
        let motivos = with_motivo(&motivos, 4, String::new());
        assert_eq!(motivo_for(&motivos, 4), "");
        assert_eq!(motivo_for(&motivos, 9), "incompleta");
        assert_eq!(motivos.len(), 1);
    }
}
