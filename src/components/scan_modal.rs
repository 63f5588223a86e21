use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::hooks::use_verification_data;
use crate::viewmodels::new_verification_viewmodel::LookupInput;
use crate::viewmodels::scan_viewmodel::validate_trace_code;
use crate::viewmodels::ScanViewModel;

#[derive(Properties, PartialEq)]
pub struct ScanModalProps {
    pub verificacion_id: i64,
    pub on_close: Callback<()>,
    pub on_registered: Callback<()>,
}

/// Registro de cajas por código de trazabilidad (BIOFLEX y QUALITY)
#[function_component(ScanModal)]
pub fn scan_modal(props: &ScanModalProps) -> Html {
    let data = use_verification_data();
    let code = use_state(String::new);
    let local_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_code_change = {
        let code = code.clone();
        let reset = data.reset.clone();
        let local_error = local_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            code.set(input.value());
            // Otro código invalida la etiqueta ya buscada
            reset.emit(());
            local_error.set(None);
        })
    };

    let on_submit = {
        let code = code.clone();
        let local_error = local_error.clone();
        let saving = saving.clone();
        let lookup = data.lookup.clone();
        let product = data.state.product.clone();
        let verificacion_id = props.verificacion_id;
        let on_registered = props.on_registered.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Primer submit: buscar la etiqueta
            let Some(product) = product.clone() else {
                match validate_trace_code(&code) {
                    Ok(trazabilidad) => {
                        local_error.set(None);
                        lookup.emit(LookupInput::Bioflex { trazabilidad });
                    }
                    Err(e) => local_error.set(Some(e)),
                }
                return;
            };

            // Segundo submit: registrar la caja
            saving.set(true);
            let saving = saving.clone();
            let local_error = local_error.clone();
            let on_registered = on_registered.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = ScanViewModel::new();
                match vm.register_box(verificacion_id, &product).await {
                    Ok(()) => on_registered.emit(()),
                    Err(e) => {
                        log::error!("❌ [SCAN] {}", e);
                        local_error.set(Some(e));
                    }
                }
                saving.set(false);
            });
        })
    };

    let state = &*data.state;
    let busy = state.fetching || *saving;
    let error = (*local_error).clone().or_else(|| state.error.clone());
    let button_text = match (&state.product, busy) {
        (_, true) => "Procesando...",
        (Some(_), false) => "Registrar caja",
        (None, false) => "Buscar etiqueta",
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={on_close.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"Registrar Escaneo"}</h2>
                    <button class="btn-close" onclick={on_close.clone()}>{"✕"}</button>
                </div>
                <form class="modal-body" onsubmit={on_submit}>
                    <p class="modal-subtitle">{format!("Verificación activa ID: {}", props.verificacion_id)}</p>
                    <div class="form-group">
                        <label>{"Código de Trazabilidad"}</label>
                        <input
                            type="text"
                            placeholder="Escanee o escriba el código"
                            value={(*code).clone()}
                            oninput={on_code_change}
                            disabled={busy}
                        />
                    </div>

                    if let Some(product) = &state.product {
                        <div class="scan-preview">
                            <p class="product-name">{product.label.nombre_producto().to_string()}</p>
                            <p>{format!("Orden: {}", product.label.orden())}</p>
                            <p>{format!("Piezas por caja: {}", product.piezas_por_caja_display())}</p>
                        </div>
                    }

                    if let Some(error) = error {
                        <div class="form-error">{error}</div>
                    }

                    <div class="modal-actions">
                        <button type="button" class="btn-outline" onclick={on_close}>{"Cancelar"}</button>
                        <button type="submit" class="btn-primary" disabled={busy}>{button_text}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
