use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::hooks::use_destiny_etiqueta;
use crate::models::DestinySearch;
use crate::viewmodels::ScanViewModel;

#[derive(Properties, PartialEq)]
pub struct ScanModalDestinyProps {
    pub verificacion_id: i64,
    pub on_close: Callback<()>,
    pub on_registered: Callback<()>,
}

/// Registro de cajas DESTINY: llaves de shipping + consecutivo
#[function_component(ScanModalDestiny)]
pub fn scan_modal_destiny(props: &ScanModalDestinyProps) -> Html {
    let etiqueta = use_destiny_etiqueta();
    let item_no = use_state(String::new);
    let inventory_lot = use_state(String::new);
    let shipping_unit_id = use_state(String::new);
    let consecutivo = use_state(String::new);
    let local_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let bind_key = |target: &UseStateHandle<String>| {
        let target = target.clone();
        let reset = etiqueta.reset.clone();
        let local_error = local_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            target.set(input.value());
            reset.emit(());
            local_error.set(None);
        })
    };

    let on_consecutivo_change = {
        let consecutivo = consecutivo.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            consecutivo.set(input.value());
        })
    };

    let on_submit = {
        let item_no = item_no.clone();
        let inventory_lot = inventory_lot.clone();
        let shipping_unit_id = shipping_unit_id.clone();
        let consecutivo = consecutivo.clone();
        let local_error = local_error.clone();
        let saving = saving.clone();
        let lookup = etiqueta.lookup.clone();
        let label = etiqueta.state.label.clone();
        let verificacion_id = props.verificacion_id;
        let on_registered = props.on_registered.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(label) = label.clone() else {
                local_error.set(None);
                lookup.emit(DestinySearch::new(&item_no, &inventory_lot, &shipping_unit_id));
                return;
            };

            saving.set(true);
            let consecutivo = (*consecutivo).clone();
            let saving = saving.clone();
            let local_error = local_error.clone();
            let on_registered = on_registered.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = ScanViewModel::new();
                match vm.register_destiny_box(verificacion_id, &label, &consecutivo).await {
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

    let state = &*etiqueta.state;
    let busy = state.fetching || *saving;
    let error = (*local_error).clone().or_else(|| state.error.clone());
    let button_text = match (&state.label, busy) {
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
                    <h2>{"Registrar Escaneo Destiny"}</h2>
                    <button class="btn-close" onclick={on_close.clone()}>{"✕"}</button>
                </div>
                <form class="modal-body" onsubmit={on_submit}>
                    <p class="modal-subtitle">{format!("Verificación activa ID: {}", props.verificacion_id)}</p>
                    <div class="form-group">
                        <label>{"ItemNo"}</label>
                        <input type="text" placeholder="Ej. 61953-11" value={(*item_no).clone()} oninput={bind_key(&item_no)} disabled={busy} />
                    </div>
                    <div class="form-group">
                        <label>{"InventoryLot"}</label>
                        <input type="text" placeholder="Ej. 13915" value={(*inventory_lot).clone()} oninput={bind_key(&inventory_lot)} disabled={busy} />
                    </div>
                    <div class="form-group">
                        <label>{"ShippingUnitId"}</label>
                        <input type="text" placeholder="Ej. 28596" value={(*shipping_unit_id).clone()} oninput={bind_key(&shipping_unit_id)} disabled={busy} />
                    </div>

                    if let Some(label) = &state.label {
                        <div class="scan-preview">
                            <p class="product-name">{label.nombre_producto.clone()}</p>
                            <p>{format!("Orden: {}", label.orden)}</p>
                            <p>{format!("QtyUOM: {}", label.qty_uom_piezas())}</p>
                        </div>
                        <div class="form-group">
                            <label>{"Consecutivo"}</label>
                            <input
                                type="number"
                                min="1"
                                step="1"
                                value={(*consecutivo).clone()}
                                oninput={on_consecutivo_change}
                                disabled={busy}
                            />
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
