// ============================================================================
// NEW VERIFICATION FORM - Alta en tres fases
// ============================================================================
// Fase 0: búsqueda por subsistema | Fase 1: datos obtenidos
// Fase 2: captura manual y creación
// ============================================================================

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_auth_context, use_navigation, use_verification_data, Route};
use crate::models::{Client, ConsolidatedProduct, DestinySearch, QualitySearch};
use crate::viewmodels::new_verification_viewmodel::{
    success_message, wicket_suggestion, LookupInput, ManualInputs,
};
use crate::viewmodels::NewVerificationViewModel;

/// Suelta la redirección pendiente (si hay). Soltar un `Timeout` lo cancela.
fn cancel_redirect<T>(slot: &RefCell<Option<T>>) -> bool {
    slot.borrow_mut().take().is_some()
}

fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(NewVerificationForm)]
pub fn new_verification_form() -> Html {
    let nav = use_navigation();
    let auth = use_auth_context();
    let data = use_verification_data();

    let mode = use_state(Client::default);
    let confirming = use_state(|| false);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let created = use_state(|| None::<i64>);
    let redirect = use_mut_ref(|| None::<Timeout>);

    // Salir del formulario cancela la redirección
    {
        let redirect = redirect.clone();
        use_effect_with((), move |_| {
            move || {
                cancel_redirect(&redirect);
            }
        });
    }

    // Fase 0
    let trazabilidad = use_state(String::new);
    let item_no = use_state(String::new);
    let inventory_lot = use_state(String::new);
    let shipping_unit_id = use_state(String::new);
    let po2 = use_state(String::new);
    let item_number = use_state(String::new);

    // Fase 2
    let cliente = use_state(String::new);
    let tipo_bolsa = use_state(String::new);
    let piezas_por_wicket = use_state(String::new);

    let reset_manual = {
        let cliente = cliente.clone();
        let tipo_bolsa = tipo_bolsa.clone();
        let piezas_por_wicket = piezas_por_wicket.clone();
        let form_error = form_error.clone();
        move || {
            cliente.set(String::new());
            tipo_bolsa.set(String::new());
            piezas_por_wicket.set(String::new());
            form_error.set(None);
        }
    };

    let on_mode_change = {
        let mode = mode.clone();
        let reset = data.reset.clone();
        let confirming = confirming.clone();
        let reset_manual = reset_manual.clone();
        let keys = [
            trazabilidad.clone(),
            item_no.clone(),
            inventory_lot.clone(),
            shipping_unit_id.clone(),
            po2.clone(),
            item_number.clone(),
        ];
        Callback::from(move |next: Client| {
            if *mode == next {
                return;
            }
            mode.set(next);
            reset.emit(());
            confirming.set(false);
            for key in keys.iter() {
                key.set(String::new());
            }
            reset_manual();
        })
    };

    let on_search = {
        let mode = mode.clone();
        let lookup = data.lookup.clone();
        let trazabilidad = trazabilidad.clone();
        let item_no = item_no.clone();
        let inventory_lot = inventory_lot.clone();
        let shipping_unit_id = shipping_unit_id.clone();
        let po2 = po2.clone();
        let item_number = item_number.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = match *mode {
                Client::Bioflex => LookupInput::Bioflex {
                    trazabilidad: trazabilidad.trim().to_string(),
                },
                Client::Destiny => LookupInput::Destiny(DestinySearch::new(
                    &item_no,
                    &inventory_lot,
                    &shipping_unit_id,
                )),
                Client::Quality => LookupInput::Quality(QualitySearch::new(&po2, &item_number)),
            };
            lookup.emit(input);
        })
    };

    let on_confirm = {
        let product = data.state.product.clone();
        let cliente = cliente.clone();
        let tipo_bolsa = tipo_bolsa.clone();
        let piezas_por_wicket = piezas_por_wicket.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let created = created.clone();
        let redirect = redirect.clone();
        let navigate = nav.navigate.clone();
        let user = auth.as_ref().and_then(|a| a.state.user.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(product) = product.clone() else {
                return;
            };
            let manual = ManualInputs {
                cliente: (*cliente).clone(),
                tipo_bolsa: (*tipo_bolsa).clone(),
                piezas_por_wicket: (*piezas_por_wicket).clone(),
            };
            if let Err(e) = manual.validate() {
                form_error.set(Some(e));
                return;
            }

            submitting.set(true);
            form_error.set(None);

            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let created = created.clone();
            let redirect = redirect.clone();
            let navigate = navigate.clone();
            let user = user.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = NewVerificationViewModel::new();
                match vm.start(&product, &manual, user.as_ref()).await {
                    Ok(id) => {
                        log::info!("✅ [NEW] Verificación {} creada", id);
                        created.set(Some(id));
                        let timeout = Timeout::new(CONFIG.redirect_delay_ms, move || {
                            navigate.emit(Route::Detail(id));
                        });
                        *redirect.borrow_mut() = Some(timeout);
                    }
                    Err(e) => {
                        log::error!("❌ [NEW] {}", e);
                        form_error.set(Some(e));
                    }
                }
                submitting.set(false);
            });
        })
    };

    // Verificación creada: pantalla de éxito mientras se redirige
    if let Some(id) = *created {
        let go_detail = {
            let redirect = redirect.clone();
            nav.navigate.reform(move |_: MouseEvent| {
                cancel_redirect(&redirect);
                Route::Detail(id)
            })
        };
        let go_pending = {
            let redirect = redirect.clone();
            nav.navigate.reform(move |_: MouseEvent| {
                cancel_redirect(&redirect);
                Route::Pending
            })
        };
        return html! {
            <div class="success-card">
                <h2>{"¡Verificación creada!"}</h2>
                <p>{success_message(id)}</p>
                <div class="actions">
                    <button class="btn-primary" onclick={go_detail}>{"Ir al detalle"}</button>
                    <button class="btn-outline" onclick={go_pending}>{"Ver pendientes"}</button>
                </div>
            </div>
        };
    }

    let lookup_state = &*data.state;
    let go_back = nav.navigate.reform(|_: MouseEvent| Route::Menu);

    let body = match (&lookup_state.product, *confirming) {
        (Some(product), true) => {
            let on_back = {
                let confirming = confirming.clone();
                let reset_manual = reset_manual.clone();
                Callback::from(move |_: MouseEvent| {
                    confirming.set(false);
                    reset_manual();
                })
            };
            let suggestion = wicket_suggestion(product)
                .map(|s| format!(" (Sugerido: {})", s))
                .unwrap_or_default();

            html! {
                <form class="card" onsubmit={on_confirm}>
                    <h3>{format!("Detalles de Inicio ({})", mode.as_str())}</h3>
                    <div class="form-group">
                        <label>{"Cliente *"}</label>
                        <input type="text" value={(*cliente).clone()} oninput={bind_input(&cliente)} />
                    </div>
                    <div class="form-group">
                        <label>{"Tipo de Bolsa *"}</label>
                        <input type="text" value={(*tipo_bolsa).clone()} oninput={bind_input(&tipo_bolsa)} />
                    </div>
                    <div class="form-group">
                        <label>{format!("Piezas por Wicket *{}", suggestion)}</label>
                        <input
                            type="number"
                            step="any"
                            value={(*piezas_por_wicket).clone()}
                            oninput={bind_input(&piezas_por_wicket)}
                        />
                    </div>
                    if let Some(error) = &*form_error {
                        <div class="form-error">{error.clone()}</div>
                    }
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Iniciando..." } else { "Confirmar e Iniciar Verificación" } }
                    </button>
                    <button type="button" class="btn-outline" onclick={on_back} disabled={*submitting}>
                        {format!("Volver a Datos de {}", mode.label())}
                    </button>
                </form>
            }
        }
        (Some(product), false) => {
            let on_continue = {
                let confirming = confirming.clone();
                Callback::from(move |_: MouseEvent| confirming.set(true))
            };
            let on_reset = data.reset.reform(|_: MouseEvent| ());
            html! {
                <div class="card">
                    <ProductSummary product={product.clone()} />
                    <button class="btn-primary" onclick={on_continue}>{"Iniciar Verificación"}</button>
                    <button class="btn-outline" onclick={on_reset}>{"Nueva búsqueda"}</button>
                </div>
            }
        }
        (None, _) => {
            let fetching = lookup_state.fetching;
            let fields = match *mode {
                Client::Bioflex => html! {
                    <div class="form-group">
                        <label>{"Código de Trazabilidad"}</label>
                        <input
                            type="text"
                            placeholder="Ej: 604025132030"
                            value={(*trazabilidad).clone()}
                            oninput={bind_input(&trazabilidad)}
                        />
                    </div>
                },
                Client::Destiny => html! {
                    <>
                        <div class="form-group">
                            <label>{"ItemNo"}</label>
                            <input type="text" placeholder="Ej. 61953-11" value={(*item_no).clone()} oninput={bind_input(&item_no)} />
                        </div>
                        <div class="form-group">
                            <label>{"InventoryLot"}</label>
                            <input type="text" placeholder="Ej. 13915" value={(*inventory_lot).clone()} oninput={bind_input(&inventory_lot)} />
                        </div>
                        <div class="form-group">
                            <label>{"ShippingUnitId"}</label>
                            <input type="text" placeholder="Ej. 28596" value={(*shipping_unit_id).clone()} oninput={bind_input(&shipping_unit_id)} />
                        </div>
                    </>
                },
                Client::Quality => html! {
                    <>
                        <div class="form-group">
                            <label>{"PO2"}</label>
                            <input type="text" value={(*po2).clone()} oninput={bind_input(&po2)} />
                        </div>
                        <div class="form-group">
                            <label>{"Item Number"}</label>
                            <input type="text" value={(*item_number).clone()} oninput={bind_input(&item_number)} />
                        </div>
                    </>
                },
            };
            let button_text = match (*mode, fetching) {
                (Client::Bioflex, true) => "Buscando Datos...",
                (Client::Bioflex, false) => "Buscar y Continuar",
                (_, true) => "Buscando...",
                (Client::Destiny, false) => "Buscar datos Destiny",
                (Client::Quality, false) => "Buscar datos Quality",
            };

            html! {
                <form class="card" onsubmit={on_search}>
                    {fields}
                    if let Some(error) = &lookup_state.error {
                        <div class="form-error">{error.clone()}</div>
                    }
                    <button type="submit" class="btn-primary" disabled={fetching}>{button_text}</button>
                </form>
            }
        }
    };

    html! {
        <div class="new-verification">
            <div class="page-header">
                <button class="btn-back" onclick={go_back}>{"← Volver"}</button>
                <h2>{"Iniciar Nueva Verificación"}</h2>
            </div>

            <div class="mode-switch">
                { for Client::ALL.iter().map(|client| {
                    let client = *client;
                    let onclick = on_mode_change.reform(move |_: MouseEvent| client);
                    html! {
                        <button
                            type="button"
                            class={classes!("mode-button", (*mode == client).then_some("active"))}
                            {onclick}
                        >
                            {client.label()}
                        </button>
                    }
                })}
            </div>

            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProductSummaryProps {
    product: ConsolidatedProduct,
}

/// Tarjeta "Datos Obtenidos"
#[function_component(ProductSummary)]
fn product_summary(props: &ProductSummaryProps) -> Html {
    let product = &props.product;
    let label = &product.label;

    html! {
        <div class="product-summary">
            <h3>{format!("Datos Obtenidos ({})", product.client())}</h3>
            <p class="product-name">{label.nombre_producto().to_string()}</p>
            <p class="product-key">{format!("Clave: {}", label.clave_producto())}</p>
            <p class="product-secondary">{label.secondary_header()}</p>
            <dl class="product-grid">
                <dt>{"Área"}</dt>
                <dd>{label.area().to_string()}</dd>
                <dt>{"Orden (Lote)"}</dt>
                <dd>{label.orden()}</dd>
                <dt>{"Cantidad Ordenada"}</dt>
                <dd>{product.cantidad_orden_display()}</dd>
                <dt>{"Print Card"}</dt>
                <dd>{label.print_card().unwrap_or("N/A").to_string()}</dd>
                <dt>{"Piezas por Caja (QtyUOM)"}</dt>
                <dd>{product.piezas_por_caja_display()}</dd>
            </dl>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct DropFlag(Rc<RefCell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            *self.0.borrow_mut() = true;
        }
    }

    #[test]
    fn cancelling_drops_the_pending_redirect() {
        let dropped = Rc::new(RefCell::new(false));
        let slot = RefCell::new(Some(DropFlag(dropped.clone())));

        assert!(cancel_redirect(&slot));
        assert!(*dropped.borrow());
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn cancelling_without_redirect_is_a_no_op() {
        let slot: RefCell<Option<DropFlag>> = RefCell::new(None);
        assert!(!cancel_redirect(&slot));
    }
}
