use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use crate::viewmodels::verification_viewmodel::{build_finish_request, FinishForm, MSG_FINISH_OK};
use crate::viewmodels::VerificationViewModel;

#[derive(Properties, PartialEq)]
pub struct FinishModalProps {
    pub verificacion_id: i64,
    pub on_close: Callback<()>,
    pub on_finished: Callback<String>,
}

#[function_component(FinishModal)]
pub fn finish_modal(props: &FinishModalProps) -> Html {
    let form = use_state(FinishForm::default);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_muestreo = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(FinishForm { muestreo: input.value(), ..(*form).clone() });
        })
    };
    let on_defectos = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(FinishForm { defectos: input.value(), ..(*form).clone() });
        })
    };
    let on_comentarios = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(FinishForm { comentarios: input.value(), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let saving = saving.clone();
        let error = error.clone();
        let verificacion_id = props.verificacion_id;
        let on_finished = props.on_finished.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(msg) = build_finish_request(verificacion_id, &form) {
                error.set(Some(msg));
                return;
            }

            saving.set(true);
            error.set(None);
            let values = (*form).clone();
            let saving = saving.clone();
            let error = error.clone();
            let on_finished = on_finished.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = VerificationViewModel::new();
                match vm.finish(verificacion_id, &values).await {
                    Ok(()) => {
                        log::info!("🏁 [VERIF] Verificación {} finalizada", verificacion_id);
                        on_finished.emit(MSG_FINISH_OK.to_string());
                    }
                    Err(e) => {
                        log::error!("❌ [VERIF] {}", e);
                        error.set(Some(e));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={on_close.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"Finalizar revisión"}</h2>
                    <button class="btn-close" onclick={on_close.clone()}>{"✕"}</button>
                </div>
                <form class="modal-body" onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Muestreo"}</label>
                        <input type="text" value={form.muestreo.clone()} oninput={on_muestreo} />
                    </div>
                    <div class="form-group">
                        <label>{"Defectos encontrados"}</label>
                        <input type="text" value={form.defectos.clone()} oninput={on_defectos} />
                    </div>
                    <div class="form-group">
                        <label>{"Comentarios"}</label>
                        <textarea rows="3" value={form.comentarios.clone()} oninput={on_comentarios} />
                    </div>

                    if let Some(error) = &*error {
                        <div class="form-error">{error.clone()}</div>
                    }

                    <div class="modal-actions">
                        <button type="button" class="btn-outline" onclick={on_close}>{"Cancelar"}</button>
                        <button type="submit" class="btn-primary" disabled={*saving}>
                            { if *saving { "Finalizando..." } else { "Finalizar" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
