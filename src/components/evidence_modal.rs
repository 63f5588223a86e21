use yew::prelude::*;
use web_sys::{File, HtmlInputElement};
use crate::viewmodels::verification_viewmodel::{validate_evidence, MSG_EVIDENCE_OK};
use crate::viewmodels::VerificationViewModel;

#[derive(Properties, PartialEq)]
pub struct EvidenceModalProps {
    pub verificacion_id: i64,
    pub on_close: Callback<()>,
    /// Mensaje de éxito para el dashboard
    pub on_uploaded: Callback<String>,
}

#[function_component(EvidenceModal)]
pub fn evidence_modal(props: &EvidenceModalProps) -> Html {
    let files = use_state(Vec::<File>::new);
    let uploading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_files_change = {
        let files = files.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let selected = input
                .files()
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                .unwrap_or_default();
            files.set(selected);
            error.set(None);
        })
    };

    let on_submit = {
        let files = files.clone();
        let uploading = uploading.clone();
        let error = error.clone();
        let verificacion_id = props.verificacion_id;
        let on_uploaded = props.on_uploaded.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(msg) = validate_evidence(files.len()) {
                error.set(Some(msg));
                return;
            }

            uploading.set(true);
            let selected = (*files).clone();
            let uploading = uploading.clone();
            let error = error.clone();
            let on_uploaded = on_uploaded.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = VerificationViewModel::new();
                match vm.upload_evidence(verificacion_id, &selected).await {
                    Ok(()) => {
                        log::info!("📷 [EVIDENCIA] {} foto(s) subidas", selected.len());
                        on_uploaded.emit(MSG_EVIDENCE_OK.to_string());
                    }
                    Err(e) => {
                        log::error!("❌ [EVIDENCIA] {}", e);
                        error.set(Some(e));
                    }
                }
                uploading.set(false);
            });
        })
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={on_close.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"Subir evidencia"}</h2>
                    <button class="btn-close" onclick={on_close.clone()}>{"✕"}</button>
                </div>
                <form class="modal-body" onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Fotos (formatos de imagen)"}</label>
                        <input
                            type="file"
                            accept="image/*"
                            multiple=true
                            onchange={on_files_change}
                            disabled={*uploading}
                        />
                        if !files.is_empty() {
                            <p class="hint">{format!("{} archivo(s) seleccionado(s)", files.len())}</p>
                        }
                    </div>

                    if let Some(error) = &*error {
                        <div class="form-error">{error.clone()}</div>
                    }

                    <div class="modal-actions">
                        <button type="button" class="btn-outline" onclick={on_close}>{"Cancelar"}</button>
                        <button type="submit" class="btn-primary" disabled={*uploading}>
                            { if *uploading { "Subiendo..." } else { "Subir" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
