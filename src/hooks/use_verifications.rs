use yew::prelude::*;
use crate::stores::VerificationStore;
use crate::viewmodels::VerificationViewModel;

#[derive(Clone, PartialEq)]
pub struct UseVerificationsHandle {
    pub state: UseStateHandle<VerificationStore>,
    pub refresh: Callback<()>,
}

/// Verificaciones activas; carga al montar y en cada `refresh`
#[hook]
pub fn use_verifications() -> UseVerificationsHandle {
    let state = use_state(VerificationStore::default);

    let refresh = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut loading = (*state).clone();
            loading.loading = true;
            loading.error = None;
            state.set(loading);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = VerificationViewModel::new();
                match vm.load_summaries().await {
                    Ok(summaries) => state.set(VerificationStore {
                        summaries,
                        loading: false,
                        error: None,
                    }),
                    Err(e) => {
                        log::error!("❌ [VERIF] Error cargando verificaciones: {}", e);
                        state.set(VerificationStore {
                            summaries: Vec::new(),
                            loading: false,
                            error: Some(e),
                        });
                    }
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseVerificationsHandle { state, refresh }
}
