// ============================================================================
// USE VERIFICATION DATA - Búsqueda encadenada del producto
// ============================================================================
// Un solo hook para los tres subsistemas; el resultado queda en LookupStore
// ============================================================================

use yew::prelude::*;
use crate::stores::LookupStore;
use crate::viewmodels::new_verification_viewmodel::LookupInput;
use crate::viewmodels::NewVerificationViewModel;

#[derive(Clone, PartialEq)]
pub struct UseVerificationDataHandle {
    pub state: UseStateHandle<LookupStore>,
    pub lookup: Callback<LookupInput>,
    pub reset: Callback<()>,
}

#[hook]
pub fn use_verification_data() -> UseVerificationDataHandle {
    let state = use_state(LookupStore::default);

    let lookup = {
        let state = state.clone();
        Callback::from(move |input: LookupInput| {
            state.set(LookupStore {
                product: None,
                fetching: true,
                error: None,
            });

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = NewVerificationViewModel::new();
                let next = match vm.lookup(&input).await {
                    Ok(product) => LookupStore {
                        product,
                        fetching: false,
                        error: None,
                    },
                    Err(e) => {
                        log::error!("❌ [LOOKUP] {}", e);
                        LookupStore {
                            product: None,
                            fetching: false,
                            error: Some(e),
                        }
                    }
                };
                state.set(next);
            });
        })
    };

    let reset = {
        let state = state.clone();
        Callback::from(move |_: ()| state.set(LookupStore::default()))
    };

    UseVerificationDataHandle { state, lookup, reset }
}
