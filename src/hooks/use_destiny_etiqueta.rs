use yew::prelude::*;
use crate::models::DestinySearch;
use crate::stores::DestinyLookupStore;
use crate::viewmodels::ScanViewModel;

#[derive(Clone, PartialEq)]
pub struct UseDestinyEtiquetaHandle {
    pub state: UseStateHandle<DestinyLookupStore>,
    pub lookup: Callback<DestinySearch>,
    pub reset: Callback<()>,
}

/// Etiqueta DESTINY sin enriquecer, para el modal de escaneo
#[hook]
pub fn use_destiny_etiqueta() -> UseDestinyEtiquetaHandle {
    let state = use_state(DestinyLookupStore::default);

    let lookup = {
        let state = state.clone();
        Callback::from(move |search: DestinySearch| {
            state.set(DestinyLookupStore {
                label: None,
                fetching: true,
                error: None,
            });

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = ScanViewModel::new();
                let next = match vm.lookup_destiny_box(&search).await {
                    Ok(label) => DestinyLookupStore {
                        label: Some(label),
                        fetching: false,
                        error: None,
                    },
                    Err(e) => DestinyLookupStore {
                        label: None,
                        fetching: false,
                        error: Some(e),
                    },
                };
                state.set(next);
            });
        })
    };

    let reset = {
        let state = state.clone();
        Callback::from(move |_: ()| state.set(DestinyLookupStore::default()))
    };

    UseDestinyEtiquetaHandle { state, lookup, reset }
}
