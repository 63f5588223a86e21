// ============================================================================
// USE DASHBOARD - Dashboard de una verificación + tarimas
// ============================================================================

use yew::prelude::*;
use crate::stores::DashboardStore;
use crate::viewmodels::VerificationViewModel;

#[derive(Clone, PartialEq)]
pub struct UseDashboardHandle {
    pub state: UseStateHandle<DashboardStore>,
    pub refresh: Callback<()>,
}

/// Carga al montar y cada vez que cambia el id
#[hook]
pub fn use_dashboard(verificacion_id: i64) -> UseDashboardHandle {
    let state = use_state(|| DashboardStore {
        loading: true,
        ..DashboardStore::default()
    });

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
                let mut next = DashboardStore::default();

                match vm.load_dashboard(verificacion_id).await {
                    Ok(dashboard) => next.dashboard = Some(dashboard),
                    Err(e) => {
                        log::error!("❌ [DASHBOARD] {}", e);
                        next.error = Some(e);
                    }
                }

                // Las tarimas no bloquean el dashboard si fallan
                if next.dashboard.is_some() {
                    match vm.load_pallets(verificacion_id).await {
                        Ok((active, finished)) => {
                            next.active_pallets = active;
                            next.finished_pallets = finished;
                        }
                        Err(e) => {
                            log::warn!("⚠️ [DASHBOARD] Tarimas no disponibles: {}", e);
                            next.pallets_error = Some(e);
                        }
                    }
                }

                state.set(next);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with(verificacion_id, move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseDashboardHandle { state, refresh }
}
