// ============================================================================
// USE AUTH HOOK - Sesión del inspector
// ============================================================================

use yew::prelude::*;
use crate::services::auth_service;
use crate::stores::AuthStore;

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthStore>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(AuthStore::default);

    // Restaurar sesión guardada al montar
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let user = auth_service::restore();
            if user.is_none() {
                log::info!("ℹ️ [AUTH] Sin sesión guardada");
            }
            state.set(AuthStore {
                user,
                restored: true,
                ..AuthStore::default()
            });
            || ()
        });
    }

    let login = {
        let state = state.clone();
        Callback::from(move |(identifier, password): (String, String)| {
            match auth_service::login(&identifier, &password) {
                Ok(user) => state.set(AuthStore {
                    user: Some(user),
                    restored: true,
                    loading: false,
                    error: None,
                }),
                Err(e) => {
                    let mut new_state = (*state).clone();
                    new_state.error = Some(e);
                    new_state.loading = false;
                    state.set(new_state);
                }
            }
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            auth_service::logout();
            state.set(AuthStore {
                restored: true,
                ..AuthStore::default()
            });
        })
    };

    UseAuthHandle { state, login, logout }
}
