// ============================================================================
// AUTH CONTEXT - Compartir la sesión entre páginas
// ============================================================================

use yew::prelude::*;
use crate::hooks::use_auth::{use_auth, UseAuthHandle};

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y expone `UseAuthHandle`
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let auth = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={auth}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

/// Handle del provider; `None` fuera de `AuthContextProvider`
#[hook]
pub fn use_auth_context() -> Option<UseAuthHandle> {
    use_context::<UseAuthHandle>()
}
