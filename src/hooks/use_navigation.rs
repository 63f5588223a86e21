// ============================================================================
// USE NAVIGATION - Navegación por estado (sin router)
// ============================================================================

use yew::prelude::*;

/// Páginas del panel (el login se decide aparte según la sesión)
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Route {
    Menu,
    Pending,
    NewVerification,
    Detail(i64),
}

impl Route {
    pub fn title(&self) -> String {
        match self {
            Route::Menu => "Panel principal".to_string(),
            Route::Pending => "Verificaciones Pendientes".to_string(),
            Route::NewVerification => "Nueva Verificación".to_string(),
            Route::Detail(id) => format!("Verificación #{}", id),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Menu
    }
}

#[derive(Clone, PartialEq)]
pub struct NavigationHandle {
    pub route: Route,
    pub navigate: Callback<Route>,
}

/// Crea el estado de navegación (solo en el shell de la app)
#[hook]
pub fn use_navigation_state() -> NavigationHandle {
    let route = use_state(Route::default);
    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            log::info!("🧭 [NAV] {:?}", next);
            route.set(next);
        })
    };

    NavigationHandle {
        route: (*route).clone(),
        navigate,
    }
}

/// Navegación compartida por el shell vía contexto
#[hook]
pub fn use_navigation() -> NavigationHandle {
    use_context::<NavigationHandle>().unwrap_or_else(|| {
        log::warn!("⚠️ [NAV] use_navigation fuera del provider");
        NavigationHandle {
            route: Route::default(),
            navigate: Callback::noop(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_name_the_page() {
        assert_eq!(Route::default(), Route::Menu);
        assert_eq!(Route::Detail(12).title(), "Verificación #12");
        assert_eq!(Route::Pending.title(), "Verificaciones Pendientes");
    }
}
