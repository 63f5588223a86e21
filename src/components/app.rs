// ============================================================================
// APP - Shell de la aplicación (sesión + navegación por estado)
// ============================================================================

use yew::prelude::*;
use crate::hooks::{use_auth_context, use_navigation_state, AuthContextProvider, NavigationHandle, Route};
use super::{DashboardLayout, DashboardMenu, LoginScreen, NewVerificationForm, PendingVerifications, VerificationDetail};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthContextProvider>
            <AppShell />
        </AuthContextProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let auth = use_auth_context();
    let nav = use_navigation_state();

    let Some(auth) = auth else {
        log::error!("❌ [APP] AppShell sin AuthContextProvider");
        return html! {};
    };

    if !auth.state.restored {
        return html! {
            <div class="loading-screen">{"Cargando..."}</div>
        };
    }

    // Sin sesión siempre se ve el login
    let Some(user) = auth.state.user.clone() else {
        return html! {
            <LoginScreen on_login={auth.login.clone()} error={auth.state.error.clone()} />
        };
    };

    let on_logout = {
        let logout = auth.logout.clone();
        let navigate = nav.navigate.clone();
        Callback::from(move |_: ()| {
            logout.emit(());
            navigate.emit(Route::Menu);
        })
    };

    let page = match &nav.route {
        Route::Menu => html! { <DashboardMenu /> },
        Route::Pending => html! { <PendingVerifications /> },
        Route::NewVerification => html! { <NewVerificationForm /> },
        Route::Detail(id) => html! { <VerificationDetail key={*id} verificacion_id={*id} /> },
    };

    html! {
        <ContextProvider<NavigationHandle> context={nav.clone()}>
            <DashboardLayout user={user} on_logout={on_logout}>
                {page}
            </DashboardLayout>
        </ContextProvider<NavigationHandle>>
    }
}
