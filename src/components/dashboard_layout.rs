use yew::prelude::*;
use crate::hooks::{use_navigation, Route};
use crate::models::User;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub user: User,
    pub on_logout: Callback<()>,
    pub children: Children,
}

/// Encabezado con el usuario y el contenido de la página
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let nav = use_navigation();
    let on_logout = props.on_logout.reform(|_: MouseEvent| ());
    let go_home = nav.navigate.reform(|_: MouseEvent| Route::Menu);

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <button class="brand" onclick={go_home} title={nav.route.title()}>
                    <span class="brand-icon">{"🛡️"}</span>
                    <span class="brand-text">
                        <strong>{"BIOFLEX"}</strong>
                        <small>{"Sistema de Verificación"}</small>
                    </span>
                </button>
                <div class="user-box">
                    <div class="user-info">
                        <p class="user-name">{props.user.name.clone()}</p>
                        <p class="user-role">{props.user.role.clone()}</p>
                    </div>
                    <button class="btn-icon" onclick={on_logout} title="Cerrar sesión">{"⎋"}</button>
                </div>
            </header>
            <main class="dashboard-main">
                {props.children.clone()}
            </main>
        </div>
    }
}
