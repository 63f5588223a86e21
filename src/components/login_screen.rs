use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::models::DEMO_USERS;
use crate::services::auth_service::{search_users, MSG_SELECT_USER};

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<(String, String)>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let selected_user_id = use_state(String::new);
    let password = use_state(String::new);
    let query = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    let on_query_change = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let selected_user_id = selected_user_id.clone();
        let password = password.clone();
        let local_error = local_error.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if selected_user_id.is_empty() {
                local_error.set(Some(MSG_SELECT_USER.to_string()));
                return;
            }
            local_error.set(None);
            on_login.emit(((*selected_user_id).clone(), (*password).clone()));
        })
    };

    let users = search_users(DEMO_USERS, &query);
    let error = (*local_error).clone().or_else(|| props.error.clone());

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🛡️"}</div>
                    </div>
                    <h1>{"BIOFLEX"}</h1>
                    <p>{"Sistema de Verificación de Productos"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="usuario-buscar">{"Usuario"}</label>
                        <input
                            type="search"
                            id="usuario-buscar"
                            placeholder="Buscar por nombre o nómina..."
                            value={(*query).clone()}
                            oninput={on_query_change}
                        />
                        <ul class="user-list">
                            { if users.is_empty() {
                                html! { <li class="user-empty">{"No se encontraron usuarios."}</li> }
                            } else {
                                users.iter().map(|user| {
                                    let id = user.id.to_string();
                                    let is_selected = *selected_user_id == id;
                                    let onclick = {
                                        let selected_user_id = selected_user_id.clone();
                                        let id = id.clone();
                                        Callback::from(move |_: MouseEvent| selected_user_id.set(id.clone()))
                                    };
                                    html! {
                                        <li key={id.clone()}>
                                            <button
                                                type="button"
                                                class={classes!("user-option", is_selected.then_some("selected"))}
                                                {onclick}
                                            >
                                                <span class="check">{ if is_selected { "✓" } else { "" } }</span>
                                                <span>{user.name}</span>
                                            </button>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }}
                        </ul>
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña (nómina)"}</label>
                        <input
                            type="password"
                            id="password"
                            inputmode="numeric"
                            placeholder="Ej. 2469"
                            value={(*password).clone()}
                            oninput={on_password_change}
                            required=true
                        />
                    </div>

                    if let Some(error) = error {
                        <div class="form-error">{error}</div>
                    }

                    <button type="submit" class="btn-login">
                        <span class="btn-text">{"Iniciar Sesión"}</span>
                    </button>
                </form>

                <p class="login-footer">{"Sistema de verificación de calidad BIOFLEX"}</p>
            </div>
        </div>
    }
}
