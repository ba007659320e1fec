use super::utils::{login_destination, validate_credentials};
use crate::{
    api::ApiError,
    components::{
        common::{Button, TextField},
        error::InlineErrorMessage,
        navigation::{use_base_path, use_navigator},
    },
    state::store::use_store,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let store = use_store();
    let navigator = use_navigator();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let login_action = create_action(move |(email, password): &(String, String)| {
        let store = store.clone();
        let (email, password) = (email.clone(), password.clone());
        async move { store.login(email, password).await }
    });
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(role) => {
                    error.set(None);
                    password.set(String::new());
                    navigator.redirect(login_destination(role.as_deref()));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let (email, password) = (email.get_untracked(), password.get_untracked());
        if let Err(err) = validate_credentials(&email, &password) {
            error.set(Some(err));
            return;
        }
        error.set(None);
        login_action.dispatch((email.trim().to_string(), password));
    };

    view! {
        <form class="login-form card card-body" on:submit=on_submit>
            <InlineErrorMessage error=error />
            <TextField id="login-email" label="Email" value=email input_type="email" />
            <TextField id="login-password" label="Contraseña" value=password input_type="password" />
            <Button loading=pending attr:type="submit">"Ingresar"</Button>
            <p class="mt-3 mb-0">
                "¿No tienes cuenta? " <a href=use_base_path().href("/register")>"Regístrate"</a>
            </p>
        </form>
    }
}
