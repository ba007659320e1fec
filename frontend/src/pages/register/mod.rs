use crate::{
    api::ApiError,
    components::{
        common::{Button, TextField},
        error::InlineErrorMessage,
        navigation::use_navigator,
        layout::SuccessMessage,
    },
    state::store::use_store,
};
use leptos::{ev::SubmitEvent, *};

pub mod utils;

use utils::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = use_store();
    let navigator = use_navigator();
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let register_action = create_action(move |fields: &(String, String, String)| {
        let store = store.clone();
        let (name, email, password) = fields.clone();
        async move { store.register(name, email, password).await }
    });
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(message) => {
                    error.set(None);
                    success.set(Some(message));
                    navigator.redirect("/inicio");
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
        let fields = (
            name.get_untracked().trim().to_string(),
            email.get_untracked().trim().to_string(),
            password.get_untracked(),
        );
        if let Err(err) = validate_registration(&fields.0, &fields.1, &fields.2) {
            error.set(Some(err));
            return;
        }
        error.set(None);
        register_action.dispatch(fields);
    };

    view! {
        <div class="container mt-4">
            <h1 class="mb-3">"Crear cuenta"</h1>
            <form class="register-form card card-body" on:submit=on_submit>
                <InlineErrorMessage error=error />
                {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
                <TextField id="register-name" label="Nombre" value=name />
                <TextField id="register-email" label="Email" value=email input_type="email" />
                <TextField
                    id="register-password"
                    label="Contraseña"
                    value=password
                    input_type="password"
                />
                <Button loading=pending attr:type="submit">"Registrarme"</Button>
            </form>
        </div>
    }
}
