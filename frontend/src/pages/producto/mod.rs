use crate::{
    api::{ApiError, NewProduct},
    components::{
        common::{Button, TextField},
        error::InlineErrorMessage,
        layout::SuccessMessage,
    },
    state::store::use_store,
    utils::token::ADMIN_ROLE,
};
use leptos::{ev::SubmitEvent, *};

pub mod utils;

use utils::parse_new_product;

/// Only rendered for admin sessions; the backend checks the role again.
#[component]
pub fn ProductoPage() -> impl IntoView {
    let role = use_store().role();
    view! {
        <div class="container mt-4">
            <h1 class="mb-3">"Nuevo producto"</h1>
            <Show
                when=move || role.get().as_deref() == Some(ADMIN_ROLE)
                fallback=|| view! {
                    <p class="alert alert-warning">"Solo un administrador puede agregar productos."</p>
                }
            >
                <ProductForm />
            </Show>
        </div>
    }
}

#[component]
fn ProductForm() -> impl IntoView {
    let store = use_store();
    let name = create_rw_signal(String::new());
    let price = create_rw_signal(String::new());
    let stock = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let create = create_action(move |product: &NewProduct| {
        let store = store.clone();
        let product = product.clone();
        async move { store.create_product(product).await }
    });
    let pending = create.pending();

    create_effect(move |_| {
        if let Some(result) = create.value().get() {
            match result {
                Ok(created) => {
                    error.set(None);
                    name.set(String::new());
                    price.set(String::new());
                    stock.set(String::new());
                    success.set(Some(format!("Producto #{} creado", created.product_id)));
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
        success.set(None);
        match parse_new_product(
            &name.get_untracked(),
            &price.get_untracked(),
            &stock.get_untracked(),
        ) {
            Ok(product) => {
                error.set(None);
                create.dispatch(product);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <form class="product-form card card-body" on:submit=on_submit>
            <InlineErrorMessage error=error />
            {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
            <TextField id="product-name" label="Nombre" value=name />
            <TextField id="product-price" label="Precio" value=price input_type="number" />
            <TextField id="product-stock" label="Stock" value=stock input_type="number" />
            <Button loading=pending attr:type="submit">"Guardar producto"</Button>
        </form>
    }
}
