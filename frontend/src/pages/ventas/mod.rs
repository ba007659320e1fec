use crate::{
    api::{ApiError, OrderCreated, OrderItemRequest, Product},
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::SuccessMessage,
        product_list::ProductCard,
    },
    state::store::use_store,
    utils::format::format_price,
};
use leptos::*;

pub mod cart;

use cart::{Cart, CartLine};

#[component]
pub fn VentasPage() -> impl IntoView {
    let store = use_store();
    let products = store.products();
    let cart = create_rw_signal(Cart::default());
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    {
        let store = store.clone();
        create_effect(move |_| store.get_products());
    }

    let order_action = create_action(move |items: &Vec<OrderItemRequest>| {
        let store = store.clone();
        let items = items.clone();
        async move { store.create_order(items).await }
    });
    let pending = order_action.pending();

    create_effect(move |_| {
        if let Some(result) = order_action.value().get() {
            match result {
                Ok(OrderCreated { order_id }) => {
                    cart.update(Cart::clear);
                    error.set(None);
                    success.set(Some(format!("Orden #{} creada", order_id)));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let add_to_cart = move |product: Product| {
        let mut added = false;
        cart.update(|cart| added = cart.add(&product));
        if !added {
            error.set(Some(ApiError::validation(format!(
                "No hay más stock de {}",
                product.name
            ))));
        }
    };

    let submit_order = move |_| {
        if pending.get_untracked() || cart.with_untracked(Cart::is_empty) {
            return;
        }
        success.set(None);
        order_action.dispatch(cart.with_untracked(Cart::order_items));
    };

    view! {
        <div class="container mt-4 ventas-page">
            <h1 class="mb-3">"Ventas"</h1>
            <InlineErrorMessage error=error />
            {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
            <div class="row">
                <div class="col-md-8">
                    <Show
                        when=move || !products.with(|products| products.is_empty())
                        fallback=|| view! { <EmptyState title="No hay productos disponibles" /> }
                    >
                        <div class="row row-cols-2 row-cols-lg-3 g-3">
                            <For
                                each=move || products.get()
                                key=|product| (product.id, product.stock)
                                children=move |product: Product| {
                                    let on_add = product.clone();
                                    view! {
                                        <div class="col">
                                            <ProductCard product=product>
                                                <button
                                                    class="btn btn-sm btn-outline-primary"
                                                    on:click=move |_| add_to_cart(on_add.clone())
                                                >
                                                    "Agregar"
                                                </button>
                                            </ProductCard>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>
                <div class="col-md-4">
                    <CartSummary cart=cart />
                    <button
                        class="btn btn-success w-100 mt-2"
                        disabled=move || pending.get() || cart.with(Cart::is_empty)
                        on:click=submit_order
                    >
                        {move || if pending.get() { "Enviando..." } else { "Confirmar venta" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CartSummary(cart: RwSignal<Cart>) -> impl IntoView {
    let lines = move || cart.with(|cart| cart.lines().to_vec());
    view! {
        <div class="card cart-summary">
            <div class="card-body">
                <h5 class="card-title">"Carrito"</h5>
                <Show
                    when=move || !cart.with(Cart::is_empty)
                    fallback=|| view! { <p class="text-muted">"El carrito está vacío"</p> }
                >
                    <table class="table table-sm">
                        <tbody>
                            <For
                                each=lines
                                key=|line| (line.product.id, line.quantity)
                                children=move |line: CartLine| {
                                    let id = line.product.id;
                                    view! {
                                        <tr>
                                            <td>{line.product.name.clone()}</td>
                                            <td>
                                                <input
                                                    type="number"
                                                    min="0"
                                                    max=line.product.stock
                                                    class="form-control form-control-sm"
                                                    prop:value=line.quantity.to_string()
                                                    on:change=move |ev| {
                                                        let quantity = event_target_value(&ev)
                                                            .parse::<i64>()
                                                            .unwrap_or(0);
                                                        cart.update(|cart| cart.set_quantity(id, quantity));
                                                    }
                                                />
                                            </td>
                                            <td>{format_price(line.line_total())}</td>
                                            <td>
                                                <button
                                                    class="btn btn-sm btn-link text-danger"
                                                    on:click=move |_| cart.update(|cart| cart.remove(id))
                                                >
                                                    "Quitar"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
                <p class="fw-bold mb-0 cart-total">
                    "Total: " {move || format_price(cart.with(Cart::total))}
                </p>
            </div>
        </div>
    }
}
