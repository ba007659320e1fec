use crate::{
    api::Order,
    components::empty_state::EmptyState,
    state::store::use_store,
    utils::format::{format_order_date, format_price},
};
use leptos::*;
use leptos_router::use_params_map;

pub mod utils;

use utils::total_revenue;

#[component]
pub fn SalesReportPage() -> impl IntoView {
    view! {
        <div class="container mt-4">
            <h1 class="mb-3">"Reporte de ventas"</h1>
            <OrdersTable />
        </div>
    }
}

/// Mounted at `/admin/:orders`.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let params = use_params_map();
    let section = move || params.with(|params| params.get("orders").cloned().unwrap_or_default());
    view! {
        <div class="container mt-4">
            <h1 class="mb-3">"Órdenes"</h1>
            <p class="text-muted small">{move || format!("Sección: {}", section())}</p>
            <OrdersTable />
        </div>
    }
}

#[component]
pub fn OrdersTable() -> impl IntoView {
    let store = use_store();
    let token = store.token();
    let orders = store.orders();

    // tracks only the token memo; the fetched orders do not re-trigger it
    create_isomorphic_effect(move |_| {
        if token.get().is_some() {
            store.get_orders();
        }
    });

    view! {
        <Show
            when=move || !orders.with(|orders| orders.is_empty())
            fallback=|| view! { <EmptyState title="No hay órdenes registradas" /> }
        >
            <table class="table orders-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Fecha"</th>
                        <th>"Vendedor"</th>
                        <th>"Artículos"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get()
                        key=|order| order.id
                        children=move |order: Order| {
                            view! {
                                <tr>
                                    <td>{order.id}</td>
                                    <td>{format_order_date(&order.created_at)}</td>
                                    <td>{order.seller.name.clone()}</td>
                                    <td>{order.item_count()}</td>
                                    <td>{format_price(order.total_price)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <p class="fw-bold revenue-total">
                "Total vendido: " {move || orders.with(|orders| format_price(total_revenue(orders)))}
            </p>
        </Show>
    }
}
