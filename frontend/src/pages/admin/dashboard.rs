use crate::{
    components::{navigation::use_base_path, product_list::ProductList, user_list::UserList},
    state::store::use_store,
};
use leptos::*;

pub const NO_RECENT_PRODUCTS: &str = "No hay productos recientes.";

/// Sidebar entries, relative to the base path. Some point at routes that do
/// not exist yet.
pub const ADMIN_SIDEBAR_LINKS: [(&str, &str); 5] = [
    ("/admin/dashboard", "Dashboard"),
    ("/ventas", "Productos"),
    ("/admin/orders", "Órdenes"),
    ("/admin/users", "Usuarios"),
    ("/admin/settings", "Ajustes"),
];

#[component]
pub fn AdminSidebar() -> impl IntoView {
    let base = use_base_path();
    view! {
        <aside class="admin-sidebar col-md-3 col-lg-2 bg-light p-3">
            <h4>"Panel de Admin"</h4>
            <ul class="nav flex-column">
                {ADMIN_SIDEBAR_LINKS
                    .iter()
                    .map(|(href, label)| view! {
                        <li class="nav-item">
                            <a class="nav-link" href=base.href(href)>{*label}</a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let store = use_store();
    let latest = store.latest_products();

    view! {
        <div class="admin-dashboard container-fluid">
            <div class="row">
                <AdminSidebar />
                <main class="col-md-9 col-lg-10 p-4">
                    <header class="mb-4">
                        <h2>"Bienvenido al Panel de Administración"</h2>
                    </header>
                    <section class="mb-4">
                        <h3>"Resumen de la actividad"</h3>
                        <p class="text-muted">"Aquí verás el resumen de ventas y actividad."</p>
                    </section>
                    <section class="mb-4">
                        <h3>"Productos recientes"</h3>
                        <Show
                            when=move || !latest.with(|products| products.is_empty())
                            fallback=|| view! { <p>{NO_RECENT_PRODUCTS}</p> }
                        >
                            <ProductList products=latest />
                        </Show>
                    </section>
                    <section class="mb-4">
                        <h3>"Órdenes recientes"</h3>
                        <p class="text-muted">"Aquí aparecerán las últimas órdenes."</p>
                    </section>
                    <section>
                        <h3>"Lista de Usuarios"</h3>
                        <UserList />
                    </section>
                </main>
            </div>
        </div>
    }
}
