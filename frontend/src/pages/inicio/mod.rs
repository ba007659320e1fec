use leptos::*;

mod panel;
pub mod utils;

pub use panel::LoginPanel;

#[component]
pub fn InicioPage() -> impl IntoView {
    view! {
        <div class="container mt-4">
            <h1 class="mb-3">"Bienvenido a la Tienda"</h1>
            <p class="text-muted">"Inicia sesión para vender o administrar el catálogo."</p>
            <LoginPanel />
        </div>
    }
}
