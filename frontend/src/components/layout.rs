use crate::{
    components::navigation::use_base_path,
    state::store::use_store,
    utils::{storage, token::ADMIN_ROLE},
};
use leptos::*;

/// Full page load; `href` already carries the base path.
pub fn hard_redirect(href: &str) {
    if let Ok(window) = storage::window() {
        let _ = window.location().set_href(href);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_store();
    let base = use_base_path();
    let token = store.token();
    let role = store.role();
    let is_admin = move || role.get().as_deref() == Some(ADMIN_ROLE);
    let logged_in = move || token.get().is_some();

    let after_logout = base.href("/inicio");
    let on_logout = Callback::new(move |_: ev::MouseEvent| {
        store.logout();
        hard_redirect(&after_logout);
    });
    let admin_links = store_value(base.clone());
    let register_href = base.href("/register");

    view! {
        <nav class="navbar navbar-light bg-light mb-3">
            <div class="container">
                <a href=base.href("/inicio") class="navbar-brand">"Tienda"</a>
                <div class="d-flex gap-3 align-items-center">
                    <a href=base.href("/ventas") class="nav-link">"Ventas"</a>
                    <Show when=is_admin>
                        {admin_links.with_value(|base| view! {
                            <a href=base.href("/admin") class="nav-link">"Admin"</a>
                            <a href=base.href("/producto") class="nav-link">"Nuevo producto"</a>
                            <a href=base.href("/salesreport") class="nav-link">"Reporte"</a>
                        })}
                    </Show>
                    <Show
                        when=logged_in
                        fallback=move || {
                            let href = register_href.clone();
                            view! { <a href=href class="nav-link">"Registro"</a> }
                        }
                    >
                        <button class="btn btn-outline-danger btn-sm" on:click=move |ev| on_logout.call(ev)>
                            "Cerrar sesión"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn BackendUrlPrompt() -> impl IntoView {
    view! {
        <div class="container mt-5 backend-url-prompt">
            <h1>"Falta la URL del backend"</h1>
            <p>
                "La aplicación no sabe dónde está la API. Define la variable "
                <code>"BACKEND_URL"</code>
                " y vuelve a cargar la página."
            </p>
            <ol>
                <li>"En " <code>"env.js"</code> ": " <code>"window.__TIENDA_ENV = { BACKEND_URL: \"https://...\" }"</code></li>
                <li>"O en " <code>"config.json"</code> ": " <code>"{ \"backend_url\": \"https://...\" }"</code></li>
                <li>"O al compilar: " <code>"BACKEND_URL=https://... trunk build"</code></li>
            </ol>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! { <h1>"Not found!"</h1> }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert-success" role="status">{message}</div>
    }
}
