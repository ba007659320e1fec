use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        layout::{BackendUrlPrompt, Navbar, NotFound},
        navigation::{provide_navigation, use_base_path, BasePath, Navigator},
    },
    config::RuntimeConfig,
    pages::{
        AdminPage, DemoPage, InicioPage, OrdersPage, ProductoPage, RegisterPage, SalesReportPage,
        SinglePage, UsuariosPage, VentasPage,
    },
    state::{
        session::browser_token_storage,
        store::{provide_store, AppStore},
    },
};

pub const ROOT_REDIRECT: &str = "/inicio";

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/register",
    "/inicio",
    "/ventas",
    "/producto",
    "/salesreport",
    "/admin",
    "/admin/:orders",
    "/admin/usuarios",
    "/demo",
    "/single/:theid",
];

pub const FALLBACK_ROUTE: &str = "/*any";

pub fn root_redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

pub fn app_root(config: RuntimeConfig) -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Tienda" />
        <AppLayout config=config />
    }
}

/// Without a backend URL nothing below the prompt can work, so the router is
/// never mounted.
#[component]
pub fn AppLayout(config: RuntimeConfig) -> impl IntoView {
    let Some(api) = ApiClient::from_config(&config) else {
        return view! { <BackendUrlPrompt /> }.into_view();
    };
    provide_store(AppStore::new(api, browser_token_storage()));

    view! { <AppRouter basename=config.basename() /> }.into_view()
}

/// Routes match under `basename`; links and redirects get it prepended by
/// [`Navigator`].
#[component]
pub fn AppRouter(basename: String) -> impl IntoView {
    let base = BasePath::new(basename.clone());
    view! {
        <Router>
            <NavigationScope base=base>
                <Navbar />
                <main>
                    <Routes base=basename>
                        <Route path="/" view=RootRedirect />
                        <Route path="/register" view=RegisterPage />
                        <Route path="/inicio" view=InicioPage />
                        <Route path="/ventas" view=VentasPage />
                        <Route path="/producto" view=ProductoPage />
                        <Route path="/salesreport" view=SalesReportPage />
                        <Route path="/admin" view=AdminPage />
                        <Route path="/admin/:orders" view=OrdersPage />
                        <Route path="/admin/usuarios" view=UsuariosPage />
                        <Route path="/demo" view=DemoPage />
                        <Route path="/single/:theid" view=SinglePage />
                        <Route path=FALLBACK_ROUTE view=NotFound />
                    </Routes>
                </main>
            </NavigationScope>
        </Router>
    }
}

#[component]
fn NavigationScope(base: BasePath, children: Children) -> impl IntoView {
    provide_navigation(Navigator::from_router(base));
    children()
}

#[component]
fn RootRedirect() -> impl IntoView {
    let target = use_base_path().href(ROOT_REDIRECT);
    view! { <Redirect path=target options=root_redirect_options() /> }
}
