use leptos::*;

use crate::state::store::{AppStore, StoreState};
use crate::test_support::helpers::{provide_test_app, provide_test_store, TestApp};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_view<F, N>(view: F) -> String
where
    F: FnOnce() -> N,
    N: IntoView,
{
    view().into_view().render_to_string().to_string()
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| render_view(view));
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Runs `f` inside a live runtime with a recording test app in context, so
/// the store can be written after views are built.
pub fn with_test_app<T>(token: Option<String>, base: &str, f: impl FnOnce(&TestApp) -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(|| {
        let app = provide_test_app(token, base);
        f(&app)
    });
    leptos_reactive::suppress_resource_load(false);
    result
}

/// Renders `view` with a test store in context, seeded before the view is
/// built.
pub fn render_with_store<S, F, N>(token: Option<String>, seed: S, view: F) -> String
where
    S: FnOnce(&mut StoreState) + 'static,
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        let store: AppStore = provide_test_store(token);
        store.seed(seed);
        view()
    })
}
