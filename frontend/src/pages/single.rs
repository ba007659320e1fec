use crate::components::navigation::use_base_path;
use leptos::*;
use leptos_router::use_params_map;

pub fn single_heading(id: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() => format!("Elemento {}", id),
        _ => "Elemento desconocido".to_string(),
    }
}

#[component]
pub fn SinglePage() -> impl IntoView {
    let params = use_params_map();
    let heading = move || params.with(|params| single_heading(params.get("theid").map(String::as_str)));
    let back = use_base_path().href("/demo");
    view! {
        <div class="container mt-4">
            <h1>{heading}</h1>
            <a href=back class="btn btn-primary">"Volver"</a>
        </div>
    }
}
