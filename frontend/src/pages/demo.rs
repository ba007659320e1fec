use crate::components::navigation::use_base_path;
use leptos::*;

const DEMO_ITEMS: [(u32, &str); 3] = [(1, "Primero"), (2, "Segundo"), (3, "Tercero")];

#[component]
pub fn DemoPage() -> impl IntoView {
    let base = use_base_path();
    view! {
        <div class="container mt-4">
            <h1>"Demo"</h1>
            <ul class="list-group">
                {DEMO_ITEMS
                    .iter()
                    .map(|(id, label)| view! {
                        <li class="list-group-item d-flex justify-content-between">
                            <span>{*label}</span>
                            <a href=base.href(&format!("/single/{}", id))>"Ver"</a>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <a href=base.href("/inicio") class="btn btn-primary mt-3">"Volver al inicio"</a>
        </div>
    }
}
