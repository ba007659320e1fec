use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state text-center py-5 border rounded">
            <h3 class="h6">{title}</h3>
            {description.map(|desc| view! { <p class="text-muted small mb-0">{desc}</p> })}
        </div>
    }
}
