use crate::api::ApiError;
use leptos::*;

fn hint_for(code: &str) -> Option<&'static str> {
    match code {
        "UNAUTHORIZED" => Some("Tu sesión no es válida. Inicia sesión de nuevo."),
        "FORBIDDEN" => Some("No tienes permisos para esta acción."),
        "REQUEST_FAILED" => Some("No se pudo contactar con el servidor."),
        _ => None,
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="alert alert-danger" role="alert">
                <div class="fw-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .and_then(|e| hint_for(&e.code))
                        .map(|hint| view! { <div class="small">{hint}</div> })
                }}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::hint_for;

    #[test]
    fn hints_only_for_known_codes() {
        assert!(hint_for("UNAUTHORIZED").is_some());
        assert!(hint_for("FORBIDDEN").is_some());
        assert!(hint_for("VALIDATION_ERROR").is_none());
    }
}
