use leptos::{ev::Event, *};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-outline-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || format!("{} {}", variant.classes(), class)
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="spinner-border spinner-border-sm me-2" role="status"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Labelled input bound to a string signal.
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let on_input = move |ev: Event| value.set(event_target_value(&ev));
    view! {
        <div class="mb-3">
            <label for=id.clone() class="form-label">{label}</label>
            <input
                id=id
                class="form-control"
                type=input_type.unwrap_or_else(|| "text".to_string())
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=on_input
            />
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_label_and_type() {
        let html = render_to_string(move || {
            let value = create_rw_signal("ana@x.com".to_string());
            view! { <TextField id="email" label="Email" value=value input_type="email" /> }
        });
        assert!(html.contains("Email"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("id=\"email\""));
    }

    #[test]
    fn loading_button_shows_spinner() {
        let html = render_to_string(move || {
            view! { <Button loading=true>"Guardar"</Button> }
        });
        assert!(html.contains("spinner-border"));
        assert!(html.contains("Guardar"));
    }
}
