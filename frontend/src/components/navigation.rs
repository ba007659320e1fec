//! In-app navigation under the configured base path.
//!
//! Every link and redirect goes through [`BasePath::href`], so pages can keep
//! writing `/ventas` while the app is served from `/tienda/ventas`.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Expects an already normalized base (`""` or `/x`).
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

#[derive(Clone)]
pub struct Navigator {
    base: BasePath,
    go: Rc<dyn Fn(&str)>,
}

impl Navigator {
    /// `go` receives the full href, base path included.
    pub fn new(base: BasePath, go: impl Fn(&str) + 'static) -> Self {
        Self {
            base,
            go: Rc::new(go),
        }
    }

    /// Must be created under `<Router/>`.
    pub fn from_router(base: BasePath) -> Self {
        let navigate = use_navigate();
        Self::new(base, move |href| {
            navigate(
                href,
                NavigateOptions {
                    resolve: false,
                    ..Default::default()
                },
            )
        })
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn redirect(&self, path: &str) {
        let href = self.base.href(path);
        log::debug!("navigating to {}", href);
        (self.go)(&href);
    }
}

pub fn provide_navigation(navigator: Navigator) {
    provide_context(navigator.base().clone());
    provide_context(navigator);
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

/// Empty outside a mounted app.
pub fn use_base_path() -> BasePath {
    use_context::<BasePath>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn href_prefixes_base() {
        assert_eq!(BasePath::default().href("/ventas"), "/ventas");
        assert_eq!(BasePath::new("/tienda").href("/ventas"), "/tienda/ventas");
    }

    #[test]
    fn redirect_hands_full_href_to_router() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let navigator = {
            let seen = seen.clone();
            Navigator::new(BasePath::new("/tienda"), move |href| {
                seen.borrow_mut().push(href.to_string())
            })
        };
        navigator.redirect("/inicio");
        assert_eq!(*seen.borrow(), vec!["/tienda/inicio".to_string()]);
    }
}
