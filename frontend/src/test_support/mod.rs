#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Product, UserRecord};
    use crate::components::navigation::{provide_navigation, BasePath, Navigator};
    use crate::state::{
        session::MemoryTokenStorage,
        store::{provide_store, ActionRunner, AppStore, PendingAction},
    };
    use std::{cell::RefCell, rc::Rc};

    /// Backend address nothing listens on. Dispatched actions are recorded and
    /// dropped, so no request leaves a render test.
    pub const TEST_API: &str = "http://127.0.0.1:9/api";

    #[derive(Default)]
    pub struct RecordingRunner {
        names: RefCell<Vec<&'static str>>,
    }

    impl ActionRunner for RecordingRunner {
        fn run(&self, name: &'static str, _action: PendingAction) {
            self.names.borrow_mut().push(name);
        }
    }

    /// Store plus the side effects views triggered through it.
    pub struct TestApp {
        pub store: AppStore,
        runner: Rc<RecordingRunner>,
        navigations: Rc<RefCell<Vec<String>>>,
    }

    impl TestApp {
        pub fn dispatched(&self) -> Vec<&'static str> {
            self.runner.names.borrow().clone()
        }

        pub fn navigations(&self) -> Vec<String> {
            self.navigations.borrow().clone()
        }
    }

    pub fn provide_test_app(token: Option<String>, base: &str) -> TestApp {
        let tokens = match token {
            Some(token) => MemoryTokenStorage::with_token(token),
            None => MemoryTokenStorage::default(),
        };
        let runner = Rc::new(RecordingRunner::default());
        let store = AppStore::new(ApiClient::new_with_base_url(TEST_API), Rc::new(tokens))
            .with_runner(runner.clone());
        provide_store(store.clone());

        let navigations = Rc::new(RefCell::new(Vec::new()));
        let seen = navigations.clone();
        provide_navigation(Navigator::new(BasePath::new(base), move |href| {
            seen.borrow_mut().push(href.to_string())
        }));

        TestApp {
            store,
            runner,
            navigations,
        }
    }

    pub fn provide_test_store(token: Option<String>) -> AppStore {
        provide_test_app(token, "").store
    }

    pub fn user(id: i64, name: &str, email: &str, role: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
        Product {
            id,
            name: name.into(),
            price,
            stock,
            image: None,
        }
    }

    /// Text content of every `<td>` in document order, markup stripped.
    pub fn cell_texts(html: &str) -> Vec<String> {
        html.split("<td")
            .skip(1)
            .map(|chunk| {
                let body = chunk.split_once('>').map(|(_, rest)| rest).unwrap_or("");
                let body = body.split("</td>").next().unwrap_or("");
                strip_markup(body)
            })
            .collect()
    }

    pub fn strip_markup(html: &str) -> String {
        let mut out = String::new();
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        decode_entities(out.trim())
    }

    /// Undoes the escaping SSR applies to text nodes.
    pub fn decode_entities(text: &str) -> String {
        [
            ("&#x2F;", "/"),
            ("&#x27;", "'"),
            ("&quot;", "\""),
            ("&lt;", "<"),
            ("&gt;", ">"),
            ("&amp;", "&"),
        ]
        .iter()
        .fold(text.to_string(), |acc, (entity, raw)| acc.replace(entity, raw))
    }
}
