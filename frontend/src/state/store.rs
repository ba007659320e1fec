//! Application-wide state shared by every page.
//!
//! Components read through the signal accessors and change state only via the
//! actions below. Dispatch helpers (`get_users`, `get_latest_products`, ...)
//! spawn the request and return immediately; nothing awaits or cancels them.

use leptos::*;
use std::{future::Future, pin::Pin, rc::Rc};

use crate::{
    api::{
        ApiClient, ApiError, CreateOrderRequest, LoginRequest, NewProduct, Order, OrderCreated,
        OrderItemRequest, Product, ProductCreated, RegisterRequest, UserRecord,
    },
    state::session::SharedTokenStorage,
    utils::token::decode_claims,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub token: Option<String>,
    pub role: Option<String>,
    pub users: Vec<UserRecord>,
    pub products: Vec<Product>,
    pub latest_products: Vec<Product>,
    pub orders: Vec<Order>,
}

pub type PendingAction = Pin<Box<dyn Future<Output = Result<(), ApiError>>>>;

/// Drives dispatched actions to completion.
pub trait ActionRunner {
    fn run(&self, name: &'static str, action: PendingAction);
}

/// Spawns on the local executor and logs failures; results land in the store.
pub struct SpawnLocalRunner;

impl ActionRunner for SpawnLocalRunner {
    fn run(&self, name: &'static str, action: PendingAction) {
        spawn_local(async move {
            if let Err(err) = action.await {
                log::warn!("{} failed: {} ({})", name, err, err.code);
            }
        });
    }
}

#[derive(Clone)]
pub struct AppStore {
    state: RwSignal<StoreState>,
    token: Memo<Option<String>>,
    role: Memo<Option<String>>,
    api: Rc<ApiClient>,
    tokens: SharedTokenStorage,
    runner: Rc<dyn ActionRunner>,
}

fn role_from_token(token: &str) -> Option<String> {
    decode_claims(token).ok().and_then(|claims| claims.role)
}

/// Keeps the `count` products with the highest ids, newest first.
pub fn latest_products(mut products: Vec<Product>, count: usize) -> Vec<Product> {
    products.sort_by(|a, b| b.id.cmp(&a.id));
    products.truncate(count);
    products
}

impl AppStore {
    pub fn new(api: ApiClient, tokens: SharedTokenStorage) -> Self {
        let token = tokens.load();
        let role = token.as_deref().and_then(role_from_token);
        let state = create_rw_signal(StoreState {
            token,
            role,
            ..StoreState::default()
        });
        Self {
            state,
            // memoized so readers are not woken by writes to other fields
            token: create_memo(move |_| state.with(|s| s.token.clone())),
            role: create_memo(move |_| state.with(|s| s.role.clone())),
            api: Rc::new(api),
            tokens,
            runner: Rc::new(SpawnLocalRunner),
        }
    }

    pub fn with_runner(mut self, runner: Rc<dyn ActionRunner>) -> Self {
        self.runner = runner;
        self
    }

    #[cfg(test)]
    pub(crate) fn seed(&self, f: impl FnOnce(&mut StoreState)) {
        self.state.update(f);
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.get_untracked()
    }

    pub fn token(&self) -> Signal<Option<String>> {
        self.token.into()
    }

    pub fn role(&self) -> Signal<Option<String>> {
        self.role.into()
    }

    pub fn users(&self) -> Signal<Vec<UserRecord>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.users.clone()))
    }

    pub fn products(&self) -> Signal<Vec<Product>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.products.clone()))
    }

    pub fn latest_products(&self) -> Signal<Vec<Product>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.latest_products.clone()))
    }

    pub fn orders(&self) -> Signal<Vec<Order>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.orders.clone()))
    }

    /// The persisted token, read straight from storage rather than the store.
    pub fn persisted_token(&self) -> Option<String> {
        self.tokens.load()
    }

    fn require_token(&self) -> Result<String, ApiError> {
        self.state
            .with_untracked(|s| s.token.clone())
            .ok_or_else(|| ApiError::unauthorized("No hay una sesión activa"))
    }

    pub async fn login(&self, email: String, password: String) -> Result<Option<String>, ApiError> {
        let response = self.api.login(&LoginRequest { email, password }).await?;
        self.tokens.save(&response.token);
        let role = response
            .role
            .clone()
            .or_else(|| role_from_token(&response.token));
        self.state.update(|s| {
            s.token = Some(response.token);
            s.role = role.clone();
        });
        log::info!("session started");
        Ok(role)
    }

    pub fn logout(&self) {
        self.tokens.clear();
        self.state.update(|s| {
            s.token = None;
            s.role = None;
            s.users.clear();
            s.orders.clear();
        });
        log::info!("session closed");
    }

    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<String, ApiError> {
        self.api
            .register(&RegisterRequest {
                name,
                email,
                password,
                role: None,
            })
            .await
    }

    pub async fn fetch_users(&self) -> Result<(), ApiError> {
        let token = self.require_token()?;
        let users = self.api.get_users(&token).await?;
        self.state.update(|s| s.users = users);
        Ok(())
    }

    pub async fn fetch_products(&self) -> Result<(), ApiError> {
        let products = self.api.get_products().await?;
        self.state.update(|s| s.products = products);
        Ok(())
    }

    pub async fn fetch_latest_products(&self, count: usize) -> Result<(), ApiError> {
        let products = self.api.get_products().await?;
        let latest = latest_products(products, count);
        self.state.update(|s| s.latest_products = latest);
        Ok(())
    }

    pub async fn fetch_orders(&self) -> Result<(), ApiError> {
        let token = self.require_token()?;
        let orders = self.api.get_orders(&token).await?;
        self.state.update(|s| s.orders = orders);
        Ok(())
    }

    pub async fn create_product(&self, product: NewProduct) -> Result<ProductCreated, ApiError> {
        let token = self.require_token()?;
        let created = self.api.create_product(&token, &product).await?;
        log::info!("product {} created", created.product_id);
        Ok(created)
    }

    pub async fn create_order(
        &self,
        items: Vec<OrderItemRequest>,
    ) -> Result<OrderCreated, ApiError> {
        let token = self.require_token()?;
        let created = self
            .api
            .create_order(&token, &CreateOrderRequest { items })
            .await?;
        log::info!("order {} created", created.order_id);
        // stock changed server-side
        if let Err(err) = self.fetch_products().await {
            log::warn!("failed to refresh products after order: {}", err);
        }
        Ok(created)
    }

    fn dispatch<F, Fut>(&self, name: &'static str, action: F)
    where
        F: FnOnce(AppStore) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let store = self.clone();
        self.runner.run(name, Box::pin(async move { action(store).await }));
    }

    pub fn get_users(&self) {
        self.dispatch("get_users", |store| async move { store.fetch_users().await });
    }

    pub fn get_products(&self) {
        self.dispatch("get_products", |store| async move {
            store.fetch_products().await
        });
    }

    pub fn get_latest_products(&self, count: usize) {
        self.dispatch("get_latest_products", move |store| async move {
            store.fetch_latest_products(count).await
        });
    }

    pub fn get_orders(&self) {
        self.dispatch("get_orders", |store| async move { store.fetch_orders().await });
    }
}

pub fn provide_store(store: AppStore) {
    provide_context(store);
}

pub fn use_store() -> AppStore {
    expect_context::<AppStore>()
}
