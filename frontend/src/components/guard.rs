//! UI-only route guards. They decide what to render and where to send the
//! user, but the backend still authorizes every privileged request.

use crate::{
    components::navigation::use_navigator,
    state::store::use_store,
    utils::token::decode_claims,
};
use leptos::*;

pub const DENIED_REDIRECT: &str = "/ventas";
pub const LATEST_PRODUCTS_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Unchecked,
    Checking,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    Redirect(&'static str),
    FetchLatestProducts(usize),
}

/// Admin page check. Runs once per mount; later token changes are ignored.
#[derive(Debug, Default)]
pub struct AdminAccessGuard {
    state: GuardState,
}

impl AdminAccessGuard {
    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn check(&mut self, token: Option<&str>) -> Option<GuardAction> {
        if self.state != GuardState::Unchecked {
            return None;
        }
        self.state = GuardState::Checking;
        if token.is_some_and(token_grants_admin) {
            self.state = GuardState::Granted;
            Some(GuardAction::FetchLatestProducts(LATEST_PRODUCTS_COUNT))
        } else {
            self.state = GuardState::Denied;
            Some(GuardAction::Redirect(DENIED_REDIRECT))
        }
    }
}

fn token_grants_admin(token: &str) -> bool {
    match decode_claims(token) {
        Ok(claims) => claims.is_admin(),
        Err(err) => {
            // treated like a missing token
            log::warn!("ignoring malformed session token: {}", err);
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserListAction {
    Redirect(&'static str),
    FetchUsers,
}

pub fn user_list_action(token: Option<&str>) -> UserListAction {
    match token {
        Some(token) if !token.trim().is_empty() => UserListAction::FetchUsers,
        _ => UserListAction::Redirect(DENIED_REDIRECT),
    }
}

#[component]
pub fn RequireAdminToken(children: ChildrenFn) -> impl IntoView {
    let store = use_store();
    let navigator = use_navigator();
    let mut guard = AdminAccessGuard::default();
    let action = guard.check(store.persisted_token().as_deref());
    let state = guard.state();

    // reads no signals, so it runs exactly once
    create_isomorphic_effect(move |_| match action {
        Some(GuardAction::Redirect(path)) => navigator.redirect(path),
        Some(GuardAction::FetchLatestProducts(count)) => store.get_latest_products(count),
        None => {}
    });

    view! {
        <Show when=move || state == GuardState::Granted>
            {children()}
        </Show>
    }
}
