use crate::{
    api::UserRecord,
    components::{
        guard::{user_list_action, UserListAction},
        navigation::use_navigator,
    },
    state::store::use_store,
};
use leptos::*;

pub const EMPTY_USERS_MESSAGE: &str = "No hay usuarios disponibles";

/// Renders straight from the store; a failed fetch keeps whatever was there.
#[component]
pub fn UserList() -> impl IntoView {
    let store = use_store();
    let navigator = use_navigator();
    let token = store.token();
    let users = store.users();

    // tracks only the token memo; user writes do not re-trigger the fetch
    create_isomorphic_effect(move |_| match user_list_action(token.get().as_deref()) {
        UserListAction::Redirect(path) => navigator.redirect(path),
        UserListAction::FetchUsers => store.get_users(),
    });

    view! {
        <div class="user-list-container">
            <table class="user-list-table table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Nombre"</th>
                        <th>"Email"</th>
                        <th>"Rol"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !users.with(|users| users.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="4">{EMPTY_USERS_MESSAGE}</td>
                            </tr>
                        }
                    >
                        <For
                            each=move || users.get()
                            key=|user| user.id
                            children=move |user: UserRecord| {
                                view! {
                                    <tr>
                                        <td>{user.id}</td>
                                        <td>{user.name}</td>
                                        <td>{user.email}</td>
                                        <td>{user.role}</td>
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{cell_texts, user};
    use crate::test_support::ssr::{render_view, render_with_store, with_test_app};

    fn body_rows(html: &str) -> usize {
        html.split("<tbody")
            .nth(1)
            .map(|body| body.matches("<tr").count())
            .unwrap_or(0)
    }

    #[test]
    fn empty_store_renders_single_spanning_row() {
        let html = render_with_store(Some("t.o.k".into()), |_| {}, || view! { <UserList /> });
        assert_eq!(body_rows(&html), 1);
        assert_eq!(cell_texts(&html), vec![EMPTY_USERS_MESSAGE.to_string()]);
        assert!(html.contains("colspan=\"4\""));
    }

    #[test]
    fn renders_one_row_per_user_in_column_order() {
        let html = render_with_store(
            Some("t.o.k".into()),
            |state| state.users = vec![user(1, "A", "a@x.com", "admin")],
            || view! { <UserList /> },
        );
        assert_eq!(body_rows(&html), 1);
        assert_eq!(cell_texts(&html), vec!["1", "A", "a@x.com", "admin"]);
        assert!(!html.contains(EMPTY_USERS_MESSAGE));
    }

    #[test]
    fn renders_header_columns() {
        let html = render_with_store(None, |_| {}, || view! { <UserList /> });
        for header in ["ID", "Nombre", "Email", "Rol"] {
            assert!(html.contains(&format!(">{}</th>", header)), "{header}");
        }
    }

    #[test]
    fn keeps_store_order() {
        let html = render_with_store(
            Some("t.o.k".into()),
            |state| {
                state.users = vec![
                    user(5, "Eva", "eva@x.com", "vendedor"),
                    user(2, "Bea", "bea@x.com", "admin"),
                ]
            },
            || view! { <UserList /> },
        );
        let cells = cell_texts(&html);
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], "5");
        assert_eq!(cells[4], "2");
    }

    #[test]
    fn without_token_redirects_and_skips_fetch() {
        with_test_app(None, "", |app| {
            render_view(|| view! { <UserList /> });
            assert_eq!(app.navigations(), vec!["/ventas"]);
            assert!(app.dispatched().is_empty());
        });
    }

    #[test]
    fn fetches_once_and_ignores_its_own_results() {
        with_test_app(Some("t.o.k".into()), "", |app| {
            render_view(|| view! { <UserList /> });
            assert_eq!(app.dispatched(), vec!["get_users"]);

            app.store.seed(|s| s.users = vec![user(1, "A", "a@x.com", "admin")]);
            app.store.seed(|s| s.latest_products = Vec::new());
            assert_eq!(app.dispatched(), vec!["get_users"]);
            assert!(app.navigations().is_empty());
        });
    }

    #[test]
    fn token_changes_refetch_or_redirect() {
        with_test_app(Some("t.o.k".into()), "/tienda", |app| {
            render_view(|| view! { <UserList /> });
            app.store.seed(|s| s.token = Some("o.t.h".into()));
            assert_eq!(app.dispatched(), vec!["get_users", "get_users"]);

            app.store.logout();
            assert_eq!(app.navigations(), vec!["/tienda/ventas"]);
            assert_eq!(app.dispatched().len(), 2);
        });
    }
}
