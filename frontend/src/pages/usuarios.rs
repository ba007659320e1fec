use crate::components::user_list::UserList;
use leptos::*;

#[component]
pub fn UsuariosPage() -> impl IntoView {
    view! {
        <div class="container mt-4">
            <h1 class="mb-3">"Usuarios"</h1>
            <UserList />
        </div>
    }
}
