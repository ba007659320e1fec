use crate::components::guard::RequireAdminToken;
use leptos::*;

mod dashboard;

pub use dashboard::{AdminDashboard, AdminSidebar, ADMIN_SIDEBAR_LINKS, NO_RECENT_PRODUCTS};

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAdminToken>
            <AdminDashboard />
        </RequireAdminToken>
    }
}
