pub mod common;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod navigation;
pub mod product_list;
pub mod user_list;
