//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod movie_form;
mod movie_table;
mod status_banner;

pub use delete_confirm_button::DeleteConfirmButton;
pub use movie_form::MovieForm;
pub use movie_table::MovieTable;
pub use status_banner::StatusBanner;
