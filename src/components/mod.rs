//! UI Components
//!
//! Reusable Leptos components.

mod category_tabs;
mod card_container;
mod menu_card;
mod item_form;
mod nav_bar;
mod error_banner;

pub use category_tabs::CategoryTabs;
pub use card_container::CardContainer;
pub use menu_card::MenuCard;
pub use item_form::ItemFormPanel;
pub use nav_bar::NavBar;
pub use error_banner::ErrorBanner;
