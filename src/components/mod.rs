//! UI Components
//!
//! Leptos components for the board.

mod delete_confirm_button;
mod filter_bar;
mod item_card;
mod item_list;
mod kind_selector;
mod log_panel;
mod new_item_form;
mod notice_bar;
mod session_panel;

pub use filter_bar::FilterBar;
pub use item_list::ItemList;
pub use log_panel::LogPanel;
pub use new_item_form::NewItemForm;
pub use notice_bar::NoticeBar;
pub use session_panel::SessionPanel;
