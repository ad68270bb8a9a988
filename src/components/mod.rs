//! UI Components
//!
//! One Leptos component per logical screen, plus the shared bits
//! (speed picker, screen header).

mod array_ops_1d;
mod array_ops_2d;
mod binary_search;
mod home;
mod linear_search;
mod linked_list_screen;
mod login;
mod main_menu;
mod queue_screen;
mod register;
mod screen_header;
mod sort_screen;
mod speed_picker;
mod stack_screen;
mod string_ops_screen;
mod traversal_screen;

pub use array_ops_1d::ArrayOps1D;
pub use array_ops_2d::ArrayOps2D;
pub use binary_search::BinarySearch;
pub use home::Home;
pub use linear_search::LinearSearch;
pub use linked_list_screen::LinkedListScreen;
pub use login::Login;
pub use main_menu::MainMenu;
pub use queue_screen::QueueScreen;
pub use register::Register;
pub use screen_header::ScreenHeader;
pub use sort_screen::SortScreen;
pub use speed_picker::SpeedPicker;
pub use stack_screen::StackScreen;
pub use string_ops_screen::StringOpsScreen;
pub use traversal_screen::TraversalScreen;

/// Modal alert for validation and network failures.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
