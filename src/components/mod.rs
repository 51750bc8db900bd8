//! UI Components
//!
//! Reusable Leptos components.

mod board_column;
mod card_detail_dialog;
mod card_tile;
mod create_board_dialog;
mod create_card_dialog;
mod create_list_dialog;
mod delete_confirm_button;
mod invite_member_form;
mod modal;
mod priority_selector;
mod recommendations_sidebar;
mod toast_host;

pub use board_column::BoardColumn;
pub use card_detail_dialog::CardDetailDialog;
pub use card_tile::CardTile;
pub use create_board_dialog::CreateBoardDialog;
pub use create_card_dialog::CreateCardDialog;
pub use create_list_dialog::CreateListDialog;
pub use delete_confirm_button::DeleteConfirmButton;
pub use invite_member_form::InviteMemberForm;
pub use modal::Modal;
pub use priority_selector::PrioritySelector;
pub use recommendations_sidebar::RecommendationsSidebar;
pub use toast_host::ToastHost;
