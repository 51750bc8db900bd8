//! Pages
//!
//! Top-level screens switched by `Page` in the app context.

mod board_view;
mod dashboard;
mod login;
mod register;

pub use board_view::BoardView;
pub use dashboard::Dashboard;
pub use login::Login;
pub use register::Register;
