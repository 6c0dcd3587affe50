pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
mod chat_log;
pub mod events;
mod login;
mod reveal;
mod scroll;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use chat_log::*;
pub use login::*;
pub use reveal::*;
pub use scroll::*;
