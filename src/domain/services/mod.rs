pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
mod chat_session;
pub mod events;
mod replies;
mod scroll;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use chat_session::*;
pub use replies::*;
pub use scroll::*;
