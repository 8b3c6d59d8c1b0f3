mod action;
mod author;
mod error;
mod event;
mod message;
mod notification;
mod responses;
mod rng;
mod session;
mod textarea;
mod timing;
mod toast;
mod typing;

pub use action::*;
pub use author::*;
pub use error::*;
pub use event::*;
pub use message::*;
pub use notification::*;
pub use responses::*;
pub use rng::*;
pub use session::*;
pub use textarea::*;
pub use timing::*;
pub use toast::*;
pub use typing::*;
