mod health;
mod url;

pub use health::pong_handler;
pub use url::{redirect_handler, shorten_handler};
