mod serve;
mod user;

pub use serve::cmd_serve;
pub use user::{cmd_user_add, cmd_user_rotate_token, cmd_user_token};
