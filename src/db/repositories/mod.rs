pub mod complaint;
pub mod profile;
pub mod user;
