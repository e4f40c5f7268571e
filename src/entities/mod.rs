pub mod prelude;

pub mod complaints;
pub mod user_profiles;
pub mod users;
