pub use super::complaints::Entity as Complaints;
pub use super::user_profiles::Entity as UserProfiles;
pub use super::users::Entity as Users;
