pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService, LoginResult};
pub use auth_service_impl::SeaOrmAuthService;

pub mod profile_service;
pub mod profile_service_impl;
pub use profile_service::{ProfileError, ProfileService};
pub use profile_service_impl::SeaOrmProfileService;

pub mod complaint_service;
pub mod complaint_service_impl;
pub use complaint_service::{ComplaintError, ComplaintService};
pub use complaint_service_impl::SeaOrmComplaintService;
