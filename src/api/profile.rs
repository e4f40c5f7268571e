use axum::{Extension, Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, ProfileDto};
use crate::domain::CurrentUser;

/// GET /complaints/profile/
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ProfileDto>, ApiError> {
    let profile = state.profile_service().get_profile(&user).await?;
    Ok(Json(ProfileDto::from(profile)))
}
