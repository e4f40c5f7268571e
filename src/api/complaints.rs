use axum::{Extension, Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, ComplaintDto, TopComplaintDto};
use crate::domain::{ComplaintView, CurrentUser};

async fn list_view(
    state: &AppState,
    user: &CurrentUser,
    view: ComplaintView,
) -> Result<Json<Vec<ComplaintDto>>, ApiError> {
    let scope = state.profile_service().resolve_scope(user).await?;
    let complaints = state.complaint_service().list(&scope, view).await?;

    Ok(Json(complaints.into_iter().map(ComplaintDto::from).collect()))
}

/// GET /complaints/allComplaints/
pub async fn all_complaints(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<ComplaintDto>>, ApiError> {
    list_view(&state, &user, ComplaintView::All).await
}

/// GET /complaints/openCases/
pub async fn open_cases(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<ComplaintDto>>, ApiError> {
    list_view(&state, &user, ComplaintView::Open).await
}

/// GET /complaints/closedCases/
pub async fn closed_cases(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<ComplaintDto>>, ApiError> {
    list_view(&state, &user, ComplaintView::Closed).await
}

/// GET /complaints/constituentComplaints/
pub async fn constituent_complaints(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<ComplaintDto>>, ApiError> {
    list_view(&state, &user, ComplaintView::Constituent).await
}

/// GET /complaints/topComplaints/
pub async fn top_complaints(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<TopComplaintDto>>, ApiError> {
    let scope = state.profile_service().resolve_scope(&user).await?;
    let ranked = state.complaint_service().top_complaints(&scope).await?;

    Ok(Json(ranked.into_iter().map(TopComplaintDto::from).collect()))
}
