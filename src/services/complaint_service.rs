//! Domain service for the district-scoped complaint views.

use thiserror::Error;

use crate::db::Complaint;
use crate::domain::ranking::RankedComplaint;
use crate::domain::{ComplaintView, DistrictScope};

/// Errors specific to complaint queries.
#[derive(Debug, Error)]
pub enum ComplaintError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ComplaintError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ComplaintError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for complaint lookups. Every call is bound to the
/// caller's [`DistrictScope`].
#[async_trait::async_trait]
pub trait ComplaintService: Send + Sync {
    /// Lists the complaints of one view, in insertion order.
    async fn list(
        &self,
        scope: &DistrictScope,
        view: ComplaintView,
    ) -> Result<Vec<Complaint>, ComplaintError>;

    /// Ranks the district's complaint types, ties merged.
    async fn top_complaints(
        &self,
        scope: &DistrictScope,
    ) -> Result<Vec<RankedComplaint>, ComplaintError>;
}
