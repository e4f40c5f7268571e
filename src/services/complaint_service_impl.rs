//! `SeaORM` implementation of the `ComplaintService` trait.

use crate::constants::ranking::TOP_COMPLAINT_LIMIT;
use crate::db::{Complaint, Store};
use crate::domain::ranking::{RankedComplaint, rank_top_complaints};
use crate::domain::{ComplaintView, DistrictField, DistrictScope};
use crate::services::complaint_service::{ComplaintError, ComplaintService};
use async_trait::async_trait;
use tracing::debug;

pub struct SeaOrmComplaintService {
    store: Store,
    all_complaints_match: DistrictField,
}

impl SeaOrmComplaintService {
    #[must_use]
    pub const fn new(store: Store, all_complaints_match: DistrictField) -> Self {
        Self {
            store,
            all_complaints_match,
        }
    }
}

#[async_trait]
impl ComplaintService for SeaOrmComplaintService {
    async fn list(
        &self,
        scope: &DistrictScope,
        view: ComplaintView,
    ) -> Result<Vec<Complaint>, ComplaintError> {
        let key = &scope.account_key;

        let complaints = match view {
            ComplaintView::All => {
                self.store
                    .list_complaints_for_district(self.all_complaints_match, key)
                    .await?
            }
            ComplaintView::Constituent => {
                self.store
                    .list_complaints_for_district(DistrictField::Account, key)
                    .await?
            }
            ComplaintView::Open => self.store.list_open_complaints(key).await?,
            ComplaintView::Closed => self.store.list_closed_complaints(key).await?,
        };

        metrics::counter!("complaint_queries_total", "view" => view.as_str()).increment(1);
        debug!(
            user_id = scope.user_id,
            account = %key,
            view = view.as_str(),
            count = complaints.len(),
            "Listed complaints"
        );

        Ok(complaints)
    }

    async fn top_complaints(
        &self,
        scope: &DistrictScope,
    ) -> Result<Vec<RankedComplaint>, ComplaintError> {
        let groups = self
            .store
            .count_complaints_by_type(&scope.account_key)
            .await?;

        let ranked = rank_top_complaints(&groups, TOP_COMPLAINT_LIMIT);

        metrics::counter!("complaint_queries_total", "view" => "top").increment(1);
        debug!(
            user_id = scope.user_id,
            account = %scope.account_key,
            groups = groups.len(),
            rows = ranked.len(),
            "Ranked complaint types"
        );

        Ok(ranked)
    }
}
