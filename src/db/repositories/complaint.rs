use crate::domain::{AccountKey, DistrictField};
use crate::entities::{complaints, prelude::*};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

pub use crate::entities::complaints::Model as Complaint;

/// Complaint fields accepted when loading fixture rows.
#[derive(Debug, Clone, Default)]
pub struct NewComplaint {
    pub account: Option<String>,
    pub opendate: Option<NaiveDate>,
    pub closedate: Option<NaiveDate>,
    pub complaint_type: Option<String>,
    pub descriptor: Option<String>,
    pub zip: Option<String>,
    pub borough: Option<String>,
    pub city: Option<String>,
    pub council_dist: Option<String>,
    pub community_board: Option<String>,
}

/// Read-side repository for the complaint table. Results keep insertion
/// order (ascending `unique_key`).
pub struct ComplaintRepository {
    conn: DatabaseConnection,
}

const fn district_column(field: DistrictField) -> complaints::Column {
    match field {
        DistrictField::Account => complaints::Column::Account,
        DistrictField::CouncilDist => complaints::Column::CouncilDist,
    }
}

impl ComplaintRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Every complaint whose `field` equals the key.
    pub async fn list_for_district(
        &self,
        field: DistrictField,
        key: &AccountKey,
    ) -> Result<Vec<Complaint>> {
        Complaints::find()
            .filter(district_column(field).eq(key.as_str()))
            .order_by_asc(complaints::Column::UniqueKey)
            .all(&self.conn)
            .await
            .with_context(|| format!("Failed to list complaints by {}", field.as_str()))
    }

    /// Opened and not yet closed.
    pub async fn list_open(&self, key: &AccountKey) -> Result<Vec<Complaint>> {
        Complaints::find()
            .filter(complaints::Column::Account.eq(key.as_str()))
            .filter(complaints::Column::Opendate.is_not_null())
            .filter(complaints::Column::Closedate.is_null())
            .order_by_asc(complaints::Column::UniqueKey)
            .all(&self.conn)
            .await
            .context("Failed to list open complaints")
    }

    /// Opened and closed.
    pub async fn list_closed(&self, key: &AccountKey) -> Result<Vec<Complaint>> {
        Complaints::find()
            .filter(complaints::Column::Account.eq(key.as_str()))
            .filter(complaints::Column::Opendate.is_not_null())
            .filter(complaints::Column::Closedate.is_not_null())
            .order_by_asc(complaints::Column::UniqueKey)
            .all(&self.conn)
            .await
            .context("Failed to list closed complaints")
    }

    /// `(complaint_type, count)` for the account. Complaints without a type
    /// are not counted.
    pub async fn count_by_type(&self, key: &AccountKey) -> Result<Vec<(String, i64)>> {
        let rows: Vec<(String, i64)> = Complaints::find()
            .select_only()
            .column(complaints::Column::ComplaintType)
            .column_as(complaints::Column::ComplaintType.count(), "count")
            .filter(complaints::Column::Account.eq(key.as_str()))
            .filter(complaints::Column::ComplaintType.is_not_null())
            .group_by(complaints::Column::ComplaintType)
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to count complaints by type")?;

        Ok(rows)
    }

    /// Inserts a complaint row and returns its `unique_key`.
    ///
    /// Complaints normally arrive through an external load; this exists for
    /// fixtures and tests.
    pub async fn insert(&self, complaint: NewComplaint) -> Result<i64> {
        let result = Complaints::insert(complaints::ActiveModel {
            account: Set(complaint.account),
            opendate: Set(complaint.opendate),
            complaint_type: Set(complaint.complaint_type),
            descriptor: Set(complaint.descriptor),
            zip: Set(complaint.zip),
            borough: Set(complaint.borough),
            city: Set(complaint.city),
            council_dist: Set(complaint.council_dist),
            community_board: Set(complaint.community_board),
            closedate: Set(complaint.closedate),
            ..Default::default()
        })
        .exec(&self.conn)
        .await
        .context("Failed to insert complaint")?;

        Ok(result.last_insert_id)
    }
}
