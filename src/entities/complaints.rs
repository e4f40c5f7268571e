use sea_orm::entity::prelude::*;

/// A 311 complaint routed to a council district. Rows are loaded by an
/// external process and only read here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "complaints")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub unique_key: i64,

    /// District account key, `NYCC<2 digits>`.
    pub account: Option<String>,

    pub opendate: Option<Date>,

    pub complaint_type: Option<String>,

    pub descriptor: Option<String>,

    pub zip: Option<String>,

    pub borough: Option<String>,

    pub city: Option<String>,

    pub council_dist: Option<String>,

    pub community_board: Option<String>,

    /// Unset while the complaint is open.
    pub closedate: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
