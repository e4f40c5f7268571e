use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Every view filters on one of these two columns
        manager
            .create_index(
                Index::create()
                    .name("idx_complaints_account")
                    .table(Complaints::Table)
                    .col(Complaints::Account)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_complaints_council_dist")
                    .table(Complaints::Table)
                    .col(Complaints::CouncilDist)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_complaints_council_dist")
                    .table(Complaints::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_complaints_account")
                    .table(Complaints::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Complaints {
    Table,
    Account,
    CouncilDist,
}
