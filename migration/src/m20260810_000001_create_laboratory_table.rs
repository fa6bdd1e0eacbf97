use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Laboratory::Table)
                    .if_not_exists()
                    .col(pk_auto(Laboratory::Id))
                    .col(string_uniq(Laboratory::Name))
                    .col(string_null(Laboratory::Location))
                    .col(string_null(Laboratory::Contact))
                    .col(
                        timestamp(Laboratory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Laboratory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Laboratory {
    Table,
    Id,
    Name,
    Location,
    Contact,
    CreatedAt,
}
