//! Migration: Create the users table.
//!
//! Enumerated columns hold the symbolic names (`LOCAL`, `ADMIN`, ...).
//! `created_at` is written once on insert and never updated.

use sea_orm_migration::prelude::*;

use super::EMAIL_UNIQUE_INDEX;
use domain::constants::{ENUM_COLUMN_LENGTH, MAX_EMAIL_LENGTH, MAX_NICKNAME_LENGTH};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(MAX_EMAIL_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Nickname)
                            .string_len(MAX_NICKNAME_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::Password).string().null())
                    .col(
                        ColumnDef::new(Users::Provider)
                            .string_len(ENUM_COLUMN_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(ENUM_COLUMN_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Status)
                            .string_len(ENUM_COLUMN_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(EMAIL_UNIQUE_INDEX)
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Nickname,
    Password,
    Provider,
    Role,
    Status,
    CreatedAt,
}
