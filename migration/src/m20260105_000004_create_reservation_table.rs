use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User,
    m20260105_000003_create_parking_spot_table::ParkingSpot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::SpotId))
                    .col(integer(Reservation::UserId))
                    .col(timestamp(Reservation::ParkingTime))
                    .col(timestamp_null(Reservation::LeavingTime))
                    .col(double(Reservation::ParkingCost).default(0.0))
                    .col(string_null(Reservation::TransactionId))
                    .col(string_null(Reservation::PaymentMethod))
                    .col(boolean(Reservation::Completed).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_spot_id")
                            .from(Reservation::Table, Reservation::SpotId)
                            .to(ParkingSpot::Table, ParkingSpot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    SpotId,
    UserId,
    ParkingTime,
    LeavingTime,
    ParkingCost,
    TransactionId,
    PaymentMethod,
    Completed,
}
