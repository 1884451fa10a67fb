use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A booking record binding a user to a spot.
///
/// Auto-bookings start with `leaving_time` null and `parking_cost` 0; manual
/// reservations carry their interval and cost from creation. Either way the
/// reservation stays open until release sets `completed`; `leaving_time`
/// alone cannot mark completion, a manual reservation has one from the
/// start. The row is deleted outright on cancellation.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spot_id: i32,
    pub user_id: i32,
    pub parking_time: DateTime<Utc>,
    pub leaving_time: Option<DateTime<Utc>>,
    pub parking_cost: f64,
    pub transaction_id: Option<String>,
    pub payment_method: Option<String>,
    /// Set once by release; completed reservations are billing history.
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking_spot::Entity",
        from = "Column::SpotId",
        to = "super::parking_spot::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ParkingSpot,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::parking_spot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingSpot.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
