use sea_orm::entity::prelude::*;

/// A parking facility with a fixed capacity and a live free-slot counter.
///
/// Invariant: `0 <= available_slots <= number_of_slots`, and `available_slots`
/// always equals the number of child spots whose status is `available`. The
/// counter only moves together with a spot status transition, inside the same
/// transaction.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parking_lot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_name: String,
    /// Hourly rate used by the pricing calculator.
    pub price: f64,
    pub address: String,
    pub pincode: String,
    pub number_of_slots: i32,
    pub available_slots: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::parking_spot::Entity")]
    ParkingSpot,
}

impl Related<super::parking_spot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingSpot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
