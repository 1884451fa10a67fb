pub use super::parking_lot::Entity as ParkingLot;
pub use super::parking_spot::Entity as ParkingSpot;
pub use super::reservation::Entity as Reservation;
pub use super::user::Entity as User;
