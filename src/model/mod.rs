//! Domain models, request/response DTOs, and repository parameter types.
//!
//! DTOs are the serde-typed request and response bodies validated at the HTTP
//! boundary; `*Params` structs are the operation inputs passed from services
//! into the data layer. Entity models never cross the controller boundary
//! directly (the entity `password_hash` in particular must not leak).

pub mod api;
pub mod booking;
pub mod lot;
pub mod reservation;
pub mod spot;
pub mod user;

/// Rounds a monetary or duration value to 2 decimal places for presentation.
///
/// Internal computation keeps full precision; rounding happens only when a
/// value is placed into a response DTO.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
