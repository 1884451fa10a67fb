use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// Reservation interval ends before it starts.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Leaving time must not be before parking time")]
    InvalidInterval,

    /// The targeted spot is not in `available` status.
    ///
    /// Also raised when a conditional claim misses because another request
    /// took the spot first. Results in a 400 Bad Request response.
    #[error("Parking spot is not available")]
    SpotUnavailable,

    /// The lot has no spot left in `available` status.
    ///
    /// Results in a 400 Bad Request response.
    #[error("No available spot in this parking lot")]
    NoAvailableSpot,

    /// The user already holds an active reservation.
    ///
    /// A reservation is active while its `leaving_time` is null or in the
    /// future. Results in a 400 Bad Request response.
    #[error("You already have an active reservation")]
    ActiveReservationExists,

    /// The reservation was already released or the spot already freed.
    ///
    /// A second release, or a cancel after release, would double-increment
    /// the lot's slot counter. Results in a 409 Conflict response.
    #[error("Reservation has already been completed")]
    AlreadyReleased,
}

/// Converts booking-lifecycle errors into HTTP responses.
///
/// All variants carry user-actionable messages, so the error display text is
/// returned directly in the response body.
///
/// # Returns
/// - 400 Bad Request - For validation and availability failures
/// - 409 Conflict - For repeat release/cancel of a completed reservation
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyReleased => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
