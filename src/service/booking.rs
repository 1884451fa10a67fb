//! Reservation lifecycle orchestration.
//!
//! Every operation here runs inside a single database transaction: the spot
//! status transition, the lot slot-counter update, and the reservation write
//! commit together or not at all. Spot claims and frees are conditional
//! updates, so a lost race surfaces as a typed error instead of a
//! double-booking or a drifted counter.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{lot::LotRepository, reservation::ReservationRepository, spot::SpotRepository},
    error::{auth::AuthError, booking::BookingError, AppError},
    model::reservation::{CreateReservationParams, FinalizeReservationParams},
    service::pricing::{self, CostBreakdown},
};

use entity::parking_spot::SpotStatus;

/// Result of a successful release: the finalized reservation plus the cost
/// breakdown used to bill it.
pub struct ReleaseOutcome {
    pub reservation: entity::reservation::Model,
    pub breakdown: CostBreakdown,
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a manual reservation for an explicit interval
    ///
    /// Validates the interval and the referenced entities, claims the spot
    /// into `reserved`, decrements the lot counter, and persists the
    /// reservation with its cost computed up front from the lot's rate.
    ///
    /// # Arguments
    /// - `spot_id`: The chosen spot
    /// - `user_id`: The user the reservation is for
    /// - `parking_time` / `leaving_time`: The reserved interval
    ///
    /// # Returns
    /// - `Ok(Model)`: The created reservation
    /// - `Err(AppError)`: `InvalidInterval`, `SpotUnavailable`, or a
    ///   not-found for user/spot/lot
    pub async fn create_reservation(
        &self,
        spot_id: i32,
        user_id: i32,
        parking_time: chrono::DateTime<Utc>,
        leaving_time: chrono::DateTime<Utc>,
    ) -> Result<entity::reservation::Model, AppError> {
        let txn = self.db.begin().await?;

        let user = crate::data::user::UserRepository::new(&txn)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let spot = SpotRepository::new(&txn)
            .find_by_id(spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        let lot = LotRepository::new(&txn)
            .find_by_id(spot.lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let breakdown = pricing::compute_cost(parking_time, leaving_time, lot.price)?;

        if !SpotRepository::new(&txn)
            .claim(spot.id, user.id, SpotStatus::Reserved)
            .await?
        {
            return Err(BookingError::SpotUnavailable.into());
        }
        if !LotRepository::new(&txn).decrement_available(lot.id).await? {
            return Err(BookingError::SpotUnavailable.into());
        }

        let reservation = ReservationRepository::new(&txn)
            .create(CreateReservationParams {
                spot_id: spot.id,
                user_id: user.id,
                parking_time,
                leaving_time: Some(leaving_time),
                parking_cost: breakdown.total,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created reservation {} on spot {} for user {}",
            reservation.id,
            spot.id,
            user.id
        );

        Ok(reservation)
    }

    /// Auto-books the next available spot in a lot
    ///
    /// Enforces at most one active reservation per user, then claims the
    /// lowest-id available spot into `occupied` and opens a reservation with
    /// no leaving time and zero cost; billing happens at release.
    ///
    /// # Returns
    /// - `Ok(Model)`: The opened reservation
    /// - `Err(AppError)`: `ActiveReservationExists`, `NoAvailableSpot`, or
    ///   lot not found
    pub async fn auto_book(
        &self,
        user_id: i32,
        lot_id: i32,
    ) -> Result<entity::reservation::Model, AppError> {
        let txn = self.db.begin().await?;

        if ReservationRepository::new(&txn)
            .find_active_by_user(user_id, Utc::now())
            .await?
            .is_some()
        {
            return Err(BookingError::ActiveReservationExists.into());
        }

        let lot = LotRepository::new(&txn)
            .find_by_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let spot = SpotRepository::new(&txn)
            .first_available(lot.id)
            .await?
            .ok_or(BookingError::NoAvailableSpot)?;

        // A concurrent booking may have taken the spot between the select and
        // the claim; the conditional update catches that.
        if !SpotRepository::new(&txn)
            .claim(spot.id, user_id, SpotStatus::Occupied)
            .await?
        {
            return Err(BookingError::NoAvailableSpot.into());
        }
        if !LotRepository::new(&txn).decrement_available(lot.id).await? {
            return Err(BookingError::NoAvailableSpot.into());
        }

        let reservation = ReservationRepository::new(&txn)
            .create(CreateReservationParams {
                spot_id: spot.id,
                user_id,
                parking_time: Utc::now(),
                leaving_time: None,
                parking_cost: 0.0,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Auto-booked spot {} in lot {} for user {}",
            spot.id,
            lot.id,
            user_id
        );

        Ok(reservation)
    }

    /// Marks a booked spot as occupied and restarts the clock
    ///
    /// The slot counter is untouched; it was decremented when the spot was
    /// claimed. The spot status is re-marked `occupied` without re-checking,
    /// mirroring the booked-then-arrived flow.
    ///
    /// # Returns
    /// - `Ok(Model)`: The reservation with its reset start time
    /// - `Err(AppError)`: `AccessDenied`, or reservation/spot not found
    pub async fn mark_occupied(
        &self,
        reservation_id: i32,
        caller: &entity::user::Model,
    ) -> Result<entity::reservation::Model, AppError> {
        let txn = self.db.begin().await?;

        let reservation = ReservationRepository::new(&txn)
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        ensure_owner(caller, reservation.user_id, "occupy")?;

        let spot = SpotRepository::new(&txn)
            .find_by_id(reservation.spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        let reservation = ReservationRepository::new(&txn)
            .reset_parking_time(reservation.id, Utc::now())
            .await?;
        SpotRepository::new(&txn).mark_occupied(spot.id).await?;

        txn.commit().await?;

        Ok(reservation)
    }

    /// Releases a reservation, bills it, and frees the spot
    ///
    /// Works for both flows: an open auto-booking and a manual reservation
    /// still holding its spot. A reservation can be released once: the
    /// `completed` flag, or a spot already back in `available`, fails with a
    /// conflict rather than double-incrementing the counter. The cost covers
    /// the elapsed time since `parking_time` at the lot's rate; payment
    /// metadata is stored normalized.
    ///
    /// # Returns
    /// - `Ok(ReleaseOutcome)`: Finalized reservation and cost breakdown
    /// - `Err(AppError)`: `AccessDenied`, `AlreadyReleased`, or a not-found
    pub async fn release(
        &self,
        reservation_id: i32,
        caller: &entity::user::Model,
        transaction_id: Option<String>,
        payment_method: Option<String>,
    ) -> Result<ReleaseOutcome, AppError> {
        let txn = self.db.begin().await?;

        let reservation = ReservationRepository::new(&txn)
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        ensure_owner(caller, reservation.user_id, "release")?;

        if reservation.completed {
            return Err(BookingError::AlreadyReleased.into());
        }

        let spot = SpotRepository::new(&txn)
            .find_by_id(reservation.spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        let lot = LotRepository::new(&txn)
            .find_by_id(spot.lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let now = Utc::now();
        let breakdown = pricing::compute_cost(reservation.parking_time, now, lot.price)?;

        if !SpotRepository::new(&txn).free(spot.id).await? {
            return Err(BookingError::AlreadyReleased.into());
        }
        if !LotRepository::new(&txn).increment_available(lot.id).await? {
            return Err(AppError::InternalError(format!(
                "Slot counter for lot {} is out of sync with spot statuses",
                lot.id
            )));
        }

        let reservation = ReservationRepository::new(&txn)
            .finalize(
                reservation.id,
                FinalizeReservationParams {
                    leaving_time: now,
                    parking_cost: breakdown.total,
                    transaction_id,
                    payment_method: payment_method.as_deref().map(normalize_payment_method),
                },
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Released reservation {} on spot {}, charged {} hour(s)",
            reservation.id,
            spot.id,
            breakdown.charged_hours
        );

        Ok(ReleaseOutcome {
            reservation,
            breakdown,
        })
    }

    /// Cancels an active reservation and deletes its record
    ///
    /// The spot returns to `available` and the counter is restored. Manual
    /// reservations qualify too; holding a planned `leaving_time` does not
    /// make them history. A reservation that was already released cannot be
    /// cancelled, freeing its spot again would corrupt the counter.
    ///
    /// # Returns
    /// - `Ok(())`: Reservation cancelled and deleted
    /// - `Err(AppError)`: `AccessDenied`, `AlreadyReleased`, or a not-found
    pub async fn cancel(
        &self,
        reservation_id: i32,
        caller: &entity::user::Model,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let reservation = ReservationRepository::new(&txn)
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        ensure_owner(caller, reservation.user_id, "cancel")?;

        if reservation.completed {
            return Err(BookingError::AlreadyReleased.into());
        }

        let spot = SpotRepository::new(&txn)
            .find_by_id(reservation.spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        if !SpotRepository::new(&txn).free(spot.id).await? {
            return Err(BookingError::AlreadyReleased.into());
        }
        if !LotRepository::new(&txn).increment_available(spot.lot_id).await? {
            return Err(AppError::InternalError(format!(
                "Slot counter for lot {} is out of sync with spot statuses",
                spot.lot_id
            )));
        }

        ReservationRepository::new(&txn)
            .delete(reservation.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Cancelled reservation {} on spot {}",
            reservation.id,
            spot.id
        );

        Ok(())
    }
}

/// Self-or-admin ownership check against a reservation's owner.
fn ensure_owner(
    caller: &entity::user::Model,
    owner_id: i32,
    action: &str,
) -> Result<(), AuthError> {
    if caller.role == entity::user::Role::Admin || caller.id == owner_id {
        return Ok(());
    }
    Err(AuthError::AccessDenied(
        caller.id,
        format!(
            "User attempted to {} reservation owned by user {}",
            action, owner_id
        ),
    ))
}

/// Normalizes a client-supplied payment method label.
///
/// Known labels collapse onto canonical names (case-insensitive); anything
/// unrecognized is stored verbatim.
pub fn normalize_payment_method(raw: &str) -> String {
    match raw.to_ascii_lowercase().as_str() {
        "qr" | "upi" => "UPI".to_string(),
        "card" => "Card".to_string(),
        "cash" => "Cash".to_string(),
        _ => raw.to_string(),
    }
}
