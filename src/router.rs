use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::{
    controller::{auth, booking, lot, reservation, spot, user},
    model::api::MessageDto,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/users", get(user::list_users))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/users/{id}/reservations", get(user::get_user_reservations))
        .route("/parking-lots", get(lot::list_lots).post(lot::create_lot))
        .route(
            "/parking-lots/{id}",
            get(lot::get_lot).put(lot::update_lot).delete(lot::delete_lot),
        )
        .route(
            "/parking-lots/{id}/available-spots",
            get(lot::get_available_spots),
        )
        .route("/parking-spots", get(spot::list_spots))
        .route(
            "/parking-spots/{id}",
            get(spot::get_spot).put(spot::update_spot),
        )
        .route(
            "/reservations",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route(
            "/reservations/{id}",
            get(reservation::get_reservation).delete(reservation::cancel_reservation),
        )
        .route("/booking/book-spot", post(booking::book_spot))
        .route("/booking/occupy-spot", post(booking::occupy_spot))
        .route("/booking/release-spot", post(booking::release_spot))
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "ok".to_string(),
        }),
    )
}
