//! Room catalogue routes (read-only).

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Json;
use client::content::{ROOMS, Room, find_room};

/// `GET /api/rooms`: the full catalogue in display order.
pub async fn list_rooms() -> Json<&'static [Room]> {
    Json(ROOMS)
}

/// `GET /api/rooms/{id}`: one room, or 404 for an unknown id.
pub async fn get_room(Path(id): Path<String>) -> Result<Json<&'static Room>, StatusCode> {
    find_room(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
#[path = "rooms_test.rs"]
mod tests;
