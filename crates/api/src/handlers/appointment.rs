use axum::{
    extract::{Path, State},
    Json,
};
use salonfront_core::{
    errors::SalonError,
    models::appointment::{ActionResponse, Appointment, RescheduleAppointmentRequest},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    middleware::{auth::CurrentUser, error_handling::AppError},
    ApiState,
};

pub const CANCEL_FAILED: &str = "Failed to cancel appointment";
pub const RESCHEDULE_FAILED: &str = "Failed to reschedule appointment";
pub const LIST_FAILED: &str = "Failed to load appointments";

// Covers both a missing id and an id owned by someone else
fn not_found(id: Uuid) -> SalonError {
    SalonError::NotFound(format!("Appointment {id}"))
}

/// Always reads the store: bookings and status changes made by other
/// processes must show up on the next request.
#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let rows = state
        .appointments
        .list_for_user(user_id)
        .await
        .map_err(|err| {
            error!(user_id = %user_id, error = ?err, "failed to list appointments");
            SalonError::OperationFailed(LIST_FAILED)
        })?;

    let appointments = rows
        .into_iter()
        .map(Appointment::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(appointments))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionResponse>, AppError> {
    let touched = state.appointments.cancel(id, user_id).await.map_err(|err| {
        error!(appointment_id = %id, user_id = %user_id, error = ?err, "failed to cancel appointment");
        SalonError::OperationFailed(CANCEL_FAILED)
    })?;

    if touched == 0 {
        warn!(appointment_id = %id, user_id = %user_id, "cancel matched no appointment");
        return Err(not_found(id).into());
    }

    info!(appointment_id = %id, user_id = %user_id, "appointment cancelled");

    Ok(Json(ActionResponse::ok()))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn reschedule_appointment(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RescheduleAppointmentRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let (date, time) = payload.parse_slot()?;

    let touched = state
        .appointments
        .reschedule(id, user_id, date, time)
        .await
        .map_err(|err| {
            error!(appointment_id = %id, user_id = %user_id, error = ?err, "failed to reschedule appointment");
            SalonError::OperationFailed(RESCHEDULE_FAILED)
        })?;

    if touched == 0 {
        warn!(appointment_id = %id, user_id = %user_id, "reschedule matched no appointment");
        return Err(not_found(id).into());
    }

    info!(
        appointment_id = %id,
        user_id = %user_id,
        date = %date,
        time = %time,
        "appointment rescheduled, awaiting confirmation"
    );

    Ok(Json(ActionResponse::ok()))
}
