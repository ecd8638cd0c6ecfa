use crate::{models::DbAppointment, DbPool};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use salonfront_core::models::appointment::AppointmentStatus;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Appointment access scoped to the owning user.
///
/// Every mutation filters on both the appointment id and the owner, so an id
/// that belongs to someone else behaves exactly like one that does not exist.
/// Mutations return the number of rows they touched.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<DbAppointment>>;

    async fn cancel(&self, id: Uuid, user_id: Uuid) -> Result<u64>;

    async fn reschedule(
        &self,
        id: Uuid,
        user_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<u64>;
}

#[derive(Debug, Clone)]
pub struct PgAppointmentRepository {
    pool: DbPool,
}

impl PgAppointmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<DbAppointment>> {
        get_appointments_by_user_id(&self.pool, user_id).await
    }

    async fn cancel(&self, id: Uuid, user_id: Uuid) -> Result<u64> {
        cancel_appointment(&self.pool, id, user_id).await
    }

    async fn reschedule(
        &self,
        id: Uuid,
        user_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<u64> {
        reschedule_appointment(&self.pool, id, user_id, date, time).await
    }
}

pub async fn get_appointments_by_user_id(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, user_id, service_name, appointment_date, appointment_time,
               status, notes, created_at, updated_at
        FROM appointments
        WHERE user_id = $1
        ORDER BY appointment_date ASC, appointment_time ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn cancel_appointment(pool: &Pool<Postgres>, id: Uuid, user_id: Uuid) -> Result<u64> {
    tracing::debug!("Cancelling appointment: id={}, user_id={}", id, user_id);

    let result = sqlx::query(
        r#"
        UPDATE appointments
        SET status = $3, updated_at = $4
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(AppointmentStatus::Cancelled.as_str())
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn reschedule_appointment(
    pool: &Pool<Postgres>,
    id: Uuid,
    user_id: Uuid,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<u64> {
    tracing::debug!(
        "Rescheduling appointment: id={}, user_id={}, date={}, time={}",
        id, user_id, date, time
    );

    // Any change of slot goes back through approval
    let result = sqlx::query(
        r#"
        UPDATE appointments
        SET appointment_date = $3, appointment_time = $4, status = $5, updated_at = $6
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(date)
    .bind(time)
    .bind(AppointmentStatus::Pending.as_str())
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
