use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use salonfront_core::{
    errors::SalonError,
    models::{
        appointment::{Appointment, AppointmentStatus},
        banner::PromotionalBanner,
    },
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_name: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = SalonError;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        let status = row.status.parse::<AppointmentStatus>().map_err(|_| {
            SalonError::Internal(format!(
                "appointment {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            service_name: row.service_name,
            appointment_date: row.appointment_date,
            appointment_time: row.appointment_time,
            status,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPromotionalBanner {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub button_text: Option<String>,
    pub is_active: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

impl From<DbPromotionalBanner> for PromotionalBanner {
    fn from(row: DbPromotionalBanner) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            link_url: row.link_url,
            button_text: row.button_text,
            is_active: row.is_active,
            start_date: row.start_date,
            end_date: row.end_date,
            priority: row.priority,
            created_at: row.created_at,
        }
    }
}
