use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SalonError, SalonResult};

/// Accepted wire format for appointment dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted wire formats for appointment times, tried in order.
pub const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = SalonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(SalonError::Validation(format!(
                "Unknown appointment status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_name: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleAppointmentRequest {
    pub new_date: String,
    pub new_time: String,
}

impl RescheduleAppointmentRequest {
    /// Parses the requested slot. Only the format is checked: past dates and
    /// slots that collide with other bookings are accepted as given.
    pub fn parse_slot(&self) -> SalonResult<(NaiveDate, NaiveTime)> {
        let date = NaiveDate::parse_from_str(self.new_date.trim(), DATE_FORMAT).map_err(|_| {
            SalonError::Validation(format!(
                "Invalid date '{}', expected YYYY-MM-DD",
                self.new_date
            ))
        })?;

        let time = TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(self.new_time.trim(), format).ok())
            .ok_or_else(|| {
                SalonError::Validation(format!(
                    "Invalid time '{}', expected HH:MM or HH:MM:SS",
                    self.new_time
                ))
            })?;

        Ok((date, time))
    }
}

/// Acknowledgement returned by the appointment actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
}

impl ActionResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
