use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Coach;

/// A scheduled session between a user and a coach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub coach_id: String,
    pub coach_name: String,
    pub user_id: String,
    pub user_name: String,
    pub date: String,
    pub slot: String,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}

impl Appointment {
    /// Build a fresh booking from a confirmed schedule submission
    pub fn booked(
        coach: &Coach,
        user_id: &str,
        user_name: &str,
        date: NaiveDate,
        slot: &str,
        date_format: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            coach_id: coach.id.clone(),
            coach_name: coach.name.clone(),
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            date: date.format(date_format).to_string(),
            slot: slot.to_string(),
            status: AppointmentStatus::Scheduled,
            notes: None,
        }
    }

    /// Sample appointment displayed on the my-appointments view
    pub fn sample() -> Self {
        Self {
            id: "BI-0001".to_string(),
            coach_id: "CI-0001".to_string(),
            coach_name: "Rose".to_string(),
            user_id: "UI-0001".to_string(),
            user_name: "David".to_string(),
            date: "Wed Mar 16 2022".to_string(),
            slot: "9 AM to 10 AM".to_string(),
            status: AppointmentStatus::Scheduled,
            notes: None,
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Rescheduled => write!(f, "rescheduled"),
        }
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "rescheduled" => Ok(AppointmentStatus::Rescheduled),
            _ => Err(anyhow::anyhow!("Invalid appointment status: {}", s)),
        }
    }
}
