mod appointment;
mod coach;
mod user;

pub use appointment::{Appointment, AppointmentStatus};
pub use coach::{Coach, Gender};
pub use user::UserProfile;
