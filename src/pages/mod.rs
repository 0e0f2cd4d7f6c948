mod appointments;
mod feedback;
mod login;
mod schedule;
mod static_pages;
mod user_home;
mod user_profile;

pub use appointments::{CancelPage, MyAppointmentsPage};
pub use feedback::{FeedbackPage, CATEGORIES, COUNTRY_CODES, EXPERIENCES};
pub use login::LoginPage;
pub use schedule::{SchedulePage, SLOTS};
pub use static_pages::{
    CancelSuccessPage, ContactInfo, ContactUsPage, FeedbackSuccessPage, LandingPage,
    RescheduleSuccessPage, ScheduleSuccessPage,
};
pub use user_home::UserHomePage;
pub use user_profile::UserProfilePage;
