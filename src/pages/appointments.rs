use crate::models::Appointment;
use crate::router::{Navigator, Route};

/// My-appointments view: displays the booking and its actions
pub struct MyAppointmentsPage {
    pub appointment: Appointment,
}

impl MyAppointmentsPage {
    pub fn new() -> Self {
        Self {
            appointment: Appointment::sample(),
        }
    }

    pub fn with_appointment(appointment: Appointment) -> Self {
        Self { appointment }
    }

    pub fn reschedule(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::Reschedule);
    }

    pub fn cancel(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::Cancel);
    }

    pub fn go_back(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::UserHome);
    }
}

impl Default for MyAppointmentsPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancellation confirmation view
pub struct CancelPage;

impl CancelPage {
    pub fn confirm_cancel(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::CancelSuccess);
    }

    pub fn go_back(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::MyAppointments);
    }
}
