use crate::router::{Navigator, Route};

/// Marketing entry view
pub struct LandingPage;

impl LandingPage {
    pub fn get_started(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::LoginUser);
    }

    pub fn contact(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::ContactUs);
    }
}

/// Static contact details rendered on the contact-us view
#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub organization: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            organization: "WeCare".to_string(),
            address: "MG Road, Pune, Maharashtra 411001".to_string(),
            phone: "+91 1234123456".to_string(),
            email: "lifestyle@WeCare.com".to_string(),
        }
    }
}

pub struct ContactUsPage {
    pub info: ContactInfo,
}

impl ContactUsPage {
    pub fn new() -> Self {
        Self {
            info: ContactInfo::default(),
        }
    }

    pub fn go_home(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::UserHome);
    }
}

impl Default for ContactUsPage {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ScheduleSuccessPage;

impl ScheduleSuccessPage {
    pub fn message(&self) -> &'static str {
        "Appointment confirmed!"
    }

    pub fn go_back(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::UserHome);
    }
}

pub struct RescheduleSuccessPage;

impl RescheduleSuccessPage {
    pub fn message(&self) -> &'static str {
        "Appointment rescheduled successfully!"
    }

    pub fn go_back(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::UserHome);
    }
}

pub struct CancelSuccessPage;

impl CancelSuccessPage {
    pub fn message(&self) -> &'static str {
        "Appointment cancelled successfully!"
    }

    pub fn go_back(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::UserHome);
    }
}

pub struct FeedbackSuccessPage;

impl FeedbackSuccessPage {
    pub fn message(&self) -> &'static str {
        "Thank you for your feedback!"
    }

    pub fn go_back(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::UserHome);
    }
}
