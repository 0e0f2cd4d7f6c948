use crate::models::Coach;

/// Named navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    LoginUser,
    UserHome,
    UserProfile,
    Schedule,
    ScheduleSuccess,
    MyAppointments,
    Reschedule,
    RescheduleSuccess,
    Cancel,
    CancelSuccess,
    Feedback,
    FeedbackSuccess,
    ContactUs,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::LoginUser => "/login-user",
            Route::UserHome => "/user-home",
            Route::UserProfile => "/user-profile",
            Route::Schedule => "/schedule",
            Route::ScheduleSuccess => "/schedule-success",
            Route::MyAppointments => "/myappointments",
            Route::Reschedule => "/reschedule",
            Route::RescheduleSuccess => "/reschedule-success",
            Route::Cancel => "/cancel",
            Route::CancelSuccess => "/cancel-success",
            Route::Feedback => "/feedback",
            Route::FeedbackSuccess => "/feedback-success",
            Route::ContactUs => "/contact-us",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Navigation side effects, kept behind a narrow seam so pages stay
/// free of terminal concerns
pub trait Navigator {
    fn navigate(&mut self, route: Route);

    /// Navigate while carrying a coach as route state
    fn navigate_with_coach(&mut self, route: Route, coach: Coach);
}

/// Navigator that records requests; backs the terminal front end and
/// the page tests
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: Vec<(Route, Option<Coach>)>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Route> {
        self.requests.last().map(|(route, _)| route)
    }

    pub fn last_coach(&self) -> Option<&Coach> {
        self.requests.last().and_then(|(_, coach)| coach.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        tracing::debug!("navigating to {}", route);
        self.requests.push((route, None));
    }

    fn navigate_with_coach(&mut self, route: Route, coach: Coach) {
        tracing::debug!("navigating to {} with coach {}", route, coach.id);
        self.requests.push((route, Some(coach)));
    }
}
