use crate::api::CoachService;
use crate::models::Coach;
use crate::router::{Navigator, Route};

/// Coach browsing view: roster, loading flag, and a retryable error
/// state
pub struct UserHomePage {
    pub coaches: Vec<Coach>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for UserHomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl UserHomePage {
    pub fn new() -> Self {
        Self {
            coaches: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Load the roster. The service degrades failures to its fallback,
    /// so the only irrecoverable display state is an empty roster.
    pub async fn load(&mut self, service: &CoachService) {
        self.loading = true;
        self.error = None;

        let coaches = service.get_coaches().await;
        if coaches.is_empty() {
            self.error = Some("Failed to load coaches. Please try again later.".to_string());
        }

        self.coaches = coaches;
        self.loading = false;
    }

    /// User-triggered re-invocation of the same fetch
    pub async fn retry(&mut self, service: &CoachService) {
        self.load(service).await;
    }

    pub fn book_appointment(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::Schedule);
    }

    pub fn on_coach_click(&self, nav: &mut dyn Navigator, coach: &Coach) {
        nav.navigate_with_coach(Route::UserProfile, coach.clone());
    }
}
