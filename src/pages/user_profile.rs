use crate::models::{Coach, UserProfile};
use crate::router::{Navigator, Route};

/// Profile view: shows the coach carried in as route state, or the
/// signed-in demo user when none was carried
pub struct UserProfilePage {
    pub coach: Option<Coach>,
    pub profile: UserProfile,
}

impl UserProfilePage {
    pub fn new() -> Self {
        Self {
            coach: None,
            profile: UserProfile::sample(),
        }
    }

    pub fn with_coach(coach: Coach) -> Self {
        Self {
            coach: Some(coach),
            profile: UserProfile::sample(),
        }
    }

    pub fn go_back(&self, nav: &mut dyn Navigator) {
        nav.navigate(Route::UserHome);
    }
}

impl Default for UserProfilePage {
    fn default() -> Self {
        Self::new()
    }
}
