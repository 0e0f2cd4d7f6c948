use crate::forms::{Field, Rule};
use crate::router::{Navigator, Route};

const LOGIN_ERROR: &str = "Invalid password. Please try again.";

/// Login view: fixed user id, password checked against the configured
/// demo credential
pub struct LoginPage {
    /// Shown but not editable
    pub user_id: Field,
    pub password: Field,
    pub login_error: Option<String>,
}

impl LoginPage {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: Field::with_value("id", user_id, vec![Rule::Required]),
            password: Field::new(
                "password",
                vec![
                    Rule::Required,
                    Rule::MinLength(5),
                    Rule::MaxLength(10),
                    Rule::HasLetter,
                    Rule::HasDigit,
                    Rule::HasSymbol,
                ],
            ),
            login_error: None,
        }
    }

    /// Submit checks the credential directly; the field rules only
    /// drive message display
    pub fn submit(&mut self, expected_password: &str, nav: &mut dyn Navigator) -> bool {
        if self.password.value == expected_password {
            self.login_error = None;
            nav.navigate(Route::UserHome);
            true
        } else {
            self.login_error = Some(LOGIN_ERROR.to_string());
            false
        }
    }
}
