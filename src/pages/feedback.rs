use crate::forms::{form_valid, touch_all, Field, Rule};
use crate::router::{Navigator, Route};

pub const COUNTRY_CODES: [&str; 5] = ["+91", "+1", "+44", "+61", "+852"];

pub const CATEGORIES: [&str; 4] = [
    "Confidence Issues",
    "Depression Issues",
    "Overweight Issues",
    "Hypertension Issues",
];

pub const EXPERIENCES: [&str; 3] = ["Good", "Average", "Bad"];

/// Feedback form. Submissions are transient: a valid submit only
/// navigates to the confirmation view.
pub struct FeedbackPage {
    pub name: Field,
    pub email: Field,
    pub country_code: Field,
    pub phone: Field,
    pub category: Field,
    pub experience: Field,
    pub feedback: Field,
}

impl FeedbackPage {
    pub fn new() -> Self {
        Self {
            name: Field::new(
                "name",
                vec![Rule::Required, Rule::MinLength(3), Rule::MaxLength(50)],
            ),
            email: Field::new("email", vec![Rule::Required, Rule::email()]),
            country_code: Field::new("countryCode", vec![Rule::Required]),
            phone: Field::new("phone", vec![Rule::Required, Rule::phone()]),
            category: Field::new("category", vec![Rule::Required]),
            experience: Field::new("experience", vec![Rule::Required]),
            feedback: Field::new("feedback", vec![Rule::Required, Rule::MaxLength(50)]),
        }
    }

    fn fields(&self) -> [&Field; 7] {
        [
            &self.name,
            &self.email,
            &self.country_code,
            &self.phone,
            &self.category,
            &self.experience,
            &self.feedback,
        ]
    }

    pub fn is_valid(&self) -> bool {
        form_valid(&self.fields())
    }

    pub fn submit(&mut self, nav: &mut dyn Navigator) -> bool {
        if self.is_valid() {
            nav.navigate(Route::FeedbackSuccess);
            true
        } else {
            touch_all(&mut [
                &mut self.name,
                &mut self.email,
                &mut self.country_code,
                &mut self.phone,
                &mut self.category,
                &mut self.experience,
                &mut self.feedback,
            ]);
            false
        }
    }
}

impl Default for FeedbackPage {
    fn default() -> Self {
        Self::new()
    }
}
