use serde::{Deserialize, Serialize};

use super::Gender;

/// Signed-in user's display record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub pincode: String,
    pub gender: Gender,
}

impl UserProfile {
    /// Demo user shown when no profile state is carried into the view
    pub fn sample() -> Self {
        Self {
            id: "UI-0001".to_string(),
            name: "David".to_string(),
            dob: "Jan 01 1994".to_string(),
            email: "david@gmail.com".to_string(),
            phone: "+61 1234567899".to_string(),
            address: "Sydney".to_string(),
            pincode: "2121".to_string(),
            gender: Gender::Male,
        }
    }
}
