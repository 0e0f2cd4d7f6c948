use serde::{Deserialize, Serialize};

/// Coach record as served by the coaches resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub specialty: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Coach {
    fn sample(id: &str, name: &str, phone: &str, specialty: &str, gender: Gender) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            specialty: specialty.to_string(),
            gender,
            email: None,
            experience: None,
            rating: None,
            bio: None,
            availability: None,
        }
    }

    /// Substitute roster shown when the coaches resource is unreachable
    pub fn fallback_roster() -> Vec<Coach> {
        vec![
            Self::sample("CI-0001", "Rose", "+44 1234567890", "Confidence Issues", Gender::Female),
            Self::sample("CI-0002", "John", "+61 1234567891", "Depression Issues", Gender::Male),
            Self::sample("CI-0003", "Mary", "+852 1234567890", "Depression Issues", Gender::Female),
            Self::sample("CI-0004", "Sarah", "+1 1234567892", "Career Guidance", Gender::Female),
            Self::sample("CI-0005", "Michael", "+49 1234567893", "Stress Management", Gender::Male),
            Self::sample("CI-0006", "Emma", "+33 1234567894", "Relationship Issues", Gender::Female),
        ]
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(anyhow::anyhow!("Invalid gender: {}", s)),
        }
    }
}
