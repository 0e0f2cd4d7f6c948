use regex::Regex;

/// Symbols accepted by the password composition rule
const PASSWORD_SYMBOLS: &str = r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##;

/// Declarative per-field validation rule.
///
/// Rules other than `Required` accept an empty value; presence is its
/// own rule, so optional fields validate their shape only once filled.
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Pattern { regex: Regex, message: &'static str },
    HasLetter,
    HasDigit,
    HasSymbol,
}

impl Rule {
    pub fn email() -> Self {
        Rule::Pattern {
            regex: Regex::new(
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
            )
            .unwrap(),
            message: "Enter a valid email address",
        }
    }

    pub fn phone() -> Self {
        Rule::Pattern {
            regex: Regex::new(r"^\d{10}$").unwrap(),
            message: "Phone number must be exactly 10 digits",
        }
    }

    fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            return match self {
                Rule::Required => Err("This field is required".to_string()),
                _ => Ok(()),
            };
        }

        match self {
            Rule::Required => Ok(()),
            Rule::MinLength(min) => {
                if value.chars().count() < *min {
                    Err(format!("Must be at least {} characters", min))
                } else {
                    Ok(())
                }
            }
            Rule::MaxLength(max) => {
                if value.chars().count() > *max {
                    Err(format!("Must be at most {} characters", max))
                } else {
                    Ok(())
                }
            }
            Rule::Pattern { regex, message } => {
                if regex.is_match(value) {
                    Ok(())
                } else {
                    Err(message.to_string())
                }
            }
            Rule::HasLetter => {
                if value.chars().any(|c| c.is_ascii_alphabetic()) {
                    Ok(())
                } else {
                    Err("Must contain at least one letter".to_string())
                }
            }
            Rule::HasDigit => {
                if value.chars().any(|c| c.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err("Must contain at least one digit".to_string())
                }
            }
            Rule::HasSymbol => {
                if value.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
                    Ok(())
                } else {
                    Err("Must contain at least one symbol".to_string())
                }
            }
        }
    }
}

/// A named form field: current value, touched flag, and its rules
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
    pub touched: bool,
    rules: Vec<Rule>,
}

impl Field {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self {
            name,
            value: String::new(),
            touched: false,
            rules,
        }
    }

    pub fn with_value(name: &'static str, value: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name,
            value: value.into(),
            touched: false,
            rules,
        }
    }

    /// Update the value; user input always marks the field touched
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = true;
    }

    pub fn touch(&mut self) {
        self.touched = true;
    }

    /// First failing rule's message, regardless of touched state
    pub fn error(&self) -> Option<String> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(&self.value).err())
    }

    /// Message to render: only touched fields show their errors
    pub fn visible_error(&self) -> Option<String> {
        if self.touched {
            self.error()
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error().is_none()
    }
}

/// Aggregate form validity: logical AND of all field validities
pub fn form_valid(fields: &[&Field]) -> bool {
    fields.iter().all(|field| field.is_valid())
}

/// Mark every field touched so validation messages become visible
pub fn touch_all(fields: &mut [&mut Field]) {
    for field in fields {
        field.touch();
    }
}
