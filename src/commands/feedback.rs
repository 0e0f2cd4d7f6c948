use anyhow::Result;
use clap::Args;
use dialoguer::{Input, Select};

use crate::forms::Field;
use crate::pages::{FeedbackPage, FeedbackSuccessPage, CATEGORIES, COUNTRY_CODES, EXPERIENCES};
use crate::router::RecordingNavigator;

#[derive(Args)]
pub struct FeedbackCommand {}

impl FeedbackCommand {
    pub async fn execute(self) -> Result<()> {
        println!("WeCare - Feedback");
        println!();

        let mut page = FeedbackPage::new();

        prompt_field(&mut page.name, "Name")?;
        prompt_field(&mut page.email, "Email")?;

        let code = Select::new()
            .with_prompt("Country code")
            .items(&COUNTRY_CODES)
            .default(0)
            .interact()?;
        page.country_code.set(COUNTRY_CODES[code]);

        prompt_field(&mut page.phone, "Phone (10 digits)")?;

        let category = Select::new()
            .with_prompt("Category")
            .items(&CATEGORIES)
            .default(0)
            .interact()?;
        page.category.set(CATEGORIES[category]);

        let experience = Select::new()
            .with_prompt("Experience")
            .items(&EXPERIENCES)
            .default(0)
            .interact()?;
        page.experience.set(EXPERIENCES[experience]);

        prompt_field(&mut page.feedback, "Feedback (max 50 characters)")?;

        let mut nav = RecordingNavigator::new();

        if page.submit(&mut nav) {
            println!();
            println!("✓ {}", FeedbackSuccessPage.message());
        } else {
            println!();
            println!("✗ Please correct the highlighted fields and try again.");
        }

        Ok(())
    }
}

/// Prompt for one field, re-asking until its rules pass
fn prompt_field(field: &mut Field, prompt: &str) -> Result<()> {
    let probe = field.clone();

    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(move |value: &String| -> Result<(), String> {
            let mut probe = probe.clone();
            probe.set(value.clone());
            match probe.error() {
                Some(message) => Err(message),
                None => Ok(()),
            }
        })
        .interact_text()?;

    field.set(value);

    Ok(())
}
