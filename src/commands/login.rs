use anyhow::Result;
use clap::Args;
use dialoguer::Password;

use crate::api::CoachService;
use crate::commands::render::{self, render_spinner};
use crate::config::Config;
use crate::pages::{LoginPage, UserHomePage};
use crate::router::RecordingNavigator;

#[derive(Args)]
pub struct LoginCommand {}

impl LoginCommand {
    pub async fn execute(self) -> Result<()> {
        println!("WeCare - Login");
        println!();

        let config = Config::load()?;
        let mut page = LoginPage::new(&config.auth.user_id);

        println!("User ID: {}", page.user_id.value);

        let password = Password::new().with_prompt("Password").interact()?;
        page.password.set(password);

        if let Some(message) = page.password.visible_error() {
            println!("  {}", message);
        }

        let mut nav = RecordingNavigator::new();

        if page.submit(&config.auth.password, &mut nav) {
            println!();
            println!("✓ Login successful!");
            println!();

            // The login view hands off to user-home
            let service = CoachService::new(&config)?;
            let mut home = UserHomePage::new();

            let spinner = render_spinner("Loading coaches...");
            home.load(&service).await;
            spinner.finish_and_clear();

            if let Some(error) = &home.error {
                println!("✗ {}", error);
            } else {
                render::print_coaches(&home.coaches);
            }

            Ok(())
        } else {
            println!();
            println!("✗ {}", page.login_error.unwrap_or_default());

            Ok(())
        }
    }
}
