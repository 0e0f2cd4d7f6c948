use anyhow::Result;

use crate::api::CoachService;
use crate::commands::render::{self, render_spinner};
use crate::config::Config;

pub async fn list_coaches(specialty: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let service = CoachService::new(&config)?;

    let spinner = render_spinner("Loading coaches...");
    let coaches = match &specialty {
        Some(value) => service.get_coaches_by_specialty(value).await,
        None => service.get_coaches().await,
    };
    spinner.finish_and_clear();

    if coaches.is_empty() {
        match specialty {
            Some(value) => println!("No coaches found for specialty '{}'.", value),
            None => println!("No coaches available right now."),
        }
        return Ok(());
    }

    render::print_coaches(&coaches);

    Ok(())
}

pub async fn show_coach(id: &str) -> Result<()> {
    let config = Config::load()?;
    let service = CoachService::new(&config)?;

    let spinner = render_spinner("Loading coach...");
    let coach = service.get_coach_by_id(id).await;
    spinner.finish_and_clear();

    match coach {
        Some(coach) => render::print_coach_details(&coach),
        None => println!("Coach {} not found.", id),
    }

    Ok(())
}
