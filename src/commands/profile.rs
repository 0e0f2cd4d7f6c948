use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::commands::render;
use crate::pages::UserProfilePage;

#[derive(Args)]
pub struct ProfileCommand {
    /// Coach ID to view instead of your own profile
    #[arg(short, long)]
    coach: Option<String>,
}

impl ProfileCommand {
    pub async fn execute(self) -> Result<()> {
        if let Some(id) = self.coach {
            return view_coach_profile(&id).await;
        }

        let page = UserProfilePage::new();
        let profile = &page.profile;

        println!("{}", profile.name.bold());
        println!();
        println!("  ID:      {}", profile.id);
        println!("  DOB:     {}", profile.dob);
        println!("  Email:   {}", profile.email);
        println!("  Phone:   {}", profile.phone);
        println!("  Address: {}", profile.address);
        println!("  Pincode: {}", profile.pincode);
        println!("  Gender:  {}", profile.gender);

        Ok(())
    }
}

async fn view_coach_profile(id: &str) -> Result<()> {
    use crate::api::CoachService;
    use crate::commands::render::render_spinner;
    use crate::config::Config;

    let config = Config::load()?;
    let service = CoachService::new(&config)?;

    let spinner = render_spinner("Loading coach...");
    let coach = service.get_coach_by_id(id).await;
    spinner.finish_and_clear();

    match coach {
        Some(coach) => {
            let page = UserProfilePage::with_coach(coach);
            if let Some(coach) = &page.coach {
                render::print_coach_details(coach);
            }
        }
        None => println!("Coach {} not found.", id),
    }

    Ok(())
}
