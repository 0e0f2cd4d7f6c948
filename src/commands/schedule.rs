use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{Input, Select};

use crate::api::CoachService;
use crate::commands::render::{self, render_spinner};
use crate::config::Config;
use crate::models::{Coach, UserProfile};
use crate::pages::{
    MyAppointmentsPage, RescheduleSuccessPage, SchedulePage, ScheduleSuccessPage, SLOTS,
};
use crate::router::RecordingNavigator;

#[derive(Args)]
pub struct ScheduleCommand {
    /// Coach ID to book with
    #[arg(short, long)]
    coach: Option<String>,
}

impl ScheduleCommand {
    pub async fn execute(self) -> Result<()> {
        println!("WeCare - Book an Appointment");
        println!();

        let config = Config::load()?;
        let service = CoachService::new(&config)?;

        let coach = match &self.coach {
            Some(id) => {
                let spinner = render_spinner("Loading coach...");
                let coach = service.get_coach_by_id(id).await;
                spinner.finish_and_clear();

                match coach {
                    Some(coach) => coach,
                    None => {
                        println!("Coach {} not found.", id);
                        return Ok(());
                    }
                }
            }
            None => {
                let spinner = render_spinner("Loading coaches...");
                let coaches = service.get_coaches().await;
                spinner.finish_and_clear();

                match pick_coach(coaches)? {
                    Some(coach) => coach,
                    None => {
                        println!("No coaches available right now.");
                        return Ok(());
                    }
                }
            }
        };

        println!();
        println!("Booking with {} ({})", coach.name, coach.specialty);
        println!();

        let mut page = SchedulePage::new();
        fill_schedule_form(&mut page)?;

        let mut nav = RecordingNavigator::new();
        if page.submit(&mut nav) {
            let user = UserProfile::sample();
            println!();
            println!("✓ {}", ScheduleSuccessPage.message());

            if let Some(appointment) =
                page.booking(&coach, &user.id, &user.name, &config.ui.date_format)
            {
                println!();
                render::print_appointment(&appointment);
            }
        } else {
            print_form_errors(&page);
        }

        Ok(())
    }
}

#[derive(Args)]
pub struct RescheduleCommand {}

impl RescheduleCommand {
    pub async fn execute(self) -> Result<()> {
        println!("WeCare - Reschedule Appointment");
        println!();

        let appointments = MyAppointmentsPage::new();
        render::print_appointment(&appointments.appointment);
        println!();

        let mut page = SchedulePage::reschedule();
        fill_schedule_form(&mut page)?;

        let mut nav = RecordingNavigator::new();
        if page.submit(&mut nav) {
            println!();
            println!("✓ {}", RescheduleSuccessPage.message());
            println!("  New date: {} at {}", page.date.value, page.slot.value);
        } else {
            print_form_errors(&page);
        }

        Ok(())
    }
}

fn pick_coach(coaches: Vec<Coach>) -> Result<Option<Coach>> {
    if coaches.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = coaches
        .iter()
        .map(|c| format!("{} - {} ({})", c.id, c.name, c.specialty))
        .collect();

    let index = Select::new()
        .with_prompt("Choose a coach")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(coaches.into_iter().nth(index))
}

fn fill_schedule_form(page: &mut SchedulePage) -> Result<()> {
    let date: String = Input::new()
        .with_prompt("Date (YYYY-MM-DD)")
        .validate_with(|value: &String| -> Result<(), &str> {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "Enter a date as YYYY-MM-DD")
        })
        .interact_text()?;
    page.date.set(date);

    let slot_index = Select::new()
        .with_prompt("Time slot")
        .items(&SLOTS)
        .default(0)
        .interact()?;
    page.slot.set(SLOTS[slot_index]);

    Ok(())
}

fn print_form_errors(page: &SchedulePage) {
    println!();
    for field in [&page.date, &page.slot] {
        if let Some(message) = field.visible_error() {
            println!("✗ {}: {}", field.name, message);
        }
    }
}
