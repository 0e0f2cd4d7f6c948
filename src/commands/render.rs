use colored::Colorize;
use console::pad_str;

use crate::models::{Appointment, Coach, Gender};

/// Spinner shown while a request is outstanding
pub fn render_spinner(message: &str) -> indicatif::ProgressBar {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

pub fn gender_icon(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "♂",
        Gender::Female => "♀",
    }
}

/// Render the coach roster as an aligned table
pub fn print_coaches(coaches: &[Coach]) {
    println!(
        "{}  {}  {}  {}",
        pad_str("ID", 8, console::Alignment::Left, None).bold(),
        pad_str("Name", 12, console::Alignment::Left, None).bold(),
        pad_str("Specialty", 22, console::Alignment::Left, None).bold(),
        pad_str("Phone", 18, console::Alignment::Left, None).bold(),
    );

    for coach in coaches {
        println!(
            "{}  {}  {}  {}",
            pad_str(&coach.id, 8, console::Alignment::Left, None),
            pad_str(
                &format!("{} {}", gender_icon(coach.gender), coach.name),
                12,
                console::Alignment::Left,
                None
            ),
            pad_str(&coach.specialty, 22, console::Alignment::Left, None),
            pad_str(&coach.phone, 18, console::Alignment::Left, None),
        );
    }

    println!();
    println!("{} coaches available", coaches.len());
}

pub fn print_coach_details(coach: &Coach) {
    println!("{}", coach.name.bold());
    println!();
    println!("  ID:        {}", coach.id);
    println!("  Specialty: {}", coach.specialty);
    println!("  Gender:    {}", coach.gender);
    println!("  Phone:     {}", coach.phone);

    if let Some(email) = &coach.email {
        println!("  Email:     {}", email);
    }
    if let Some(experience) = coach.experience {
        println!("  Experience: {} years", experience);
    }
    if let Some(rating) = coach.rating {
        println!("  Rating:    {:.1}/5", rating);
    }
    if let Some(bio) = &coach.bio {
        println!();
        println!("  {}", bio);
    }
    if let Some(availability) = &coach.availability {
        println!();
        println!("  Availability:");
        for slot in availability {
            println!("    - {}", slot);
        }
    }
}

pub fn print_appointment(appointment: &Appointment) {
    println!("Booking {}", appointment.id.bold());
    println!();
    println!("  Coach:  {} ({})", appointment.coach_name, appointment.coach_id);
    println!("  User:   {} ({})", appointment.user_name, appointment.user_id);
    println!("  Date:   {}", appointment.date);
    println!("  Slot:   {}", appointment.slot);
    println!("  Status: {}", appointment.status.to_string().cyan());

    if let Some(notes) = &appointment.notes {
        println!("  Notes:  {}", notes);
    }
}
