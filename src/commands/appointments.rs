use anyhow::Result;
use dialoguer::Confirm;

use crate::commands::render;
use crate::pages::{CancelPage, CancelSuccessPage, MyAppointmentsPage};
use crate::router::RecordingNavigator;

pub async fn show_appointments() -> Result<()> {
    println!("WeCare - My Appointments");
    println!();

    let page = MyAppointmentsPage::new();
    render::print_appointment(&page.appointment);

    println!();
    println!("Use 'wecare reschedule' or 'wecare cancel' to change this booking.");

    Ok(())
}

pub async fn cancel_appointment(force: bool) -> Result<()> {
    println!("WeCare - Cancel Appointment");
    println!();

    let appointments = MyAppointmentsPage::new();
    render::print_appointment(&appointments.appointment);
    println!();

    let page = CancelPage;
    let mut nav = RecordingNavigator::new();

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Cancel this appointment?")
            .default(false)
            .interact()?;

        if !confirmed {
            page.go_back(&mut nav);
            println!("Appointment kept.");
            return Ok(());
        }
    }

    page.confirm_cancel(&mut nav);

    println!();
    println!("✓ {}", CancelSuccessPage.message());

    Ok(())
}
