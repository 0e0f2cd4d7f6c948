use chrono::NaiveDate;

use crate::forms::{form_valid, touch_all, Field, Rule};
use crate::models::{Appointment, Coach};
use crate::router::{Navigator, Route};

/// Bookable time slots
pub const SLOTS: [&str; 6] = [
    "9 AM to 10 AM",
    "10 AM to 11 AM",
    "11 AM to 12 PM",
    "2 PM to 3 PM",
    "3 PM to 4 PM",
    "4 PM to 5 PM",
];

/// Appointment booking form: date and slot, both required.
///
/// The same form backs rescheduling; only the confirmation destination
/// differs.
pub struct SchedulePage {
    pub date: Field,
    pub slot: Field,
    pub confirmed: bool,
    success_route: Route,
}

impl SchedulePage {
    pub fn new() -> Self {
        Self::with_success_route(Route::ScheduleSuccess)
    }

    pub fn reschedule() -> Self {
        Self::with_success_route(Route::RescheduleSuccess)
    }

    fn with_success_route(success_route: Route) -> Self {
        Self {
            date: Field::new("date", vec![Rule::Required]),
            slot: Field::new("slot", vec![Rule::Required]),
            confirmed: false,
            success_route,
        }
    }

    pub fn is_valid(&self) -> bool {
        form_valid(&[&self.date, &self.slot])
    }

    /// Valid submit raises the confirmation signal and navigates to
    /// the success view; invalid submit only reveals the messages
    pub fn submit(&mut self, nav: &mut dyn Navigator) -> bool {
        if self.is_valid() {
            self.confirmed = true;
            nav.navigate(self.success_route);
            true
        } else {
            touch_all(&mut [&mut self.date, &mut self.slot]);
            false
        }
    }

    /// Turn a confirmed form into a fresh booking. None until the form
    /// was confirmed or if the date text is not an ISO date.
    pub fn booking(
        &self,
        coach: &Coach,
        user_id: &str,
        user_name: &str,
        date_format: &str,
    ) -> Option<Appointment> {
        if !self.confirmed {
            return None;
        }

        let date = NaiveDate::parse_from_str(&self.date.value, "%Y-%m-%d").ok()?;
        Some(Appointment::booked(
            coach,
            user_id,
            user_name,
            date,
            &self.slot.value,
            date_format,
        ))
    }
}

impl Default for SchedulePage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use crate::router::RecordingNavigator;

    #[test]
    fn test_submit_with_both_fields_confirms() {
        let mut page = SchedulePage::new();
        let mut nav = RecordingNavigator::new();

        page.date.set("2022-03-16");
        page.slot.set(SLOTS[0]);

        assert!(page.submit(&mut nav));
        assert!(page.confirmed);
        assert_eq!(nav.last(), Some(&Route::ScheduleSuccess));
    }

    #[test]
    fn test_submit_with_missing_field_touches_all() {
        let mut page = SchedulePage::new();
        let mut nav = RecordingNavigator::new();

        page.date.set("2022-03-16");

        assert!(!page.submit(&mut nav));
        assert!(!page.confirmed);
        assert!(nav.is_empty());
        assert!(page.date.touched && page.slot.touched);
        assert!(page.slot.visible_error().is_some());
    }

    #[test]
    fn test_reschedule_confirms_to_reschedule_success() {
        let mut page = SchedulePage::reschedule();
        let mut nav = RecordingNavigator::new();

        page.date.set("2022-03-20");
        page.slot.set(SLOTS[3]);

        assert!(page.submit(&mut nav));
        assert_eq!(nav.last(), Some(&Route::RescheduleSuccess));
    }

    #[test]
    fn test_booking_from_confirmed_form() {
        let mut page = SchedulePage::new();
        let mut nav = RecordingNavigator::new();
        let coach = Coach::fallback_roster().remove(0);

        // Not confirmed yet
        assert!(page.booking(&coach, "UI-0001", "David", "%a %b %d %Y").is_none());

        page.date.set("2022-03-16");
        page.slot.set(SLOTS[0]);
        page.submit(&mut nav);

        let appointment = page
            .booking(&coach, "UI-0001", "David", "%a %b %d %Y")
            .unwrap();
        assert_eq!(appointment.coach_name, "Rose");
        assert_eq!(appointment.date, "Wed Mar 16 2022");
        assert_eq!(appointment.slot, "9 AM to 10 AM");
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    }
}
