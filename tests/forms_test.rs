use wecare_cli::pages::{FeedbackPage, LoginPage, SchedulePage, SLOTS};
use wecare_cli::router::{RecordingNavigator, Route};

#[test]
fn test_login_demo_credential_navigates_home() {
    let mut page = LoginPage::new("UI-001");
    let mut nav = RecordingNavigator::new();

    page.password.set("user@123");
    assert!(page.submit("user@123", &mut nav));

    assert_eq!(nav.last(), Some(&Route::UserHome));
    assert!(page.login_error.is_none());
}

#[test]
fn test_login_any_other_password_sets_fixed_error() {
    for wrong in ["user@124", "password", "", "USER@123"] {
        let mut page = LoginPage::new("UI-001");
        let mut nav = RecordingNavigator::new();

        page.password.set(wrong);
        assert!(!page.submit("user@123", &mut nav));

        assert!(nav.is_empty(), "{:?} must not navigate", wrong);
        assert_eq!(
            page.login_error.as_deref(),
            Some("Invalid password. Please try again.")
        );
    }
}

#[test]
fn test_schedule_requires_both_date_and_slot() {
    // Both populated: confirmation signal fires
    let mut page = SchedulePage::new();
    let mut nav = RecordingNavigator::new();
    page.date.set("2022-03-16");
    page.slot.set(SLOTS[0]);
    assert!(page.submit(&mut nav));
    assert!(page.confirmed);

    // Date only
    let mut page = SchedulePage::new();
    let mut nav = RecordingNavigator::new();
    page.date.set("2022-03-16");
    assert!(!page.submit(&mut nav));
    assert!(!page.confirmed);
    assert!(nav.is_empty());
    assert!(page.date.touched && page.slot.touched);

    // Slot only
    let mut page = SchedulePage::new();
    let mut nav = RecordingNavigator::new();
    page.slot.set(SLOTS[1]);
    assert!(!page.submit(&mut nav));
    assert!(!page.confirmed);
    assert!(nav.is_empty());
}

#[test]
fn test_feedback_form_aggregate_validity() {
    let mut page = FeedbackPage::new();

    // Every required field empty
    assert!(!page.is_valid());

    page.name.set("David");
    page.email.set("david@gmail.com");
    page.country_code.set("+61");
    page.phone.set("1234567890");
    page.category.set("Confidence Issues");
    page.experience.set("Good");
    page.feedback.set("Helpful session");

    assert!(page.is_valid());

    // Any single empty required field flips the aggregate
    page.phone.set("");
    assert!(!page.is_valid());
    page.phone.set("1234567890");
    assert!(page.is_valid());
}

#[test]
fn test_feedback_text_length_boundary() {
    let mut page = FeedbackPage::new();
    page.name.set("David");
    page.email.set("david@gmail.com");
    page.country_code.set("+61");
    page.phone.set("1234567890");
    page.category.set("Confidence Issues");
    page.experience.set("Good");

    page.feedback.set("a".repeat(50));
    assert!(page.is_valid());

    page.feedback.set("a".repeat(51));
    assert!(!page.is_valid());
}
