mod common;

use common::load_catalog;
use pgmastery::catalog::Level;
use pgmastery::enroll::{
    whatsapp_link, ContactDetails, EnrollmentRecord, SheetSink, SyncStatus, ValidationError,
};

fn details() -> ContactDetails {
    ContactDetails {
        name: "Priya Sharma".to_string(),
        email: "priya@example.com".to_string(),
        phone: "9000000001".to_string(),
    }
}

#[test]
fn record_carries_the_course_price() {
    let catalog = load_catalog();
    for level in Level::ALL {
        let course = catalog.course(level).unwrap();
        let record = EnrollmentRecord::new(&details(), course);
        assert_eq!(record.amount, course.price);
        assert_eq!(record.course_id, course.id);
        assert!(record.transaction_id.starts_with("PGM-"));
    }
}

#[test]
fn transaction_ids_are_distinct_across_records() {
    let catalog = load_catalog();
    let course = catalog.course(Level::L1).unwrap();
    let a = EnrollmentRecord::new(&details(), course);
    let b = EnrollmentRecord::new(&details(), course);
    assert_ne!(a.transaction_id, b.transaction_id);
}

#[test]
fn validation_rejects_short_and_non_numeric_phones() {
    let mut bad = details();
    bad.phone = "90000".to_string();
    assert_eq!(
        bad.validate().unwrap_err(),
        vec![ValidationError::PhoneInvalid]
    );

    bad.phone = "90000x0001".to_string();
    assert_eq!(
        bad.validate().unwrap_err(),
        vec![ValidationError::PhoneInvalid]
    );
}

#[test]
fn whatsapp_link_targets_the_admin_number() {
    let catalog = load_catalog();
    let course = catalog.course(Level::L3).unwrap();
    let record = EnrollmentRecord::new(&details(), course);
    let link = whatsapp_link("911234567890", &record);
    assert!(link.starts_with("https://wa.me/911234567890?text="));
    assert!(link.contains(&urlencoding::encode(&course.title).into_owned()));
}

#[test]
fn rejected_details_stay_in_the_form() {
    let catalog = load_catalog();
    let course = catalog.course(Level::L1).unwrap();

    let mut bad = details();
    bad.phone = "123".to_string();
    let errors = bad.validate().unwrap_err();

    let html = pgmastery::views::enroll::details_form(course, &bad, &errors).into_string();
    assert!(html.contains("Priya Sharma"));
    assert!(html.contains("priya@example.com"));
    assert!(html.contains("value=\"123\""));
    assert!(html.contains("aria-invalid"));
}

#[tokio::test]
async fn unreachable_webhook_degrades_to_pending() {
    let catalog = load_catalog();
    let course = catalog.course(Level::L2).unwrap();
    let record = EnrollmentRecord::new(&details(), course);

    // Reserved TEST-NET-1 address, nothing listens there.
    let sink = SheetSink::new(Some("http://192.0.2.1:9/hook".to_string()));
    assert_eq!(sink.submit(&record).await, SyncStatus::Pending);
}
