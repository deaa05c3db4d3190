//! Enrollment intake: contact validation, the spreadsheet sink, and the
//! WhatsApp handoff link.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use crate::catalog::Course;
use crate::names;

#[derive(Clone, Debug, Default)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValidationError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    PhoneInvalid,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::NameRequired => "name is required",
            ValidationError::EmailRequired => "email is required",
            ValidationError::EmailInvalid => "email address looks invalid",
            ValidationError::PhoneInvalid => "phone number must be exactly 10 digits",
        };
        f.write_str(msg)
    }
}

impl ContactDetails {
    /// Normalizes whitespace and checks each field. All problems are
    /// reported at once so the form can show them inline together.
    pub fn validate(&self) -> Result<ContactDetails, Vec<ValidationError>> {
        let details = ContactDetails {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        };

        let mut errors = Vec::new();
        if details.name.is_empty() {
            errors.push(ValidationError::NameRequired);
        }
        if details.email.is_empty() {
            errors.push(ValidationError::EmailRequired);
        } else if !details.email.contains('@') {
            errors.push(ValidationError::EmailInvalid);
        }
        let phone_ok = details.phone.len() == names::PHONE_DIGITS
            && details.phone.chars().all(|c| c.is_ascii_digit());
        if !phone_ok {
            errors.push(ValidationError::PhoneInvalid);
        }

        if errors.is_empty() {
            Ok(details)
        } else {
            Err(errors)
        }
    }
}

/// Whether the record made it into the spreadsheet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SyncStatus {
    Synced,
    Pending,
}

impl SyncStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Synced => "SYNCED",
            SyncStatus::Pending => "PENDING",
        }
    }
}

/// One completed enrollment, as posted to the sheet and echoed to the
/// visitor.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
    pub transaction_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course_id: String,
    pub course_title: String,
    pub amount: u32,
}

impl EnrollmentRecord {
    pub fn new(details: &ContactDetails, course: &Course) -> EnrollmentRecord {
        EnrollmentRecord {
            transaction_id: transaction_id(),
            name: details.name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
            course_id: course.id.clone(),
            course_title: course.title.clone(),
            amount: course.price,
        }
    }
}

/// Random reference of the form `PGM-XXXXXXXX` over uppercase base36.
pub fn transaction_id() -> String {
    const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..names::TRANSACTION_ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", names::TRANSACTION_ID_PREFIX, suffix)
}

/// Posts enrollment records to the configured spreadsheet webhook.
///
/// One attempt with a short timeout; a failure never blocks the visitor's
/// confirmation, it only marks the record `Pending` for manual follow-up.
#[derive(Clone)]
pub struct SheetSink {
    client: reqwest::Client,
    url: Option<String>,
}

impl SheetSink {
    pub fn new(url: Option<String>) -> SheetSink {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_default();
        SheetSink { client, url }
    }

    pub async fn submit(&self, record: &EnrollmentRecord) -> SyncStatus {
        let Some(url) = &self.url else {
            tracing::warn!(
                transaction_id = %record.transaction_id,
                "no sheet webhook configured, enrollment left pending"
            );
            return SyncStatus::Pending;
        };

        match self.client.post(url).json(record).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(
                    transaction_id = %record.transaction_id,
                    "enrollment synced to sheet"
                );
                SyncStatus::Synced
            }
            Ok(response) => {
                tracing::error!(
                    transaction_id = %record.transaction_id,
                    status = %response.status(),
                    "sheet webhook rejected enrollment"
                );
                SyncStatus::Pending
            }
            Err(e) => {
                tracing::error!(
                    transaction_id = %record.transaction_id,
                    "sheet webhook unreachable: {e}"
                );
                SyncStatus::Pending
            }
        }
    }
}

/// Deep link that opens a WhatsApp chat with the admin, prefilled with the
/// enrollment summary.
pub fn whatsapp_link(admin: &str, record: &EnrollmentRecord) -> String {
    let message = format!(
        "Hi! I just enrolled in {} (ref {}). Name: {}, amount: \u{20b9}{}.",
        record.course_title, record.transaction_id, record.name, record.amount
    );
    format!("https://wa.me/{admin}?text={}", urlencoding::encode(&message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Level};

    fn valid_details() -> ContactDetails {
        ContactDetails {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    #[test]
    fn accepts_valid_details_and_trims() {
        let details = ContactDetails {
            name: "  Asha Rao  ".to_string(),
            email: " asha@example.com ".to_string(),
            phone: " 9876543210 ".to_string(),
        };
        let cleaned = details.validate().unwrap();
        assert_eq!(cleaned.name, "Asha Rao");
        assert_eq!(cleaned.phone, "9876543210");
    }

    #[test]
    fn rejects_bad_phone_numbers() {
        for phone in ["98765", "98765432101", "98765abc10", ""] {
            let details = ContactDetails {
                phone: phone.to_string(),
                ..valid_details()
            };
            let errors = details.validate().unwrap_err();
            assert!(errors.contains(&ValidationError::PhoneInvalid), "{phone:?}");
        }
    }

    #[test]
    fn reports_all_errors_at_once() {
        let details = ContactDetails::default();
        let errors = details.validate().unwrap_err();
        assert!(errors.contains(&ValidationError::NameRequired));
        assert!(errors.contains(&ValidationError::EmailRequired));
        assert!(errors.contains(&ValidationError::PhoneInvalid));
    }

    #[test]
    fn email_without_at_sign_is_invalid() {
        let details = ContactDetails {
            email: "asha.example.com".to_string(),
            ..valid_details()
        };
        let errors = details.validate().unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmailInvalid]);
    }

    #[test]
    fn transaction_ids_have_the_expected_shape() {
        let id = transaction_id();
        let suffix = id.strip_prefix("PGM-").unwrap();
        assert_eq!(suffix.len(), names::TRANSACTION_ID_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn whatsapp_link_encodes_the_summary() {
        let catalog = Catalog::load().unwrap();
        let course = catalog.course(Level::L2).unwrap();
        let record = EnrollmentRecord::new(&valid_details(), course);
        let link = whatsapp_link("918019753301", &record);
        assert!(link.starts_with("https://wa.me/918019753301?text="));
        assert!(link.contains(&urlencoding::encode(&record.transaction_id).into_owned()));
        assert!(!link.contains(' '));
    }

    #[tokio::test]
    async fn missing_webhook_leaves_record_pending() {
        let catalog = Catalog::load().unwrap();
        let course = catalog.course(Level::L1).unwrap();
        let record = EnrollmentRecord::new(&valid_details(), course);
        let sink = SheetSink::new(None);
        assert_eq!(sink.submit(&record).await, SyncStatus::Pending);
    }
}
