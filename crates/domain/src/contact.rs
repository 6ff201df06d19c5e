//! Contact-form payload types.

use serde::{Deserialize, Serialize};

/// Keys the API echoes back for a stored contact record.
pub const CONTACT_RECORD_KEYS: [&str; 7] = [
    "id",
    "firstName",
    "lastName",
    "email",
    "subject",
    "message",
    "createdAt",
];

/// A complete contact-form submission payload.
///
/// Field names serialize in the camelCase form the API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    /// Sender's first name.
    pub first_name: String,
    /// Sender's last name.
    pub last_name: String,
    /// Sender's email address.
    pub email: String,
    /// Message subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Returns the JSON wire representation of the form.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "firstName": self.first_name,
            "lastName": self.last_name,
            "email": self.email,
            "subject": self.subject,
            "message": self.message,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ContactForm {
        ContactForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            subject: "Portfolio Inquiry".to_string(),
            message: "Interested in your work.".to_string(),
        }
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = sample().to_json();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["lastName"], "Doe");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_serde_round_trip_matches_to_json() {
        let form = sample();
        let via_serde = serde_json::to_value(&form).unwrap();
        assert_eq!(via_serde, form.to_json());
    }
}
