//! Form Helpers
//!
//! Local validation and field conversions shared by dialogs and pages.
//! Nothing here talks to the network.

use chrono::{DateTime, NaiveDate};

use crate::api::UpdateCardArgs;
use crate::error::ValidationError;
use crate::models::{Card, Priority};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Trimmed value, or `Required` if blank
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// `None` for blank input
pub fn optional(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub fn validate_registration(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    required("Full name", name)?;
    required("Email", email)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

/// "bug, , feature " -> ["bug", "feature"]
pub fn parse_labels(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Value for an `<input type="date">` from a stored due date
pub fn due_date_input(due: Option<&str>) -> String {
    due.map(|d| d.split('T').next().unwrap_or_default().to_string())
        .unwrap_or_default()
}

fn parse_due(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(due_date_input(Some(raw)).as_str(), "%Y-%m-%d").ok())
}

/// Human-readable due date; unparseable values are shown as-is
pub fn format_due_date(raw: &str) -> String {
    parse_due(raw)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Editable copy of a card, seeded from the card and submitted as a full update
#[derive(Debug, Clone, PartialEq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// `YYYY-MM-DD` or empty
    pub due_date: String,
    /// Comma-separated
    pub labels: String,
}

impl CardDraft {
    pub fn from_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone().unwrap_or_default(),
            priority: card.priority.unwrap_or_default(),
            due_date: due_date_input(card.due_date.as_deref()),
            labels: card.labels.join(", "),
        }
    }

    pub fn to_update(&self) -> Result<UpdateCardArgs, ValidationError> {
        let due_date = optional(&self.due_date)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.format("%Y-%m-%d").to_string());
        Ok(UpdateCardArgs {
            title: required("Title", &self.title)?,
            description: self.description.trim().to_string(),
            priority: self.priority,
            due_date,
            labels: parse_labels(&self.labels),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card {
            id: "c1".into(),
            title: "Fix login".into(),
            description: None,
            priority: None,
            labels: vec!["bug".into(), "auth".into()],
            assignees: vec![],
            due_date: Some("2024-03-09T00:00:00.000Z".into()),
            position: 0,
            list_id: "l1".into(),
            meta_data: None,
        }
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(required("Title", "  Todo "), Ok("Todo".to_string()));
        assert_eq!(required("Title", "   "), Err(ValidationError::Required("Title")));
    }

    #[test]
    fn test_registration_checks_in_order() {
        assert_eq!(
            validate_registration("Ana", "a@b.c", "secret1", "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_registration("Ana", "a@b.c", "abc", "abc"),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert_eq!(validate_registration("", "a@b.c", "secret", "secret"), Err(ValidationError::Required("Full name")));
        assert!(validate_registration("Ana", "a@b.c", "secret", "secret").is_ok());
    }

    #[test]
    fn test_parse_labels_drops_blanks() {
        assert_eq!(parse_labels("bug, , feature ,"), vec!["bug", "feature"]);
        assert!(parse_labels("").is_empty());
    }

    #[test]
    fn test_due_date_helpers() {
        assert_eq!(due_date_input(Some("2024-03-09T00:00:00.000Z")), "2024-03-09");
        assert_eq!(due_date_input(None), "");
        assert_eq!(format_due_date("2024-03-09T00:00:00.000Z"), "Mar 9, 2024");
        assert_eq!(format_due_date("2024-12-25"), "Dec 25, 2024");
        assert_eq!(format_due_date("someday"), "someday");
    }

    #[test]
    fn test_draft_seeded_from_card() {
        let draft = CardDraft::from_card(&card());
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.due_date, "2024-03-09");
        assert_eq!(draft.labels, "bug, auth");
    }

    #[test]
    fn test_draft_to_update() {
        let mut draft = CardDraft::from_card(&card());
        draft.due_date = String::new();
        draft.labels = "bug, ui".into();
        let update = draft.to_update().unwrap();
        assert_eq!(update.due_date, None);
        assert_eq!(update.labels, vec!["bug", "ui"]);

        draft.title = " ".into();
        assert_eq!(draft.to_update(), Err(ValidationError::Required("Title")));
    }
}
