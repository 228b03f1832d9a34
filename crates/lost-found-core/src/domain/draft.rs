//! Draft Post
//!
//! The in-progress "post an item" form.

use chrono::NaiveDate;

use super::category::is_known_category;
use super::error::ActionError;
use super::item::ItemKind;

/// Image picked locally, not yet uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPost {
    pub kind: ItemKind,
    pub category: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub contact: String,
    pub reward: String,
    pub image: Option<ImageUpload>,
}

impl DraftPost {
    /// Fresh form for the given day
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: ItemKind::Lost,
            category: String::new(),
            title: String::new(),
            description: String::new(),
            date: today,
            location: String::new(),
            contact: String::new(),
            reward: String::new(),
            image: None,
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Names of required fields that are blank (or an unknown category)
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !is_known_category(self.category.trim()) {
            missing.push("category");
        }
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("location", &self.location),
            ("contact", &self.contact),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        missing
    }

    pub fn validate(&self) -> Result<(), ActionError> {
        let fields = self.missing_fields();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ActionError::Validation { fields })
        }
    }

    /// Text parts of the multipart creation request, in submission order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("type", self.kind.as_str().to_string()),
            ("category", self.category.trim().to_string()),
            ("title", self.title.trim().to_string()),
            ("description", self.description.trim().to_string()),
            ("date", self.date.format("%Y-%m-%d").to_string()),
            ("location", self.location.trim().to_string()),
            ("contact", self.contact.trim().to_string()),
        ];
        let reward = self.reward.trim();
        if !reward.is_empty() {
            fields.push(("reward", reward.to_string()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn filled() -> DraftPost {
        DraftPost {
            category: "Wallets".to_string(),
            title: "Brown wallet".to_string(),
            description: "Leather, has a library card".to_string(),
            location: "Bus 12".to_string(),
            contact: "me@example.com".to_string(),
            ..DraftPost::new(today())
        }
    }

    #[test]
    fn test_defaults() {
        let draft = DraftPost::new(today());
        assert_eq!(draft.kind, ItemKind::Lost);
        assert_eq!(draft.date, today());
        assert!(draft.title.is_empty());
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_missing_fields() {
        let draft = DraftPost::new(today());
        assert_eq!(
            draft.missing_fields(),
            vec!["category", "title", "description", "location", "contact"]
        );

        let mut draft = filled();
        draft.title = "   ".to_string();
        draft.category = "Spaceships".to_string();
        assert_eq!(draft.missing_fields(), vec!["category", "title"]);
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_form_fields_skip_blank_reward() {
        let fields = filled().form_fields();
        assert!(fields.iter().all(|(name, _)| *name != "reward"));
        assert!(fields.contains(&("date", "2024-05-17".to_string())));
        assert!(fields.contains(&("type", "lost".to_string())));

        let mut draft = filled();
        draft.reward = " $20 ".to_string();
        assert!(draft.form_fields().contains(&("reward", "$20".to_string())));
    }

    #[test]
    fn test_reset() {
        let mut draft = filled();
        draft.reset(today());
        assert_eq!(draft, DraftPost::new(today()));
    }
}
