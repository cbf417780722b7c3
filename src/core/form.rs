//! # Post-Item Form
//!
//! Field values, focus, validation and the in-flight guard for the
//! "Report an Item" screen. Submitting is two-phase:
//!
//! ```text
//! begin_submit() ──► Ok(draft), is_submitting = true
//!        │                      │ (timer elapses)
//!        ▼                      ▼
//! Err(Invalid | SubmissionInFlight)   reset() ──► every field empty again
//! ```

use std::fmt;

use chrono::NaiveDate;

use crate::core::item::{Category, Item, ItemStatus, ItemType};

/// The first rule a form violates. Variants are listed in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingType,
    MissingTitle,
    MissingCategory,
    MissingLocation,
    MissingContact,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::MissingType => "Please select Lost or Found item",
            ValidationError::MissingTitle => "Please enter item title",
            ValidationError::MissingCategory => "Please select a category",
            ValidationError::MissingLocation => "Please enter location",
            ValidationError::MissingContact => "Please fill in all contact information",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    Invalid(ValidationError),
    /// A previous submission hasn't been acknowledged yet.
    SubmissionInFlight,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Invalid(e) => write!(f, "{e}"),
            FormError::SubmissionInFlight => write!(f, "Your item is still being posted"),
        }
    }
}

impl std::error::Error for FormError {}

impl From<ValidationError> for FormError {
    fn from(e: ValidationError) -> Self {
        FormError::Invalid(e)
    }
}

/// Focusable rows of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Type,
    Title,
    Description,
    Category,
    Location,
    ContactName,
    ContactEmail,
    ContactPhone,
    Submit,
}

impl FormField {
    pub const ORDER: [FormField; 9] = [
        FormField::Type,
        FormField::Title,
        FormField::Description,
        FormField::Category,
        FormField::Location,
        FormField::ContactName,
        FormField::ContactEmail,
        FormField::ContactPhone,
        FormField::Submit,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> FormField {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> FormField {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Type => "Item Type",
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Category => "Category",
            FormField::Location => "Location",
            FormField::ContactName => "Your Name",
            FormField::ContactEmail => "Email",
            FormField::ContactPhone => "Phone",
            FormField::Submit => "Post Item",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Title => "e.g., Silver AirPods Pro",
            FormField::Description => "Provide details about the item...",
            FormField::Location => "e.g., Central Library - 3rd Floor",
            FormField::ContactName => "Full name",
            FormField::ContactEmail => "your.email@university.edu",
            FormField::ContactPhone => "+1-555-0000",
            FormField::Type | FormField::Category | FormField::Submit => "",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Description | FormField::Submit)
    }

    /// Free-text rows, as opposed to choice rows and the submit button.
    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Type | FormField::Category | FormField::Submit)
    }
}

/// A validated submission, not yet filed in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub kind: ItemType,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl ItemDraft {
    /// Turns the draft into a new active listing.
    pub fn into_item(self, id: String, listed: NaiveDate) -> Item {
        Item {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            location: self.location,
            date: listed,
            image: None,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            status: ItemStatus::Active,
            kind: self.kind,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub item_type: Option<ItemType>,
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub focus: FormField,
    pub is_submitting: bool,
}

impl PostForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks every rule in order and stops at the first failure.
    pub fn validate(&self) -> Result<ItemDraft, ValidationError> {
        let kind = self.item_type.ok_or(ValidationError::MissingType)?;
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let category = self.category.ok_or(ValidationError::MissingCategory)?;
        if self.location.trim().is_empty() {
            return Err(ValidationError::MissingLocation);
        }
        if self.contact_name.trim().is_empty()
            || self.contact_email.trim().is_empty()
            || self.contact_phone.trim().is_empty()
        {
            return Err(ValidationError::MissingContact);
        }

        Ok(ItemDraft {
            kind,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            location: self.location.trim().to_string(),
            contact_name: self.contact_name.trim().to_string(),
            contact_email: self.contact_email.trim().to_string(),
            contact_phone: self.contact_phone.trim().to_string(),
        })
    }

    /// Validates and marks the form as in flight. Fields are left untouched.
    pub fn begin_submit(&mut self) -> Result<ItemDraft, FormError> {
        if self.is_submitting {
            return Err(FormError::SubmissionInFlight);
        }
        let draft = self.validate()?;
        self.is_submitting = true;
        Ok(draft)
    }

    /// Back to the initial empty, unselected state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Title => Some(&self.title),
            FormField::Description => Some(&self.description),
            FormField::Location => Some(&self.location),
            FormField::ContactName => Some(&self.contact_name),
            FormField::ContactEmail => Some(&self.contact_email),
            FormField::ContactPhone => Some(&self.contact_phone),
            FormField::Type | FormField::Category | FormField::Submit => None,
        }
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Location => Some(&mut self.location),
            FormField::ContactName => Some(&mut self.contact_name),
            FormField::ContactEmail => Some(&mut self.contact_email),
            FormField::ContactPhone => Some(&mut self.contact_phone),
            FormField::Type | FormField::Category | FormField::Submit => None,
        }
    }

    /// Steps the choice on the focused row (type or category).
    /// Returns false if the focused row isn't a choice.
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        match self.focus {
            FormField::Type => {
                self.item_type = Some(match self.item_type {
                    None if forward => ItemType::Lost,
                    None => ItemType::Found,
                    Some(ItemType::Lost) => ItemType::Found,
                    Some(ItemType::Found) => ItemType::Lost,
                });
                true
            }
            FormField::Category => {
                let all = Category::ALL;
                let len = all.len();
                let next = match self.category.and_then(|c| all.iter().position(|x| *x == c)) {
                    None if forward => 0,
                    None => len - 1,
                    Some(i) if forward => (i + 1) % len,
                    Some(i) => (i + len - 1) % len,
                };
                self.category = Some(all[next]);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PostForm {
        PostForm {
            item_type: Some(ItemType::Found),
            title: "  Green Umbrella ".to_string(),
            description: "Left by the door".to_string(),
            category: Some(Category::Accessories),
            location: "Engineering Hall".to_string(),
            contact_name: "Sam Park".to_string(),
            contact_email: "sam.p@university.edu".to_string(),
            contact_phone: "+1-555-0300".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_form_reports_type_first() {
        let form = PostForm::new();
        assert_eq!(form.validate(), Err(ValidationError::MissingType));
        assert_eq!(
            ValidationError::MissingType.to_string(),
            "Please select Lost or Found item"
        );
    }

    #[test]
    fn test_rule_order() {
        let mut form = PostForm::new();
        form.item_type = Some(ItemType::Lost);
        assert_eq!(form.validate(), Err(ValidationError::MissingTitle));

        form.title = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingTitle));

        form.title = "Keys".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingCategory));

        form.category = Some(Category::Other);
        assert_eq!(form.validate(), Err(ValidationError::MissingLocation));

        form.location = "Gym".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingContact));

        form.contact_name = "Kim".to_string();
        form.contact_email = "kim@university.edu".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingContact));

        form.contact_phone = "+1-555-0999".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_description_is_optional() {
        let mut form = filled_form();
        form.description.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_draft_is_trimmed() {
        let draft = filled_form().validate().unwrap();
        assert_eq!(draft.title, "Green Umbrella");
        assert_eq!(draft.kind, ItemType::Found);
    }

    #[test]
    fn test_begin_submit_guards_in_flight() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting);
        assert_eq!(form.begin_submit(), Err(FormError::SubmissionInFlight));
    }

    #[test]
    fn test_invalid_submit_does_not_mark_in_flight() {
        let mut form = PostForm::new();
        assert_eq!(
            form.begin_submit(),
            Err(FormError::Invalid(ValidationError::MissingType))
        );
        assert!(!form.is_submitting);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled_form();
        form.focus = FormField::Submit;
        form.is_submitting = true;
        form.reset();
        assert_eq!(form, PostForm::new());
    }

    #[test]
    fn test_cycle_choice() {
        let mut form = PostForm::new();
        assert!(form.cycle_choice(true));
        assert_eq!(form.item_type, Some(ItemType::Lost));
        form.cycle_choice(true);
        assert_eq!(form.item_type, Some(ItemType::Found));

        form.focus = FormField::Category;
        form.cycle_choice(false);
        assert_eq!(form.category, Some(Category::Other));
        form.cycle_choice(true);
        assert_eq!(form.category, Some(Category::Electronics));

        form.focus = FormField::Title;
        assert!(!form.cycle_choice(true));
    }

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(FormField::Type.prev(), FormField::Submit);
        assert_eq!(FormField::Submit.next(), FormField::Type);
        assert_eq!(FormField::Title.next(), FormField::Description);
    }

    #[test]
    fn test_into_item_is_active() {
        let draft = filled_form().validate().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let item = draft.into_item("abc".to_string(), date);
        assert_eq!(item.status, ItemStatus::Active);
        assert_eq!(item.kind, ItemType::Found);
        assert_eq!(item.date, date);
    }
}
