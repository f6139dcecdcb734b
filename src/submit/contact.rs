use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Location,
    Comments,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Location,
        ContactField::Comments,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Location => "Location",
            ContactField::Comments => "Notes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub comments: String,
}

impl ContactDetails {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Location => &self.location,
            ContactField::Comments => &self.comments,
        }
    }

    pub fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Location => &mut self.location,
            ContactField::Comments => &mut self.comments,
        }
    }

    /// Checks the required fields and reports every problem at once.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Name,
                message: "Please enter your name",
            });
        }
        if !EMAIL.is_match(self.email.trim()) {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "Please enter a valid email address",
            });
        }
        if self.phone.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Phone,
                message: "Please enter your phone number",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid() -> ContactDetails {
        ContactDetails {
            name: "Sam Rivera".to_string(),
            email: "sam@example.com".to_string(),
            phone: "512-555-0100".to_string(),
            location: String::new(),
            comments: String::new(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = ContactDetails::default().validate().unwrap_err();
        let fields: Vec<ContactField> = errors.iter().map(|e| e.field).collect();

        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Phone]
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["sam", "sam@example", "sam @example.com", "@example.com"] {
            let form = ContactDetails {
                email: email.to_string(),
                ..valid()
            };
            let errors = form.validate().unwrap_err();
            assert_eq!(errors[0].field, ContactField::Email, "{email}");
        }
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let form = ContactDetails {
            name: "   ".to_string(),
            ..valid()
        };
        assert_eq!(form.validate().unwrap_err()[0].field, ContactField::Name);
    }
}
