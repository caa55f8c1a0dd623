use serde::{Deserialize, Serialize};

/// The visible inputs of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `name`/`id` attribute used for the matching form control.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_address_same_field() {
        let mut fields = FormFields::default();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            fields.set(field, format!("value {i}"));
        }
        assert_eq!(fields.name, "value 0");
        assert_eq!(fields.email, "value 1");
        assert_eq!(fields.subject, "value 2");
        assert_eq!(fields.message, "value 3");
        assert_eq!(fields.get(Field::Subject), "value 2");
    }

    #[test]
    fn test_clear_empties_every_field() {
        let mut fields = FormFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        };
        assert!(!fields.is_empty());
        fields.clear();
        assert!(fields.is_empty());
        assert_eq!(fields, FormFields::default());
    }
}
