use crate::core::{FieldError, FormErrors, NewPerson, PersonField, ValidationKind};

pub const NATIONAL_ID_MAX_LEN: usize = 11;

/// Raw input of the "new person" dialog plus the errors from the last
/// submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    values: [String; 6],
    errors: FormErrors,
}

impl PersonForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: PersonField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: PersonField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub(crate) fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    /// True when every input is blank.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_empty())
    }

    /// Clears all inputs and errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks every field and builds the create payload from trimmed values.
    pub fn validate(&self) -> Result<NewPerson, FormErrors> {
        let mut errors = FormErrors::new();

        for field in PersonField::ALL {
            if self.value(field).trim().is_empty() {
                errors.push(FieldError::new(field, ValidationKind::Missing));
            }
        }

        let age = self.value(PersonField::Age).trim();
        let parsed_age = age.parse::<u32>().ok();
        if !age.is_empty() && parsed_age.is_none() {
            errors.push(FieldError::new(PersonField::Age, ValidationKind::NotANumber));
        }

        if self.value(PersonField::NationalId).trim().chars().count() > NATIONAL_ID_MAX_LEN {
            errors.push(FieldError::new(
                PersonField::NationalId,
                ValidationKind::TooLong {
                    max: NATIONAL_ID_MAX_LEN,
                },
            ));
        }

        match parsed_age {
            Some(age) if errors.is_empty() => Ok(NewPerson {
                name: self.trimmed(PersonField::Name),
                age,
                marital_status: self.trimmed(PersonField::MaritalStatus),
                national_id: self.trimmed(PersonField::NationalId),
                city: self.trimmed(PersonField::City),
                state: self.trimmed(PersonField::State),
            }),
            _ => Err(errors),
        }
    }

    fn trimmed(&self, field: PersonField) -> String {
        self.value(field).trim().to_string()
    }
}
