pub mod error;
pub mod person;

pub use error::{ApiError, FieldError, FormErrors, Result, ValidationKind};
pub use person::{NewPerson, Person, PersonField};
