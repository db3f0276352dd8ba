// ============================================================================
// person-manager
// ============================================================================
//
// Terminal front end over a Persons REST API: list, paginate, create and
// delete records. The view state lives in [`Session`]; the terminal shell in
// [`cli`] only turns key presses into session calls and draws the result.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod session;

pub use api::{HttpPersonApi, PersonApi};
pub use config::{AppConfig, Cli};
pub use crate::core::{ApiError, FieldError, FormErrors, NewPerson, Person, PersonField, ValidationKind};
pub use session::{Pagination, PersonForm, RecordStore, Session, SubmitOutcome};
