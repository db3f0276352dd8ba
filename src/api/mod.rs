//! External Persons API.
//!
//! Every operation is one request/response exchange: no retries, no caching.

mod http;

pub use http::{DEFAULT_BASE_URL, HttpPersonApi};

use crate::core::{NewPerson, Person, Result};
use async_trait::async_trait;

#[async_trait]
pub trait PersonApi: Send + Sync {
    /// `GET /Persons`
    async fn list(&self) -> Result<Vec<Person>>;

    /// `POST /Persons`. Any 2xx status is a success; the created record is
    /// returned when the body carries one.
    async fn create(&self, person: &NewPerson) -> Result<Option<Person>>;

    /// `DELETE /Persons/{id}`. Success is decided by status code only.
    async fn delete(&self, id: u32) -> Result<()>;
}
