use crate::api::PersonApi;
use crate::core::{Person, Result};
use tracing::{error, info};

/// In-memory copy of every person the API returned on the last load.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    persons: Vec<Person>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.persons.iter().any(|p| p.id == id)
    }

    pub fn replace(&mut self, persons: Vec<Person>) {
        self.persons = persons;
    }

    /// Replaces the list with a fresh snapshot from `api`.
    ///
    /// On failure the previous list is kept and the error is logged.
    pub async fn load<A: PersonApi + ?Sized>(&mut self, api: &A) -> Result<usize> {
        match api.list().await {
            Ok(persons) => {
                info!(count = persons.len(), "persons loaded");
                self.persons = persons;
                Ok(self.persons.len())
            }
            Err(err) => {
                error!(error = %err, "failed to load persons");
                Err(err)
            }
        }
    }

    /// Drops the record with `id` without contacting the API.
    pub fn remove_local(&mut self, id: u32) -> bool {
        let before = self.persons.len();
        self.persons.retain(|p| p.id != id);
        self.persons.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: u32) -> Person {
        Person {
            id,
            name: format!("person {id}"),
            age: 20 + id,
            marital_status: "single".to_string(),
            national_id: format!("{id:011}"),
            city: "Natal".to_string(),
            state: "RN".to_string(),
        }
    }

    #[test]
    fn remove_local_drops_only_matching_id() {
        let mut store = RecordStore::new();
        store.replace(vec![person(1), person(2), person(3)]);

        assert!(store.remove_local(2));
        assert!(!store.contains(2));
        assert_eq!(
            store.persons().iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 3]
        );

        assert!(!store.remove_local(2));
        assert_eq!(store.len(), 2);
    }
}
