use serde::{Deserialize, Serialize};

/// A person record as served by the external API.
///
/// The API speaks camelCase JSON with its own field names, so every field
/// carries an explicit rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "personId")]
    pub id: u32,
    pub name: String,
    pub age: u32,
    #[serde(rename = "estadoCivil")]
    pub marital_status: String,
    #[serde(rename = "cpf")]
    pub national_id: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "estado")]
    pub state: String,
}

/// Body of a create request. The identifier is assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub age: u32,
    #[serde(rename = "estadoCivil")]
    pub marital_status: String,
    #[serde(rename = "cpf")]
    pub national_id: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "estado")]
    pub state: String,
}

impl NewPerson {
    pub fn with_id(self, id: u32) -> Person {
        Person {
            id,
            name: self.name,
            age: self.age,
            marital_status: self.marital_status,
            national_id: self.national_id,
            city: self.city,
            state: self.state,
        }
    }
}

/// User-editable fields of a [`Person`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Name,
    Age,
    MaritalStatus,
    NationalId,
    City,
    State,
}

impl PersonField {
    pub const ALL: [PersonField; 6] = [
        PersonField::Name,
        PersonField::Age,
        PersonField::MaritalStatus,
        PersonField::NationalId,
        PersonField::City,
        PersonField::State,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PersonField::Name => "Name",
            PersonField::Age => "Age",
            PersonField::MaritalStatus => "Marital status",
            PersonField::NationalId => "National ID",
            PersonField::City => "City",
            PersonField::State => "State",
        }
    }

    pub fn index(self) -> usize {
        match self {
            PersonField::Name => 0,
            PersonField::Age => 1,
            PersonField::MaritalStatus => 2,
            PersonField::NationalId => 3,
            PersonField::City => 4,
            PersonField::State => 5,
        }
    }

    /// Renders this field of `person` as table cell text.
    pub fn value_of(self, person: &Person) -> String {
        match self {
            PersonField::Name => person.name.clone(),
            PersonField::Age => person.age.to_string(),
            PersonField::MaritalStatus => person.marital_status.clone(),
            PersonField::NationalId => person.national_id.clone(),
            PersonField::City => person.city.clone(),
            PersonField::State => person.state.clone(),
        }
    }
}
