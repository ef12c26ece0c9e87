//! Employee record type.
//!
//! A record is an ordered tuple of exactly three text fields. Fields may be
//! empty, but they must not contain the line delimiter or a line break, since
//! the on-disk format has no escaping mechanism.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Character separating fields within a stored line.
pub const DELIMITER: char = '|';

/// Characters that cannot appear inside a field value.
pub const FORBIDDEN_CHARS: [char; 3] = [DELIMITER, '\n', '\r'];

/// One of the three columns of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Name,
    Department,
}

impl Field {
    /// All fields, in line order.
    pub const ALL: [Field; 3] = [Field::Id, Field::Name, Field::Department];

    /// Returns the column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Department => "department",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value that cannot be encoded on a single line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field {field} contains forbidden character {found:?}")]
pub struct FieldViolation {
    pub field: Field,
    pub found: char,
}

/// An employee entry: id, name and department.
///
/// The store enforces no uniqueness on `id`; duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub department: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
        }
    }

    /// Returns the value of the given field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Department => &self.department,
        }
    }

    /// Returns the three field values in line order.
    pub fn fields(&self) -> [&str; 3] {
        [&self.id, &self.name, &self.department]
    }

    /// Checks that every field can be stored without corrupting the line.
    ///
    /// # Errors
    /// Returns the first field (in line order) holding a forbidden character.
    pub fn validate(&self) -> Result<(), FieldViolation> {
        for field in Field::ALL {
            if let Some(found) = self.get(field).chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
                return Err(FieldViolation { field, found });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Dept: {}",
            self.id, self.name, self.department
        )
    }
}
