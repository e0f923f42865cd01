//! People shown in a family tree.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Unique identifier for people.
pub type PersonId = Uuid;

/// Age (in years) below which a person counts as a child.
pub const CHILD_AGE: i32 = 18;

/// Gender of a person, as far as rendering is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

/// A person in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
    /// Whether the person is known to be dead, even without a death year.
    #[serde(default)]
    pub deceased: bool,
}

impl Person {
    /// Create a new person with a fresh ID.
    ///
    /// A person with a death year is marked deceased.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
        birth_year: Option<i32>,
        death_year: Option<i32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            birth_year,
            death_year,
            deceased: death_year.is_some(),
        }
    }

    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Life span label, e.g. `1901 – 1975`.
    pub fn dates(&self) -> String {
        match (self.birth_year, self.death_year) {
            (Some(birth), Some(death)) => format!("{birth} – {death}"),
            (Some(birth), None) => birth.to_string(),
            (None, Some(death)) => format!("? – {death}"),
            (None, None) => String::new(),
        }
    }

    /// Whether the person is (or died as) a child.
    pub fn is_child(&self) -> bool {
        self.is_child_in(current_year())
    }

    /// Like [`Person::is_child`], measuring the age of a living person in `year`.
    pub fn is_child_in(&self, year: i32) -> bool {
        let Some(birth) = self.birth_year else {
            return false;
        };
        let end = self.death_year.unwrap_or(year);
        end - birth < CHILD_AGE
    }
}

/// Current calendar year (UTC).
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}
