//! Shared fixtures for the end-to-end clustering tests.

use jiff::civil::{Date, date};
use kmeans_core::{Observation, Observations};
use serde::{Deserialize, Serialize};

const PEOPLE_JSON: &str = include_str!("../data/people.json");

/// Number of axes on a [`Person`].
pub const PERSON_DEGREE: usize = 4;

/// A person described by birth date, height, weight, and gender.
///
/// Axes, in order: seconds since the Unix epoch at birth, height in inches,
/// weight in pounds, gender (`0` female, `1` male).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub birth_date: Date,
    pub height_inches: u32,
    pub weight_lbs: u32,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Person {
    /// Seconds between the Unix epoch and this person's birth date.
    ///
    /// Computed in `f64` and narrowed once: `f32` keeps about 7 significant
    /// digits, so dates resolve to roughly two minutes. Plenty for ages.
    pub fn born(&self) -> f32 {
        let seconds = self.birth_date.duration_since(date(1970, 1, 1)).as_secs_f64();
        seconds as f32
    }
}

impl Observation<f32> for Person {
    fn value(&self, axis: usize) -> f32 {
        match axis {
            0 => self.born(),
            1 => self.height_inches as f32,
            2 => self.weight_lbs as f32,
            3 => match self.gender {
                Gender::Female => 0.0,
                Gender::Male => 1.0,
            },
            _ => 0.0,
        }
    }
}

/// The people fixture as a clusterable collection.
#[derive(Debug, Clone)]
pub struct People {
    people: Vec<Person>,
}

impl People {
    /// Loads the bundled fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON does not describe a list of people.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(PEOPLE_JSON)
    }

    /// Parses people from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` does not describe a list of people.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            people: serde_json::from_str(json)?,
        })
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.people
    }

    /// Finds the first person with `name`.
    pub fn find(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.name == name)
    }
}

impl Observations<f32> for People {
    type Item<'a>
        = &'a Person
    where
        Self: 'a;

    fn observations(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    fn degree(&self) -> usize {
        PERSON_DEGREE
    }
}
