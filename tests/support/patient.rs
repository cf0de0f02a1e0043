use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stashed_rust::{BornOn, Record, Uuid};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Patient {
    pub id: Uuid,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub emergency_contact: String,
}

impl Patient {
    pub fn new(full_name: &str, birth_date: NaiveDate, emergency_contact: &str) -> Self {
        Patient {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            birth_date,
            emergency_contact: emergency_contact.into(),
        }
    }
}

impl BornOn for Patient {
    fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}
