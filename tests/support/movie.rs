use serde::{Deserialize, Serialize};
use stashed_rust::{Categorized, Record, Uuid};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
}

impl Movie {
    pub fn new(title: &str, director: &str, year: i32, genre: &str) -> Self {
        Movie {
            id: Uuid::new_v4(),
            title: title.into(),
            director: director.into(),
            year,
            genre: genre.into(),
        }
    }
}

impl Categorized for Movie {
    fn category(&self) -> &str {
        &self.genre
    }
}
