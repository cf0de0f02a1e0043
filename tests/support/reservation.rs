use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stashed_rust::{Record, Statused, Uuid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    CheckedOut,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Reservation {
    pub id: Uuid,
    pub guest: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn new(
        guest: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        status: ReservationStatus,
    ) -> Self {
        Reservation {
            id: Uuid::new_v4(),
            guest: guest.into(),
            check_in,
            check_out,
            status,
        }
    }
}

impl Statused for Reservation {
    type Status = ReservationStatus;

    fn status(&self) -> &ReservationStatus {
        &self.status
    }
}
