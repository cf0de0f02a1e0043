pub mod movie;
pub mod patient;
pub mod product;
pub mod reservation;
