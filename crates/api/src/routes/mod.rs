pub mod appointment;
pub mod banner;
pub mod health;
