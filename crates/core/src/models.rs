pub mod appointment;
pub mod banner;
