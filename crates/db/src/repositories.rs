pub mod appointment;
pub mod banner;
pub mod session;

pub use appointment::{AppointmentRepository, PgAppointmentRepository};
pub use banner::{BannerRepository, PgBannerRepository};
pub use session::{PgSessionStore, SessionStore};
