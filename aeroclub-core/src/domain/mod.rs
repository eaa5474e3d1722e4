//! Domain types for the aeroclub schedule

pub mod booking;
pub mod directory;
pub mod ids;
pub mod person;
pub mod resource;

pub use booking::Booking;
pub use directory::Directory;
pub use ids::{BookingId, PersonId, ResourceId};
pub use person::{Person, Role};
pub use resource::Resource;
