pub mod gateway;
pub mod request;
pub mod ticket;
pub mod validate;
pub mod wire;

pub use gateway::{BookingError, BookingGateway, FixtureBookingGateway};
pub use request::BookingRequest;
pub use ticket::Ticket;
pub use validate::{Field, ValidationError, ViolationKind};
