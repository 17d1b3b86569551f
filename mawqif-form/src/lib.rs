pub mod form;

pub use form::{BookingForm, FormPhase, Touched};
