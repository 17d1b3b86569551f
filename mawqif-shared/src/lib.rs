pub mod pii;
pub mod wire;

pub use pii::Masked;
