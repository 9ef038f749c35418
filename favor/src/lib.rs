#[macro_use]
mod log;

pub mod biased;
pub mod either;
pub mod projection;
pub mod validation;

pub use biased::Biased;
pub use either::Either;
pub use projection::{primary, secondary, Projection};
pub use validation::{fail, pass, Validation};
