//! Domain models with validation at construction
//!
//! All form input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod adoption;
pub mod validation;

pub use adoption::{AdoptionForm, Color, NewAdoption, PetType, Quantity};
pub use validation::ValidationError;
