pub mod domain;
pub mod error;
pub mod validation;

pub use domain::{AddressField, AddressRecord};
pub use error::{FieldErrors, UnknownFieldError};
pub use validation::{clean_digits, validate};
