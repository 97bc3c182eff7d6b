pub mod error;
pub mod models;
pub mod validation;
pub mod summary;
pub mod regulars;

pub use error::{Error, ErrorCode, Result};
pub use models::*;
pub use validation::*;
pub use summary::{summarize, DrinkCount, DrinkOrder, Summary};
pub use regulars::{standard_roster, STANDARD_PEOPLE};
