mod error;
pub mod mealplan;
pub mod recipe;
pub mod week;

pub use error::*;
