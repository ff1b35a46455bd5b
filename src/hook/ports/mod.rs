//! Port contracts for client construction.

mod recipe;

pub use recipe::ClientRecipe;
