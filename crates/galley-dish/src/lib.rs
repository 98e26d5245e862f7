//! Galley Dish (galley-dish)
//!
//! The [`Dish`] is the single mutable value threaded through a recipe:
//! every operation reads its input from the dish and writes its output
//! back into it. Access is synchronized per instance so no reader can
//! observe a partially written value.

mod dish;

pub use dish::Dish;
