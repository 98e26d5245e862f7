//! Galley Recipe Engine (galley-recipe)
//!
//! A [`Recipe`] owns an ordered, mutably-extensible list of operations
//! and drives step-wise execution over a single [`galley_dish::Dish`]:
//!
//! - [`Recipe`]: the pipeline plus its execution engine
//! - [`StepFlags`]: per-step scheduling flags (disabled, breakpoint,
//!   flow control), owned by the recipe and mutated by index
//! - [`RecipeObserver`]: injectable side channel for step lifecycle
//!   events; engine correctness never depends on it
//! - [`RecipeError`]: the failure taxonomy for one execution
//!
//! # Example
//!
//! ```rust,ignore
//! use galley_dish::Dish;
//! use galley_recipe::Recipe;
//!
//! let recipe = Recipe::new(vec![Arc::new(ToBase64::new()), Arc::new(ToHex::new())]);
//! let dish = Dish::from_bytes(b"hello".to_vec());
//!
//! let reached = recipe.execute(&dish, 0).await?;
//! assert_eq!(reached, 2);
//! ```

mod error;
mod observer;
mod recipe;
mod step;

pub use error::RecipeError;
pub use observer::{RecipeObserver, SkipReason};
pub use recipe::Recipe;
pub use step::StepFlags;
