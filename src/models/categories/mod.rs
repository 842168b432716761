pub mod defaults;
pub mod entities;
pub mod requests;

pub use entities::Categories;
pub use requests::{CategoryKind, UpdateCategoryRequest};
