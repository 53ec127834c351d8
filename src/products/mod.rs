// Product catalog module
// Public listing and lookup; create, update and delete are gated on the
// authenticated owner

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod tags;

pub use error::ProductError;
pub use models::{Product, ProductRequest};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use tags::TagsInput;
