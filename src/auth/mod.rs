// Authentication module
// Cookie-based refresh/access token flow: registration, login, logout,
// refresh, plus the bearer-token gate for protected routes

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use middleware::AuthenticatedUser;
pub use models::{AuthResponse, LoginRequest, PublicUser, RegisterRequest};
pub use repository::UserRepository;
pub use service::AuthService;
pub use token::TokenService;
