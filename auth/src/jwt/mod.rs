pub mod claims;
pub mod errors;
pub mod handler;
pub mod token_service;

pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use token_service::TokenService;
