pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod permissions;
pub mod requests;
pub mod validation;

pub use config::*;
pub use error::*;
pub use models::*;
pub use normalize::*;
pub use permissions::*;
pub use requests::*;
pub use validation::*;
