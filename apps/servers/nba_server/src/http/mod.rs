mod error;
mod handlers;
mod routes;
mod serve;

pub use error::Error;
pub use serve::serve;

pub type Result<T, E = Error> = std::result::Result<T, E>;
