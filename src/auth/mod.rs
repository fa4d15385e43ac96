pub mod session;
pub mod token;
pub mod validate;

pub use session::{Navigator, Session};
pub use token::TokenStore;
