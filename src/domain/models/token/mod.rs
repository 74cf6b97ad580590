pub mod token;

pub use token::{Identity, TokenClaims, TokenPair, TokenType};
