//! Signed session token handling.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::SessionClaims;
pub use decoder::TokenDecoder;
pub use encoder::TokenEncoder;
