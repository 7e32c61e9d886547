pub mod claims;
pub mod jwt;

pub use claims::{ClaimRequest, IdentityClaim};
pub use jwt::{issue_token, verify_token};
