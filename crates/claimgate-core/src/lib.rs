pub mod claims;
pub mod datetime;
pub mod error;

pub use claims::{Claim, ClaimSet};
pub use datetime::parse_datetime;
pub use error::{CoreError, Result};
