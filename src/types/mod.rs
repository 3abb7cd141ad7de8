pub mod errors;
pub mod outcome;
pub mod range;

pub use errors::SearchError;
pub use outcome::SearchOutcome;
pub use range::SearchRange;
