// Content validation: keyword table, matcher, and the scanner trait.

pub mod keywords;
pub mod traits;
pub mod validator;

pub use keywords::{Category, KeywordTable};
pub use traits::ContentScanner;
pub use validator::{ContentValidator, ValidationResult};
