//! Command implementations.

pub mod extract;
pub mod harvest;
pub mod locales;

pub use self::extract::execute_extract;
pub use self::harvest::execute_harvest;
pub use self::locales::execute_locales;
