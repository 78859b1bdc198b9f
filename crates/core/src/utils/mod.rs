pub mod finance_utils;
pub mod format_utils;

pub use finance_utils::*;
pub use format_utils::*;
