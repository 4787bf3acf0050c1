pub mod constants;
pub mod format;
pub mod pagination;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use format::{excerpt, format_date};
pub use pagination::{page_controls, PageControls, PageItem};
pub use storage::*;
pub use validation::{parse_tags, password_issues};
