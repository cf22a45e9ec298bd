//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod choice;
mod content_type;
mod date;
mod media;
mod order;
mod query;
mod section;

pub use choice::Choice;
pub(crate) use choice::lenient_choice;
pub use content_type::ContentType;
pub use date::{month_year_label, parse_content_date};
pub(crate) use media::optional_media;
pub use media::MediaAsset;
pub(crate) use order::optional_number;
pub use order::{DisplayOrder, UNORDERED_RANK};
pub use query::{ObjectQuery, LIST_PROPS, SINGLETON_PROPS};
pub use section::Section;
