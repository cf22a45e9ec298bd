//! Application Layer
//!
//! Use cases over the domain and the content store port:
//!
//! - `ContentService` - typed reads of the portfolio collections and the
//!   contact submission write
//! - `PageLoader` - concurrent load of a full page with per-section fallback
//! - `TypingAnimation` - drives the hero typewriter on the tokio timer

mod content;
mod page;
mod typing;

pub use content::{ContentService, FetchError, SubmissionOutcome};
pub use page::{PageContent, PageLoader, SettingsSource};
pub use typing::{TypingAnimation, TypingHandle};
