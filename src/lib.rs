//! Vitrine - portfolio content client and terminal renderer
//!
//! Vitrine reads a personal portfolio (settings, projects, skills,
//! experience) from a headless CMS bucket, records contact submissions, and
//! drives the hero typing animation. The `vitrine` binary renders all of it
//! in the terminal.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ContentService, FetchError, PageContent, PageLoader, SubmissionOutcome, TypingAnimation,
    TypingHandle,
};
pub use config::Config;
pub use domain::entities::{ContactForm, Experience, PortfolioSettings, Project, Skill};
pub use domain::ports::{ContentStore, StoreError};
pub use domain::services::{compose_mailto, Typewriter, TypingTimings};
pub use error::{VitrineError, VitrineResult};
pub use infrastructure::{CosmicOptions, CosmicStore, MemoryStore};
