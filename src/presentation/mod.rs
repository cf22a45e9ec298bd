//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the content service to its store
//! - JSON shapes of the command results
//!
//! ## Usage
//!
//! ```ignore
//! use vitrine::presentation::factory;
//!
//! let service = factory::create_content_service(&config, None)?;
//! let projects = service.get_featured_projects().await?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_content_service, create_store};
pub use output::OutputFormat;
