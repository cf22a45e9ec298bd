//! Domain Layer
//!
//! The portfolio's content model and the logic that does not touch the network.
//!
//! ## Structure
//!
//! - `entities/` - Content objects (settings, projects, skills, experience, contact)
//! - `value_objects/` - Immutable value types (ContentType, DisplayOrder, ObjectQuery, Section)
//! - `services/` - Ordering, grouping, mail drafts, typing animation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
