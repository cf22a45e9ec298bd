//! Domain Services
//!
//! Stateless logic over domain entities: ordering, grouping, mail drafts and
//! the typing animation state machine.

pub mod grouping;
pub mod mailto;
pub mod ordering;
pub mod typewriter;

pub use grouping::{group_by_category, SkillGroup, UNCATEGORIZED_LABEL};
pub use mailto::compose_mailto;
pub use ordering::{sort_by_order, sort_experience};
pub use typewriter::{Frame, Phase, Typewriter, TypingTimings};
