//! Text views of the portfolio sections
//!
//! Every view renders to a `String` given the terminal's color and unicode
//! support, so it can be printed or snapshotted.

pub mod about;
pub mod contact;
pub mod experience;
pub mod home;
pub mod page;
pub mod projects;
pub mod skills;
