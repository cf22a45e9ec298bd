//! Command handlers for the vitrine binary

pub mod contact;
pub mod content;
pub mod hero;
pub mod show;

use std::path::PathBuf;

use anyhow::Result;
use vitrine::config::Config;
use vitrine::presentation::create_content_service;
use vitrine::ContentService;

use crate::ui::context::UiContext;

/// Widest text layout, even on very wide terminals
const MAX_TEXT_WIDTH: usize = 100;

/// Resolved configuration and terminal settings shared by every command
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
    pub fixture: Option<PathBuf>,
}

impl Session {
    pub fn service(&self) -> Result<ContentService> {
        Ok(create_content_service(&self.config, self.fixture.as_deref())?)
    }

    /// Layout width for wrapped text
    pub fn width(&self) -> usize {
        usize::from(self.ui.caps.width).clamp(40, MAX_TEXT_WIDTH)
    }
}
