use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::card::{Card, CardStyle};

/// Notice listing the sections that fell back after a failed read
#[derive(Debug, Clone)]
pub struct FallbackNotice<'a> {
    failures: &'a [String],
}

impl<'a> FallbackNotice<'a> {
    pub fn new(failures: &'a [String]) -> Self {
        Self { failures }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }

        let noun = if self.failures.len() == 1 { "section" } else { "sections" };
        let title = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(format!(
                "{} {noun} could not be loaded",
                self.failures.len()
            ))
            .render(supports_color)
        );

        let bullet = Icon::Bullet.render(supports_unicode);
        let mut card = Card::with_title(title).style(CardStyle::Warning);
        for failure in self.failures {
            card.add_line(format!("{bullet} {failure}"));
        }
        Some(card.render(supports_color, supports_unicode))
    }
}
