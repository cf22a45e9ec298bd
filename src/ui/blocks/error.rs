use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::card::{Card, CardStyle};

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    context: Option<String>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            context: None,
            message: message.into(),
            fix: None,
        }
    }

    /// File or setting the error is about
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        let mut card = Card::with_title(title).style(CardStyle::Error);

        if let Some(context) = &self.context {
            card.add_line(ColoredText::dim(context.as_str()).render(supports_color));
        }
        card.add_empty();
        card.add_line(self.message.clone());

        if let Some(fix) = &self.fix {
            card.add_empty();
            card.add_line(format!("FIX: {fix}"));
        }

        card.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_message_and_fix() {
        let rendered = ErrorBlock::new("missing read key")
            .with_context("store.read_key")
            .with_fix("export VITRINE_READ_KEY=...")
            .render(false, false);

        assert!(rendered.contains("[FAIL] ERROR"));
        assert!(rendered.contains("| store.read_key"));
        assert!(rendered.contains("FIX: export VITRINE_READ_KEY=..."));
    }
}
