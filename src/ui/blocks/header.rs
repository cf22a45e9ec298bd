use vitrine::domain::value_objects::Section;

use crate::ui::primitives::text::ColoredText;

/// Title line of a page section, followed by a rule and `label: value` rows
#[derive(Debug, Clone)]
pub struct SectionHeader {
    title: String,
    anchor: Option<&'static str>,
    items: Vec<(String, String)>,
}

impl SectionHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            anchor: None,
            items: Vec::new(),
        }
    }

    pub fn for_section(section: Section) -> Self {
        Self {
            anchor: Some(section.anchor()),
            ..Self::new(section.title())
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        match self.anchor {
            Some(anchor) => out.push_str(&format!(
                "{} {}\n",
                title,
                ColoredText::dim(format!("#{anchor}")).render(supports_color)
            )),
            None => out.push_str(&format!("{title}\n")),
        }

        let rule = if supports_unicode { "─" } else { "-" };
        let width = self.title.chars().count().max(3);
        out.push_str(&ColoredText::dim(rule.repeat(width)).render(supports_color));
        out.push('\n');

        for (label, value) in &self.items {
            out.push_str(&format!(
                "{} {}\n",
                ColoredText::dim(format!("{label}:")).render(supports_color),
                value
            ));
        }
        out
    }
}
