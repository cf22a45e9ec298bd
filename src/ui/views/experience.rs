use vitrine::domain::entities::Experience;
use vitrine::domain::value_objects::Section;

use crate::ui::blocks::header::SectionHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::card::wrap;

/// Timeline of roles, in the order given
pub struct ExperienceView<'a> {
    entries: &'a [Experience],
    width: usize,
}

impl<'a> ExperienceView<'a> {
    pub fn new(entries: &'a [Experience], width: usize) -> Self {
        Self { entries, width }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out =
            SectionHeader::for_section(Section::Experience).render(supports_color, supports_unicode);

        for entry in self.entries {
            let meta = &entry.metadata;
            out.push('\n');

            let mut title = ColoredText::plain(meta.role.as_str()).bold().render(supports_color);
            if !meta.company_name.trim().is_empty() {
                title.push_str(&format!(" @ {}", meta.company_name));
            }
            out.push_str(&title);
            out.push('\n');

            let mut info = vec![meta.date_range_label()];
            if let Some(kind) = meta.kind() {
                info.push(kind.label().to_string());
            }
            out.push_str(&format!(
                "  {}",
                ColoredText::dim(info.join(" | ")).render(supports_color)
            ));
            if meta.is_ongoing() {
                out.push(' ');
                out.push_str(&Icon::Ongoing.colored(supports_color, supports_unicode));
            }
            out.push('\n');

            if let Some(description) = meta.description.as_deref().map(str::trim) {
                for line in wrap(description, self.width.saturating_sub(2).max(20)) {
                    if !line.is_empty() {
                        out.push_str(&format!("  {line}\n"));
                    }
                }
            }
        }
        out
    }
}
