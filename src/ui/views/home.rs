use vitrine::domain::entities::PortfolioSettings;
use vitrine::domain::value_objects::Section;

use crate::ui::blocks::header::SectionHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Hero block: name, job title and the first subtitle
pub struct HomeView<'a> {
    settings: &'a PortfolioSettings,
}

impl<'a> HomeView<'a> {
    pub fn new(settings: &'a PortfolioSettings) -> Self {
        Self { settings }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let meta = &self.settings.metadata;
        let mut out = SectionHeader::for_section(Section::Home).render(supports_color, supports_unicode);

        out.push_str(&format!(
            "{}\n",
            ColoredText::plain(meta.full_name.as_str()).bold().render(supports_color)
        ));
        if !meta.job_title.trim().is_empty() {
            out.push_str(&format!(
                "{}\n",
                ColoredText::info(meta.job_title.as_str()).render(supports_color)
            ));
        }

        if let Some(first) = meta.subtitles().first() {
            out.push_str(&format!(
                "{} {}{}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                first,
                Icon::Cursor.colored(supports_color, supports_unicode)
            ));
        }

        for (label, url) in meta.social_links() {
            out.push_str(&format!(
                "{} {:<9}{}\n",
                Icon::Link.colored(supports_color, supports_unicode),
                label,
                ColoredText::dim(url).render(supports_color)
            ));
        }
        out
    }
}
