use vitrine::domain::entities::PortfolioSettings;
use vitrine::domain::value_objects::Section;

use crate::ui::blocks::header::SectionHeader;
use crate::ui::widgets::card::wrap;

pub struct AboutView<'a> {
    settings: &'a PortfolioSettings,
    width: usize,
}

impl<'a> AboutView<'a> {
    pub fn new(settings: &'a PortfolioSettings, width: usize) -> Self {
        Self { settings, width }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let meta = &self.settings.metadata;
        let mut header = SectionHeader::for_section(Section::About);
        if let Some(image) = &meta.profile_image {
            header.add("Photo", image.display_url());
        }
        if let Some(resume) = &meta.resume_pdf {
            header.add("Resume", resume.display_url());
        }

        let mut out = header.render(supports_color, supports_unicode);
        for paragraph in meta.about_me.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            out.push('\n');
            for line in wrap(paragraph, self.width) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}
