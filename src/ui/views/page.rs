//! Whole-page view
//!
//! Renders the selected sections in page order. Collection sections with
//! nothing in them are left out, the same way the site hides them.

use vitrine::domain::value_objects::Section;
use vitrine::PageContent;

use super::{
    about::AboutView, contact::ContactView, experience::ExperienceView, home::HomeView,
    projects::ProjectsView, skills::SkillsView,
};
use crate::ui::blocks::warning::FallbackNotice;
use crate::ui::primitives::text::ColoredText;

pub struct PageView<'a> {
    page: &'a PageContent,
    sections: Vec<Section>,
    width: usize,
}

impl<'a> PageView<'a> {
    /// `sections` empty means the whole page
    pub fn new(page: &'a PageContent, sections: &[Section], width: usize) -> Self {
        let mut sections = if sections.is_empty() {
            Section::ALL.to_vec()
        } else {
            sections.to_vec()
        };
        sections.sort();
        sections.dedup();
        Self {
            page,
            sections,
            width,
        }
    }

    /// Sections that will actually be rendered
    pub fn visible_sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .copied()
            .filter(|s| match s {
                Section::Skills => !self.page.skills.is_empty(),
                Section::Experience => !self.page.experience.is_empty(),
                Section::Projects => !self.page.projects.is_empty(),
                Section::Home | Section::About | Section::Contact => true,
            })
            .collect()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let page = self.page;
        let visible = self.visible_sections();
        let mut blocks: Vec<String> = Vec::new();

        if let Some(notice) =
            FallbackNotice::new(&page.warnings).render(supports_color, supports_unicode)
        {
            blocks.push(notice);
        }

        if visible.len() > 1 {
            let nav: Vec<String> = visible.iter().map(|s| s.href()).collect();
            blocks.push(format!(
                "{}\n",
                ColoredText::dim(nav.join("  ")).render(supports_color)
            ));
        }

        for section in visible {
            let (c, u) = (supports_color, supports_unicode);
            blocks.push(match section {
                Section::Home => HomeView::new(&page.settings).render(c, u),
                Section::About => AboutView::new(&page.settings, self.width).render(c, u),
                Section::Skills => SkillsView::new(&page.skills).render(c, u),
                Section::Experience => ExperienceView::new(&page.experience, self.width).render(c, u),
                Section::Projects => ProjectsView::new(&page.projects, self.width).render(c, u),
                Section::Contact => ContactView::new(&page.settings).render(c, u),
            });
        }

        blocks.join("\n")
    }
}
