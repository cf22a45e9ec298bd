//! Project cards and the single-project detail view

use vitrine::domain::entities::Project;
use vitrine::domain::value_objects::Section;

use crate::ui::blocks::header::SectionHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::card::{Card, CardStyle};

pub struct ProjectsView<'a> {
    projects: &'a [Project],
    width: usize,
}

impl<'a> ProjectsView<'a> {
    pub fn new(projects: &'a [Project], width: usize) -> Self {
        Self { projects, width }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out =
            SectionHeader::for_section(Section::Projects).render(supports_color, supports_unicode);
        for project in self.projects {
            out.push_str(&project_card(project, self.width, supports_color, supports_unicode));
        }
        out
    }
}

/// Compact card: name, short description, first tech tags, links
pub fn project_card(
    project: &Project,
    width: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let meta = &project.metadata;
    let mut card = card_for(project, supports_color, supports_unicode).max_width(inner_width(width));

    if !meta.short_description.trim().is_empty() {
        card.add_line(meta.short_description.trim());
    }

    let tags = meta.card_technologies();
    if !tags.is_empty() {
        card.add_line(ColoredText::dim(tag_line(tags)).render(supports_color));
    }

    add_links(&mut card, project, supports_color, supports_unicode);
    card.render(supports_color, supports_unicode)
}

/// Everything known about one project
pub fn project_detail(
    project: &Project,
    width: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let meta = &project.metadata;
    let mut card = card_for(project, supports_color, supports_unicode).max_width(inner_width(width));

    for paragraph in meta.description().split("\n\n").map(str::trim) {
        if !paragraph.is_empty() {
            card.add_line(paragraph);
            card.add_empty();
        }
    }

    if !meta.technologies.is_empty() {
        card.add_line(format!(
            "{} {}",
            ColoredText::dim("Tech:").render(supports_color),
            meta.technologies.join(", ")
        ));
    }
    if let Some(image) = &meta.project_image {
        card.add_line(format!(
            "{} {}",
            ColoredText::dim("Image:").render(supports_color),
            image.display_url()
        ));
    }
    add_links(&mut card, project, supports_color, supports_unicode);
    card.render(supports_color, supports_unicode)
}

fn card_for(project: &Project, supports_color: bool, supports_unicode: bool) -> Card {
    let name = ColoredText::plain(project.display_name()).bold().render(supports_color);
    if project.metadata.featured {
        Card::with_title(format!(
            "{} {} {}",
            name,
            Icon::Featured.colored(supports_color, supports_unicode),
            ColoredText::warning("Featured").render(supports_color)
        ))
        .style(CardStyle::Featured)
    } else {
        Card::with_title(name)
    }
}

fn add_links(card: &mut Card, project: &Project, supports_color: bool, supports_unicode: bool) {
    let link = Icon::Link.colored(supports_color, supports_unicode);
    if let Some(demo) = project.metadata.demo_url() {
        card.add_line(format!("{link} Live demo: {demo}"));
    }
    if let Some(repo) = project.metadata.repo_url() {
        card.add_line(format!("{link} Source: {repo}"));
    }
}

fn tag_line(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn inner_width(width: usize) -> usize {
    width.saturating_sub(4)
}
