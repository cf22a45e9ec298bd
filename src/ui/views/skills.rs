use vitrine::domain::entities::Skill;
use vitrine::domain::services::group_by_category;
use vitrine::domain::value_objects::Section;

use crate::ui::blocks::header::SectionHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Skills grouped by category, each with an optional proficiency bar
pub struct SkillsView<'a> {
    skills: &'a [Skill],
}

impl<'a> SkillsView<'a> {
    pub fn new(skills: &'a [Skill]) -> Self {
        Self { skills }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out =
            SectionHeader::for_section(Section::Skills).render(supports_color, supports_unicode);

        let groups = group_by_category(self.skills);
        let name_width = self
            .skills
            .iter()
            .map(|s| s.metadata.skill_name.chars().count())
            .max()
            .unwrap_or(0);

        for group in groups {
            out.push('\n');
            out.push_str(&ColoredText::plain(group.label).bold().render(supports_color));
            out.push('\n');

            for skill in group.skills {
                let meta = &skill.metadata;
                let icon = match meta.icon() {
                    Some(icon) if supports_unicode => icon.to_string(),
                    _ => Icon::Bullet.colored(supports_color, supports_unicode),
                };
                let mut line = format!("  {icon} {:<name_width$}", meta.skill_name);
                if let Some(level) = meta.proficiency() {
                    line.push_str(&format!(
                        "  {} {level:>3}%",
                        proficiency_bar(level, supports_color, supports_unicode)
                    ));
                }
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }
        out
    }
}

/// Bar of [`theme::PROFICIENCY_BAR_WIDTH`] cells filled in proportion to `level`
pub fn proficiency_bar(level: u8, supports_color: bool, supports_unicode: bool) -> String {
    let width = theme::PROFICIENCY_BAR_WIDTH;
    let filled = (usize::from(level.min(100)) * width + 50) / 100;
    let (full, empty) = if supports_unicode {
        (theme::bars::FILLED, theme::bars::EMPTY)
    } else {
        (theme::bars_ascii::FILLED, theme::bars_ascii::EMPTY)
    };

    format!(
        "{}{}",
        ColoredText::info(full.repeat(filled)).render(supports_color),
        ColoredText::dim(empty.repeat(width - filled)).render(supports_color)
    )
}
