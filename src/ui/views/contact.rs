use vitrine::domain::entities::PortfolioSettings;
use vitrine::domain::value_objects::Section;
use vitrine::SubmissionOutcome;

use crate::ui::blocks::header::SectionHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Contact details from the settings
pub struct ContactView<'a> {
    settings: &'a PortfolioSettings,
}

impl<'a> ContactView<'a> {
    pub fn new(settings: &'a PortfolioSettings) -> Self {
        Self { settings }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let meta = &self.settings.metadata;
        let mut out =
            SectionHeader::for_section(Section::Contact).render(supports_color, supports_unicode);

        if !meta.email.trim().is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Mail.colored(supports_color, supports_unicode),
                meta.email.trim()
            ));
        }
        for (label, url) in meta.social_links() {
            out.push_str(&format!(
                "{} {label}: {url}\n",
                Icon::Link.colored(supports_color, supports_unicode)
            ));
        }
        out
    }
}

/// Mail draft ready to open in the visitor's client
pub fn render_mailto(recipient: &str, link: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Draft to {}\n{}\n",
        Icon::Mail.colored(supports_color, supports_unicode),
        recipient,
        ColoredText::info(link).render(supports_color)
    )
}

pub fn render_submission(
    outcome: &SubmissionOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match outcome {
        SubmissionOutcome::Submitted { id } => format!(
            "{} {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("Message sent").render(supports_color),
            ColoredText::dim(format!("({id})")).render(supports_color)
        ),
        SubmissionOutcome::Failed { message } => format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(message.as_str()).render(supports_color)
        ),
    }
}
