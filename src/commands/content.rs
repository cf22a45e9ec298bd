//! Single-collection commands: settings, projects, skills, experience

use anyhow::{bail, Result};
use vitrine::presentation::output::{
    experience_json, projects_json, settings_json, skills_json,
};
use vitrine::presentation::OutputFormat;
use vitrine::{ContentService, PortfolioSettings};

use super::Session;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::about::AboutView;
use crate::ui::views::contact::ContactView;
use crate::ui::views::experience::ExperienceView;
use crate::ui::views::home::HomeView;
use crate::ui::views::projects::{project_detail, ProjectsView};
use crate::ui::views::skills::SkillsView;

/// Settings from the store, or the built-in defaults (`false`) when the
/// store has none or the read fails
pub(crate) async fn settings_or_default(service: &ContentService) -> (PortfolioSettings, bool) {
    match service.get_portfolio_settings().await {
        Ok(Some(settings)) => (settings, true),
        Ok(None) => {
            tracing::info!("no settings in store, using built-in defaults");
            (PortfolioSettings::builtin_default(), false)
        }
        Err(err) => {
            tracing::warn!(error = %err, "using built-in settings");
            (PortfolioSettings::builtin_default(), false)
        }
    }
}

pub async fn cmd_settings(session: &Session) -> Result<()> {
    let service = session.service()?;
    let (settings, from_store) = settings_or_default(&service).await;
    let ui = &session.ui;

    match OutputFormat::from_json_flag(ui.json) {
        OutputFormat::Json => crate::ui::json::emit_document(&settings_json(&settings, from_store))?,
        OutputFormat::Text => {
            if !from_store {
                println!(
                    "{}\n",
                    ColoredText::warning("No settings found in the store; showing built-in defaults.")
                        .render(ui.color)
                );
            }
            let blocks = [
                HomeView::new(&settings).render(ui.color, ui.unicode),
                AboutView::new(&settings, session.width()).render(ui.color, ui.unicode),
                ContactView::new(&settings).render(ui.color, ui.unicode),
            ];
            print!("{}", blocks.join("\n"));
        }
    }
    Ok(())
}

pub async fn cmd_projects(session: &Session, featured: bool, detail: Option<&str>) -> Result<()> {
    let service = session.service()?;
    let projects = if featured {
        service.get_featured_projects().await?
    } else {
        service.get_projects().await?
    };
    let ui = &session.ui;

    if let Some(slug) = detail {
        let Some(project) = projects.iter().find(|p| p.slug == slug) else {
            bail!("no project with slug '{slug}'");
        };
        match OutputFormat::from_json_flag(ui.json) {
            OutputFormat::Json => crate::ui::json::emit_document(project)?,
            OutputFormat::Text => print!(
                "{}",
                project_detail(project, session.width(), ui.color, ui.unicode)
            ),
        }
        return Ok(());
    }

    match OutputFormat::from_json_flag(ui.json) {
        OutputFormat::Json => crate::ui::json::emit_document(&projects_json(&projects))?,
        OutputFormat::Text if projects.is_empty() => print_empty("No projects found.", ui.color),
        OutputFormat::Text => print!(
            "{}",
            ProjectsView::new(&projects, session.width()).render(ui.color, ui.unicode)
        ),
    }
    Ok(())
}

pub async fn cmd_skills(session: &Session) -> Result<()> {
    let skills = session.service()?.get_skills().await?;
    let ui = &session.ui;

    match OutputFormat::from_json_flag(ui.json) {
        OutputFormat::Json => crate::ui::json::emit_document(&skills_json(&skills))?,
        OutputFormat::Text if skills.is_empty() => print_empty("No skills found.", ui.color),
        OutputFormat::Text => print!("{}", SkillsView::new(&skills).render(ui.color, ui.unicode)),
    }
    Ok(())
}

pub async fn cmd_experience(session: &Session) -> Result<()> {
    let experience = session.service()?.get_experience().await?;
    let ui = &session.ui;

    match OutputFormat::from_json_flag(ui.json) {
        OutputFormat::Json => crate::ui::json::emit_document(&experience_json(&experience))?,
        OutputFormat::Text if experience.is_empty() => {
            print_empty("No experience found.", ui.color)
        }
        OutputFormat::Text => print!(
            "{}",
            ExperienceView::new(&experience, session.width()).render(ui.color, ui.unicode)
        ),
    }
    Ok(())
}

fn print_empty(message: &str, color: bool) {
    println!("{}", ColoredText::dim(message).render(color));
}
