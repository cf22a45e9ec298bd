use anyhow::Result;
use vitrine::presentation::output::submission_json;
use vitrine::{compose_mailto, ContactForm, VitrineError};

use super::content::settings_or_default;
use super::Session;
use crate::ui::views::contact::{render_mailto, render_submission};

/// Draft a mail to the portfolio owner, or record a submission with `send`
pub async fn cmd_contact(session: &Session, form: ContactForm, send: bool) -> Result<()> {
    form.validate().map_err(VitrineError::from)?;
    let service = session.service()?;
    let ui = &session.ui;

    if !send {
        let (settings, _) = settings_or_default(&service).await;
        let recipient = settings.metadata.email.trim().to_string();
        let link = compose_mailto(&recipient, &form);

        if ui.json {
            crate::ui::json::emit_document(&serde_json::json!({
                "status": "draft",
                "recipient": recipient,
                "mailto": link,
            }))?;
        } else {
            print!("{}", render_mailto(&recipient, &link, ui.color, ui.unicode));
        }
        return Ok(());
    }

    let outcome = service.submit_contact_form(&form).await;
    if ui.json {
        crate::ui::json::emit_document(&submission_json(&outcome))?;
    } else {
        print!("{}", render_submission(&outcome, ui.color, ui.unicode));
    }

    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
