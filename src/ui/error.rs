use vitrine::VitrineError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    match err.downcast_ref::<VitrineError>() {
        Some(vitrine_err) => format_vitrine_error(vitrine_err, supports_color, supports_unicode),
        None => ErrorBlock::new(format!("{err:#}")).render(supports_color, supports_unicode),
    }
}

fn format_vitrine_error(
    err: &VitrineError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let block = match err {
        VitrineError::MissingSetting { key, env } => ErrorBlock::new(err.to_string())
            .with_context(*key)
            .with_fix(format!(
                "Set `{}` in vitrine.toml, export {env}=..., or pass --fixture <file>",
                key.rsplit('.').next().unwrap_or(key)
            )),
        VitrineError::InvalidConfig { file, message } => ErrorBlock::new(message.clone())
            .with_context(file.display().to_string())
            .with_fix("Fix the TOML and try again."),
        VitrineError::InvalidFixture { file, message } => ErrorBlock::new(message.clone())
            .with_context(file.display().to_string())
            .with_fix("A fixture is a JSON array of objects or {\"objects\": [...]}."),
        VitrineError::Store(vitrine::StoreError::Unauthorized { .. }) => {
            ErrorBlock::new(err.to_string()).with_fix("Check the bucket slug and read key.")
        }
        VitrineError::Store(vitrine::StoreError::WriteDisabled) => ErrorBlock::new(err.to_string())
            .with_fix("Set store.write_key or VITRINE_WRITE_KEY to send submissions."),
        other => ErrorBlock::new(other.to_string()),
    };
    block.render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = crate::ui::json::emit(&serde_json::json!({
            "event": "error",
            "message": format!("{err:#}"),
        }));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    let color = caps.supports_color && !caps.is_ci;
    eprint!("{}", format_error(err, color, caps.supports_unicode));
}
