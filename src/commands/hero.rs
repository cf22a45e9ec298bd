//! Hero typing animation
//!
//! On a terminal the subtitle line is redrawn in place. Piped output gets
//! one line per fully typed subtitle; `--json` streams every frame.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{cursor, QueueableCommand};
use serde::Serialize;
use tokio::sync::Notify;
use vitrine::domain::services::{Frame, Phase};
use vitrine::TypingAnimation;

use super::content::settings_or_default;
use super::Session;
use crate::ui::json::write_event;
use crate::ui::live_region::LiveRegion;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One NDJSON line per animation frame
#[derive(Serialize)]
struct FrameEvent<'a> {
    event: &'static str,
    #[serde(flatten)]
    frame: &'a Frame,
}

impl<'a> FrameEvent<'a> {
    fn new(frame: &'a Frame) -> Self {
        Self {
            event: "frame",
            frame,
        }
    }
}

pub async fn cmd_hero(session: &Session, cycles: Option<u32>) -> Result<()> {
    let service = session.service()?;
    let (settings, _) = settings_or_default(&service).await;
    let ui = session.ui;

    // Without a live terminal the loop would never be seen ending, so one
    // pass is the default there.
    let cycles = cycles.or(if ui.animation { None } else { Some(1) });
    let mut animation =
        TypingAnimation::for_subtitles(settings.metadata.subtitles(), session.config.typing_timings());
    if let Some(cycles) = cycles {
        animation = animation.limit_cycles(cycles);
    }

    let stop = Arc::new(Notify::new());
    let trigger = stop.clone();
    ctrlc::set_handler(move || trigger.notify_one())?;

    let mut out = io::stdout().lock();
    let mut write_error: Option<io::Error> = None;
    let mut keep = |result: io::Result<()>| {
        if let Err(err) = result {
            write_error.get_or_insert(err);
        }
    };

    let completed = if ui.json {
        animation
            .run_until(stop.notified(), |frame| {
                keep(write_event(&mut out, &FrameEvent::new(frame)))
            })
            .await
    } else {
        let meta = &settings.metadata;
        writeln!(
            out,
            "{}",
            ColoredText::plain(meta.full_name.as_str()).bold().render(ui.color)
        )?;
        if !meta.job_title.trim().is_empty() {
            writeln!(out, "{}", ColoredText::info(meta.job_title.as_str()).render(ui.color))?;
        }

        let arrow = Icon::Arrow.colored(ui.color, ui.unicode);
        if ui.animation {
            let cursor_icon = Icon::Cursor.colored(ui.color, ui.unicode);
            let mut region = LiveRegion::new();
            out.queue(cursor::Hide)?;
            let completed = animation
                .run_until(stop.notified(), |frame| {
                    let line = format!("{arrow} {}{cursor_icon}", frame.text);
                    keep(region.update(&mut out, &line));
                })
                .await;
            region.finish(&mut out)?;
            completed
        } else {
            animation
                .run_until(stop.notified(), |frame| {
                    if frame.phase == Phase::Pausing {
                        keep(writeln!(out, "{arrow} {}", frame.text).and_then(|_| out.flush()));
                    }
                })
                .await
        }
    };

    if ui.json {
        write_event(
            &mut out,
            &serde_json::json!({"event": "done", "cycles": completed}),
        )?;
    }
    tracing::debug!(cycles = completed, "hero animation stopped");

    match write_error {
        Some(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
