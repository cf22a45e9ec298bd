use anyhow::Result;
use vitrine::domain::value_objects::Section;
use vitrine::presentation::output::page_json;
use vitrine::PageLoader;

use super::Session;
use crate::ui::views::page::PageView;

pub async fn cmd_show(session: &Session, sections: &[Section]) -> Result<()> {
    let service = session.service()?;
    tracing::info!(store = %service.store_name(), "loading page");
    let page = PageLoader::new(&service).load().await;
    if session.ui.verbose > 0 && !session.ui.json {
        eprintln!("Store: {}", service.store_name());
    }

    if session.ui.json {
        crate::ui::json::emit_document(&page_json(&page, sections))?;
        return Ok(());
    }

    let view = PageView::new(&page, sections, session.width());
    print!("{}", view.render(session.ui.color, session.ui.unicode));
    Ok(())
}
