use anyhow::Result;
use promptdeck_browser::BrowserSession;

use super::{apply_filter_args, drain_feedback, format};

pub async fn run(session: &mut BrowserSession, filters: &[String], page: u32) -> Result<()> {
    session.load_catalog().await;
    apply_filter_args(session, filters);

    session.refresh();
    session.settle().await;

    // Page bounds come from the first response; an out-of-range request
    // is ignored, matching the browser's disabled-button behavior.
    if page > 1 {
        session.set_page(page);
        if session.current_page() != page {
            eprintln!(
                "warning: page {page} is out of range (1..={})",
                session.total_pages()
            );
        }
        session.settle().await;
    }

    drain_feedback(session);
    format::print_cards(session);

    Ok(())
}
