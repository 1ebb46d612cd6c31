use anyhow::Result;
use promptdeck_browser::BrowserSession;

use super::{apply_filter_args, drain_feedback, format};

pub async fn run(session: &mut BrowserSession, query: &str, filters: &[String]) -> Result<()> {
    session.load_catalog().await;
    apply_filter_args(session, filters);

    session.set_search_text(query);
    session.settle().await;

    drain_feedback(session);

    if session.cards().is_empty() {
        println!("No results found for \"{query}\".");
    } else {
        format::print_cards(session);
    }

    Ok(())
}
