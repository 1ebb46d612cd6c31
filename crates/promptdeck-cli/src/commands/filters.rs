use anyhow::Result;
use promptdeck_browser::BrowserSession;

use super::{drain_feedback, format};

pub async fn run(session: &mut BrowserSession) -> Result<()> {
    session.load_catalog().await;
    drain_feedback(session);
    format::print_filter_groups(session);

    Ok(())
}
