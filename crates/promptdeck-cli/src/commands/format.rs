use promptdeck_browser::BrowserSession;

const MAX_TITLE_WIDTH: usize = 35;
const LINE_BUDGET: usize = 90;

pub fn print_cards(session: &BrowserSession) {
    let cards = session.cards();
    if cards.is_empty() {
        println!("No {} found.", session.kind());
        return;
    }

    let title_width = cards
        .iter()
        .map(|c| c.title.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_TITLE_WIDTH);

    let desc_budget = LINE_BUDGET.saturating_sub(2 + title_width + 2);

    println!("{} ({})", session.kind().display_label(), cards.len());

    for card in cards {
        let title = truncate(&card.title, title_width);
        let desc = truncate(&card.description, desc_budget);
        println!("  {:<width$}  {}", title, desc, width = title_width);
    }

    println!("\npage {} of {}", session.current_page(), session.total_pages());
}

pub fn print_filter_groups(session: &BrowserSession) {
    let groups = session.filter_groups();
    if groups.is_empty() {
        println!("No filters available for {}.", session.kind());
        return;
    }

    let mut first = true;
    for group in groups {
        if !first {
            println!();
        }
        first = false;

        println!("{}", group.title);
        if group.options.is_empty() {
            println!("  (none)");
        }
        for option in &group.options {
            println!("  {}", option.label);
        }
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_exact_length_unchanged() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_long_string_adds_ellipsis() {
        assert_eq!(truncate("hello world", 6), "hello…");
    }

    #[test]
    fn truncate_handles_unicode() {
        assert_eq!(truncate("café latte", 5), "café…");
    }
}
