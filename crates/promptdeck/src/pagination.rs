/// Page bounds derived from the latest successful response.
///
/// The total is never computed client-side from record counts; it comes
/// from the backend's `total_pages`, defaulting to 1 when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    total: u32,
}

impl Pager {
    pub fn new() -> Self {
        Self { total: 1 }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Apply the `total_pages` from the latest successful response.
    pub fn apply_total(&mut self, total_pages: Option<u32>) {
        self.total = total_pages.unwrap_or(1).max(1);
    }

    /// Whether a requested page change is within bounds. The UI disables
    /// the buttons, but programmatic misuse must be guarded here too.
    pub fn accepts(&self, page: u32) -> bool {
        page >= 1 && page <= self.total
    }

    pub fn has_next(&self, current: u32) -> bool {
        current < self.total
    }

    pub fn has_prev(&self, current: u32) -> bool {
        current > 1
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_pages_are_rejected() {
        let mut pager = Pager::new();
        pager.apply_total(Some(5));

        assert!(!pager.accepts(0));
        assert!(!pager.accepts(6));
        assert!(pager.accepts(1));
        assert!(pager.accepts(5));
    }

    #[test]
    fn absent_total_defaults_to_one_and_disables_next() {
        let mut pager = Pager::new();
        pager.apply_total(None);

        assert_eq!(pager.total(), 1);
        assert!(!pager.has_next(1));
        assert!(!pager.has_prev(1));
    }

    #[test]
    fn zero_total_is_clamped_to_one() {
        let mut pager = Pager::new();
        pager.apply_total(Some(0));
        assert_eq!(pager.total(), 1);
    }

    #[test]
    fn navigation_predicates_track_bounds() {
        let mut pager = Pager::new();
        pager.apply_total(Some(3));

        assert!(pager.has_next(2));
        assert!(!pager.has_next(3));
        assert!(pager.has_prev(2));
        assert!(!pager.has_prev(1));
    }
}
