use std::sync::Arc;
use std::time::Duration;

use promptdeck::{
    Feedback, FilterGroup, Pager, QueryState, ResourceCard, ResourceKind, build_filter_groups,
    project_records,
};
use promptdeck_api::{ApiClient, FetchError, ListPage};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Completion of one fetch generation, dispatched back into the session.
#[derive(Debug)]
enum SessionEvent {
    PageLoaded {
        generation: u64,
        result: Result<ListPage, FetchError>,
    },
}

/// One listing page's worth of browser state: query, in-flight request,
/// displayed cards, and pagination.
///
/// At most one request per session may commit results. Every fetch gets a
/// fresh generation number and a cancellation token; issuing a new fetch
/// cancels the previous token, and a completion whose generation is no
/// longer current is discarded without touching any state, so results
/// apply in last-request-wins order regardless of arrival order.
///
/// Fetches run as spawned tasks, so the session must live on a tokio
/// runtime. Drive completions with [`process_next`](Self::process_next)
/// or [`settle`](Self::settle).
pub struct BrowserSession {
    client: Arc<ApiClient>,
    kind: ResourceKind,
    page_size: u32,
    timeout: Duration,

    query: QueryState,
    pager: Pager,
    cards: Vec<ResourceCard>,
    loading: bool,
    ever_loaded: bool,

    generation: u64,
    current: Option<CancellationToken>,
    pending: usize,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,

    feedback: Vec<Feedback>,
}

impl BrowserSession {
    pub fn new(client: Arc<ApiClient>, kind: ResourceKind) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            client,
            kind,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
            query: QueryState::new(),
            pager: Pager::new(),
            cards: Vec::new(),
            loading: false,
            ever_loaded: false,
            generation: 0,
            current: None,
            pending: 0,
            events_tx,
            events_rx,
            feedback: Vec::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Load the filter catalog. Called once per session, before the first
    /// fetch; not re-triggered by search or filter changes.
    ///
    /// Filters are a progressive enhancement: on failure the sidebar stays
    /// empty, a warning lands in feedback, and search keeps working.
    pub async fn load_catalog(&mut self) {
        match self.client.fetch_facets(self.kind).await {
            Ok(values) => {
                self.query.filter_groups = build_filter_groups(self.kind, &values);
            }
            Err(e) => {
                self.feedback
                    .push(Feedback::warning(format!("{} filters unavailable: {e}", self.kind)));
            }
        }
    }

    /// Replace the search text and start a fetch. Search is immediate:
    /// every change issues a request and supersedes the previous one.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.set_search_text(text);
        self.spawn_fetch();
    }

    /// Toggle one filter option. Does not fetch; filter application is an
    /// explicit separate action so multi-selecting doesn't storm requests.
    pub fn set_filter_option(&mut self, group_title: &str, option_id: &str, checked: bool) {
        self.query.set_filter_option(group_title, option_id, checked);
    }

    /// Fetch with the current filter selections.
    pub fn apply_filters(&mut self) {
        self.spawn_fetch();
    }

    /// Request a page change. Out-of-range or same-page requests are
    /// ignored; an accepted change starts a fetch.
    pub fn set_page(&mut self, page: u32) {
        if page == self.query.page || !self.pager.accepts(page) {
            return;
        }
        self.query.page = page;
        self.spawn_fetch();
    }

    /// Fetch with the current query state. Hosts call this once after
    /// mount for the initial load.
    pub fn refresh(&mut self) {
        self.spawn_fetch();
    }

    fn spawn_fetch(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }

        let token = CancellationToken::new();
        self.current = Some(token.clone());
        self.generation += 1;
        self.loading = true;
        self.pending += 1;

        let generation = self.generation;
        let client = Arc::clone(&self.client);
        let kind = self.kind;
        let query = self.query.to_query_pairs(kind, self.page_size);
        let timeout = self.timeout;
        let events = self.events_tx.clone();

        tokio::spawn(async move {
            let fetch = client.fetch_page(kind, &query);
            let result = tokio::select! {
                _ = token.cancelled() => Err(FetchError::Cancelled),
                outcome = tokio::time::timeout(timeout, fetch) => match outcome {
                    Ok(result) => result,
                    // Timeout takes the cancelled path: displayed state stays put.
                    Err(_) => Err(FetchError::Cancelled),
                },
            };

            // Session may have been dropped; nothing left to notify then.
            let _ = events.send(SessionEvent::PageLoaded { generation, result });
        });
    }

    fn apply(&mut self, event: SessionEvent) {
        let SessionEvent::PageLoaded { generation, result } = event;
        self.pending -= 1;

        if generation != self.generation {
            // Superseded. Not even the loading flag belongs to it anymore.
            return;
        }

        self.loading = false;
        self.current = None;

        match result {
            Ok(page) => {
                self.cards = project_records(self.kind, &page.records);
                self.pager.apply_total(page.total_pages);
                self.ever_loaded = true;
            }
            Err(FetchError::Cancelled) => {}
            Err(e) => {
                // Stale-but-present beats blanking; keep the cards we have.
                self.feedback
                    .push(Feedback::error(format!("{} fetch failed: {e}", self.kind)));
            }
        }
    }

    /// Apply the next completed fetch, waiting for one if necessary.
    /// Returns false immediately when nothing is outstanding.
    pub async fn process_next(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        let event = self.events_rx.recv().await;
        if let Some(event) = event {
            self.apply(event);
        }
        true
    }

    /// Drive every outstanding fetch to completion.
    pub async fn settle(&mut self) {
        while self.process_next().await {}
    }

    /// Cards from the most recent committed response.
    pub fn cards(&self) -> &[ResourceCard] {
        &self.cards
    }

    /// True while the latest-issued request is outstanding.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// True during the very first load, before anything has ever been
    /// displayed. Hosts use this to tell "Loading…" from stale-but-present.
    pub fn initial_load(&self) -> bool {
        self.loading && !self.ever_loaded
    }

    pub fn search_text(&self) -> &str {
        &self.query.search_text
    }

    pub fn filter_groups(&self) -> &[FilterGroup] {
        &self.query.filter_groups
    }

    pub fn current_page(&self) -> u32 {
        self.query.page
    }

    pub fn total_pages(&self) -> u32 {
        self.pager.total()
    }

    pub fn has_next_page(&self) -> bool {
        self.pager.has_next(self.query.page)
    }

    pub fn has_prev_page(&self) -> bool {
        self.pager.has_prev(self.query.page)
    }

    /// Drain accumulated diagnostics for presentation.
    pub fn take_feedback(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.feedback)
    }
}
