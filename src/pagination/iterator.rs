use log::{debug, info};

use super::urls::build_url;
use crate::domain::{QueryParams, User, UsersResponse};
use crate::errors::{FetchError, log_fetch_failure};
use crate::http::PageSource;

/// Users requested per page
pub const PAGE_SIZE: u32 = 5;

/// Outcome of a call to [`UserIterator::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Cursor moved to this index within already fetched users
    Moved(usize),
    /// Cursor was at the end; this page is now requested
    PageRequested(u32),
}

/// Outcome of a call to [`UserIterator::reconcile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// The requested page was already received, nothing was sent
    UpToDate,
    Fetched(u32),
    /// The fetch was abandoned and logged
    Failed(u32),
}

/// Read-only view handed to observers after every visible change
#[derive(Debug, Clone, Copy)]
pub struct IteratorView<'a> {
    pub current: Option<usize>,
    pub users: &'a [User],
    pub loading: bool,
}

impl<'a> IteratorView<'a> {
    pub fn current_user(&self) -> Option<&'a User> {
        self.current.and_then(|index| self.users.get(index))
    }
}

type Observer = Box<dyn FnMut(&IteratorView<'_>) + Send>;

/// Walks users of a paginated directory one at a time, fetching pages on demand.
///
/// Fetched users are appended to a flat list that only grows. The cursor is `None`
/// until the first page arrives. Moving past the last known user requests the next
/// page; [`reconcile`](Self::reconcile) fetches whatever page is requested but not
/// yet received, so callers run it after [`advance`](Self::advance) reports
/// [`Step::PageRequested`].
pub struct UserIterator<S> {
    source: S,
    endpoint: String,
    users: Vec<User>,
    current: Option<usize>,
    loading: bool,
    requested_page: u32,
    last_received_page: Option<u32>,
    observers: Vec<Observer>,
}

impl<S: PageSource> UserIterator<S> {
    pub fn new(endpoint: impl Into<String>, source: S) -> Self {
        Self {
            source,
            endpoint: endpoint.into(),
            users: Vec::new(),
            current: None,
            loading: false,
            requested_page: 1,
            last_received_page: None,
            observers: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn requested_page(&self) -> u32 {
        self.requested_page
    }

    pub fn last_received_page(&self) -> Option<u32> {
        self.last_received_page
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn current_user(&self) -> Option<&User> {
        self.view().current_user()
    }

    pub fn view(&self) -> IteratorView<'_> {
        IteratorView {
            current: self.current,
            users: &self.users,
            loading: self.loading,
        }
    }

    /// Register a callback that sees the state after each visible change
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&IteratorView<'_>) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Move to the next user, or request the next page when there is none.
    ///
    /// The cursor does not move when a page is requested; it moves once the
    /// page arrives.
    pub fn advance(&mut self) -> Step {
        let next = self.current.map_or(0, |index| index + 1);

        if next < self.users.len() {
            self.current = Some(next);
            debug!("Cursor moved forward to {}", next);
            self.notify();
            Step::Moved(next)
        } else {
            self.requested_page += 1;
            debug!("End of known users, requesting page {}", self.requested_page);
            Step::PageRequested(self.requested_page)
        }
    }

    /// Move to the previous user, stopping at the first one
    pub fn retreat(&mut self) -> Option<usize> {
        if let Some(index) = self.current.filter(|&index| index > 0) {
            self.current = Some(index - 1);
            debug!("Cursor moved back to {}", index - 1);
            self.notify();
        }
        self.current
    }

    pub fn needs_fetch(&self) -> bool {
        self.last_received_page != Some(self.requested_page)
    }

    /// Fetch the requested page if it has not been received yet.
    ///
    /// The check runs again after each successful fetch that changed the last
    /// received page, and stops once that page number stops changing. Failures
    /// are logged and leave users, cursor and last received page as they were.
    /// `loading` is always false again when this returns.
    pub async fn reconcile(&mut self) -> Reconciled {
        if !self.needs_fetch() {
            debug!("Page {} already received, nothing to fetch", self.requested_page);
            return Reconciled::UpToDate;
        }

        loop {
            let seen = self.last_received_page;
            let outcome = self.fetch_requested().await;

            if let Reconciled::Failed(_) = outcome {
                return outcome;
            }
            if self.last_received_page == seen || !self.needs_fetch() {
                return outcome;
            }
            debug!(
                "Server answered page {:?} for page {}, checking again",
                self.last_received_page, self.requested_page
            );
        }
    }

    /// First reconcile after construction; loads page 1
    pub async fn activate(&mut self) -> Reconciled {
        self.reconcile().await
    }

    /// Advance, then fetch if that ran past the known users
    pub async fn next_user(&mut self) -> Step {
        let step = self.advance();
        if let Step::PageRequested(_) = step {
            self.reconcile().await;
        }
        step
    }

    pub fn prev_user(&mut self) -> Option<usize> {
        self.retreat()
    }

    // --- Helper Methods ---

    async fn fetch_requested(&mut self) -> Reconciled {
        let page = self.requested_page;
        self.set_loading(true);

        let outcome = match self.fetch(page).await {
            Ok(response) => {
                self.apply(response);
                Reconciled::Fetched(page)
            }
            Err(e) => {
                log_fetch_failure(&e);
                Reconciled::Failed(page)
            }
        };

        self.set_loading(false);
        outcome
    }

    async fn fetch(&mut self, page: u32) -> Result<UsersResponse, FetchError> {
        let params = QueryParams {
            page,
            results: PAGE_SIZE,
        };
        let url = build_url(&self.endpoint, &params)?;
        info!("Fetching page {} from {}", page, url);
        self.source.fetch_page(&url).await
    }

    fn apply(&mut self, response: UsersResponse) {
        let received = response.results.len();
        self.last_received_page = Some(response.info.page);
        self.users.extend(response.results);
        self.current = self.cursor_after_fetch();

        info!(
            "Received page {} with {} users ({} total)",
            response.info.page,
            received,
            self.users.len()
        );
    }

    /// Every successful fetch moves the cursor one step. This lands on the first
    /// new user only while each page appends at least one user, so the step is
    /// clamped to the list.
    fn cursor_after_fetch(&self) -> Option<usize> {
        let stepped = self.current.map_or(0, |index| index + 1);
        match self.users.len() {
            0 => None,
            len => Some(stepped.min(len - 1)),
        }
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.notify();
    }

    fn notify(&mut self) {
        let view = IteratorView {
            current: self.current,
            users: &self.users,
            loading: self.loading,
        };
        for observer in self.observers.iter_mut() {
            observer(&view);
        }
    }
}
