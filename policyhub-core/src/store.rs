use crate::error::{ApiError, StoreError};
use crate::policy::{Policy, PolicyDraft};
use crate::session::Session;
use crate::subscribers::{Subscribers, SubscriptionId};
use crate::PolicyApi;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Number of policies shown per page.
pub const PAGE_SIZE: usize = 7;

#[must_use]
pub const fn total_pages(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// The visible window onto the policy collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolicyPage {
    pub items: Vec<Policy>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl PolicyPage {
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Observable holder of the fetched policy collection and the current page.
///
/// Local state only changes after the server acknowledged a request. Votes,
/// owners and dates are taken verbatim from server responses.
pub struct PolicyStore {
    api: Rc<dyn PolicyApi>,
    policies: RefCell<Vec<Policy>>,
    current_page: Cell<usize>,
    subscribers: Subscribers,
}

impl PolicyStore {
    #[must_use]
    pub fn new(api: Rc<dyn PolicyApi>) -> Self {
        Self {
            api,
            policies: RefCell::new(Vec::new()),
            current_page: Cell::new(1),
            subscribers: Subscribers::new(),
        }
    }

    #[must_use]
    pub fn policies(&self) -> Vec<Policy> {
        self.policies.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.policies.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policies.borrow().is_empty()
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page.get()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.len())
    }

    /// Slice `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` of the collection.
    #[must_use]
    pub fn page(&self) -> PolicyPage {
        let policies = self.policies.borrow();
        let current_page = self.current_page.get();
        let start = current_page.saturating_sub(1) * PAGE_SIZE;
        let items = policies
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect();
        PolicyPage {
            items,
            current_page,
            total_pages: total_pages(policies.len()),
            total: policies.len(),
        }
    }

    /// Move to page `page`; values outside `1..=total_pages` are ignored.
    pub fn set_page(&self, page: usize) {
        if page == 0 || page > self.total_pages() || page == self.current_page.get() {
            return;
        }
        self.current_page.set(page);
        self.subscribers.notify();
    }

    /// Replace the collection with the server's full list.
    ///
    /// # Errors
    ///
    /// Returns the API error; the previous collection is kept.
    pub async fn fetch_policies(&self) -> Result<usize, StoreError> {
        let fetched = self.api.list_policies().await.map_err(|err| {
            log::error!("Error fetching policies: {err}");
            StoreError::from(err)
        })?;
        let count = fetched.len();
        self.policies.replace(fetched);
        log::debug!("Fetched {count} policies");
        self.subscribers.notify();
        Ok(count)
    }

    /// Fetch one policy for the detail view. The collection is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown ids and the API error otherwise.
    pub async fn fetch_policy(&self, id: &str) -> Result<Policy, StoreError> {
        self.api.get_policy(id).await.map_err(|err| match err {
            ApiError::NotFound => StoreError::NotFound,
            other => {
                log::error!("Error fetching policy details: {other}");
                StoreError::from(other)
            }
        })
    }

    /// Submit a new policy and append the server's copy of it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthenticated`] without contacting the server
    /// when `session` is not active, or the API error on failure.
    pub async fn add_policy(
        &self,
        session: &Session,
        draft: &PolicyDraft,
    ) -> Result<Policy, StoreError> {
        let Some(token) = session.bearer() else {
            log::warn!("User is not logged in.");
            return Err(StoreError::Unauthenticated);
        };
        let created = self.api.add_policy(token, draft).await.map_err(|err| {
            log::error!("Error adding policy: {err}");
            StoreError::from(err)
        })?;
        self.policies.borrow_mut().push(created.clone());
        log::debug!("Added policy {}", created.id);
        self.subscribers.notify();
        Ok(created)
    }

    /// Vote for policy `id` and adopt the server's vote list for it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthenticated`] without contacting the server
    /// when `session` is not active, or the API error on failure.
    pub async fn upvote_policy(&self, session: &Session, id: &str) -> Result<Vec<String>, StoreError> {
        let Some(token) = session.bearer() else {
            log::warn!("User is not logged in.");
            return Err(StoreError::Unauthenticated);
        };
        let updated = self.api.upvote_policy(token, id).await.map_err(|err| {
            log::error!("Error upvoting policy: {err}");
            StoreError::from(err)
        })?;
        let mut changed = false;
        for policy in self.policies.borrow_mut().iter_mut().filter(|p| p.id == id) {
            policy.votes.clone_from(&updated.votes);
            changed = true;
        }
        if changed {
            self.subscribers.notify();
        }
        Ok(updated.votes)
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}

#[cfg(test)]
mod tests {
    use super::total_pages;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(7), 1);
        assert_eq!(total_pages(8), 2);
        assert_eq!(total_pages(14), 2);
        assert_eq!(total_pages(15), 3);
    }
}
