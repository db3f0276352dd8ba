//! Owned state of one view session: the record store, the page window, the
//! create form and whether its dialog is open.
//!
//! The two write paths reconcile differently on purpose:
//! - create reloads the whole list from the API after the server confirms,
//!   so the new record shows up with whatever id and ordering the server chose;
//! - delete removes the row locally after the server confirms and does not
//!   reload.
//!
//! Any change that routes both through one code path has to pick a single
//! reconciliation rule and update the tests for the other.

pub mod form;
pub mod pagination;
pub mod store;

pub use form::{NATIONAL_ID_MAX_LEN, PersonForm};
pub use pagination::{DEFAULT_PAGE_SIZE, Pagination};
pub use store::RecordStore;

use crate::api::PersonApi;
use crate::core::{FormErrors, Person};
use tracing::{debug, error, info, warn};

/// Result of submitting the create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FormErrors),
    /// The server accepted the record. Holds the echoed record when the reply
    /// carried one.
    Created(Option<Person>),
    /// The request failed; the form keeps its values.
    Failed,
}

pub struct Session<A: PersonApi> {
    api: A,
    store: RecordStore,
    pagination: Pagination,
    form: PersonForm,
    dialog_open: bool,
}

impl<A: PersonApi> Session<A> {
    pub fn new(api: A, page_size: usize) -> Self {
        Self {
            api,
            store: RecordStore::new(),
            pagination: Pagination::new(page_size),
            form: PersonForm::new(),
            dialog_open: false,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn form(&self) -> &PersonForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PersonForm {
        &mut self.form
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Closes the dialog. Typed values survive until a successful submit;
    /// validation messages do not.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.form.set_errors(FormErrors::new());
    }

    /// Reloads every record. Returns false when the list request failed and
    /// the previous list is still shown.
    pub async fn refresh(&mut self) -> bool {
        let loaded = self.store.load(&self.api).await.is_ok();
        self.pagination.clamp(self.store.len());
        loaded
    }

    /// Rows of the current page.
    pub fn visible(&self) -> &[Person] {
        self.pagination.slice(self.store.persons())
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.store.len())
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination.has_next(self.store.len())
    }

    pub fn has_prev_page(&self) -> bool {
        self.pagination.has_prev()
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.pagination.next(self.store.len());
        debug!(page = self.pagination.page(), moved, "next page");
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.pagination.prev();
        debug!(page = self.pagination.page(), moved, "previous page");
        moved
    }

    /// Validates the form and, when valid, posts it.
    ///
    /// On success the form is cleared, the list is reloaded and the dialog
    /// closes. A failing reload at that point is only logged.
    pub async fn submit_form(&mut self) -> SubmitOutcome {
        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                debug!(errors = %errors, "create form rejected");
                self.form.set_errors(errors.clone());
                return SubmitOutcome::Invalid(errors);
            }
        };
        self.form.set_errors(FormErrors::new());

        match self.api.create(&payload).await {
            Ok(created) => {
                match &created {
                    Some(person) => info!(id = person.id, name = %person.name, "person created"),
                    None => info!(name = %payload.name, "person created"),
                }
                self.form.reset();
                if !self.refresh().await {
                    warn!("list reload after create failed; showing previous list");
                }
                self.dialog_open = false;
                SubmitOutcome::Created(created)
            }
            Err(err) => {
                error!(error = %err, "failed to create person");
                SubmitOutcome::Failed
            }
        }
    }

    /// Deletes `id` remotely and, once confirmed, drops it from the local list.
    ///
    /// The page index is clamped afterwards so removing the last row of the
    /// last page moves back instead of showing an empty page.
    pub async fn delete(&mut self, id: u32) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                self.store.remove_local(id);
                self.pagination.clamp(self.store.len());
                info!(id, "person removed");
                true
            }
            Err(err) => {
                error!(id, error = %err, "failed to remove person");
                false
            }
        }
    }
}
