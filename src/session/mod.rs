//! Data-entry session tying the form, the draft list and the collaborators together
//!
//! A [`Session`] is owned by a single UI instance and driven one user action
//! at a time. The two asynchronous boundaries, loading the catalog and
//! submitting the draft list, each carry a [`RequestState`].

use crate::catalog::{BrigadeId, Catalog, CategoryId, ItemId, SizeId};
use crate::draft::{DraftError, DraftList, DraftStats, Need};
use crate::error::Error;
use crate::gateway::{CatalogSource, NeedsGateway, SubmissionReceipt};
use crate::selection::NeedForm;
use crate::validation::validate;

/// Progress of an asynchronous request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl RequestState {
    /// Whether a request is outstanding
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }

    /// Error message of the last failed attempt
    pub fn failure(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Marks a request state InFlight for as long as it lives
///
/// Dropping the guard without calling [`InFlight::finish`] (the request
/// future was dropped mid-await) records the request as cancelled.
struct InFlight<'a> {
    state: &'a mut RequestState,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a mut RequestState) -> Self {
        *state = RequestState::InFlight;
        Self { state, armed: true }
    }

    fn finish(mut self, outcome: RequestState) {
        *self.state = outcome;
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::warn!("request dropped before completion");
            *self.state = RequestState::Failed("cancelled".to_string());
        }
    }
}

/// One user's data-entry session
#[derive(Debug, Default)]
pub struct Session {
    catalog: Catalog,
    form: NeedForm,
    editing: Option<usize>,
    draft: DraftList,
    load_state: RequestState,
    submit_state: RequestState,
}

impl Session {
    /// Start a session with no catalog loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over an already loaded catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            load_state: RequestState::Succeeded,
            ..Self::default()
        }
    }

    /// Reference data currently loaded
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The form being filled in
    pub fn form(&self) -> &NeedForm {
        &self.form
    }

    /// Mutable access to the form
    pub fn form_mut(&mut self) -> &mut NeedForm {
        &mut self.form
    }

    /// Needs entered so far
    pub fn draft(&self) -> &DraftList {
        &self.draft
    }

    /// Index of the entry being edited, if any
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// State of the last catalog load
    pub fn load_state(&self) -> &RequestState {
        &self.load_state
    }

    /// State of the last submission
    pub fn submit_state(&self) -> &RequestState {
        &self.submit_state
    }

    /// Summary counts over the draft list
    pub fn stats(&self) -> DraftStats {
        self.draft.stats()
    }

    /// Fetch the catalog, replacing the current one on success
    ///
    /// On failure the previous catalog stays in place.
    pub async fn load_catalog(&mut self, source: &dyn CatalogSource) -> Result<(), Error> {
        if self.load_state.is_in_flight() {
            return Err(Error::Busy);
        }
        let guard = InFlight::start(&mut self.load_state);

        match source.load_catalog().await {
            Ok(catalog) => {
                guard.finish(RequestState::Succeeded);
                self.catalog = catalog;
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to load catalog: {}", e);
                guard.finish(RequestState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Forward to [`NeedForm::select_brigade`]
    pub fn select_brigade(&mut self, id: Option<BrigadeId>) {
        self.form.select_brigade(id);
    }

    /// Forward to [`NeedForm::select_category`]
    pub fn select_category(&mut self, id: Option<CategoryId>) {
        self.form.select_category(id);
    }

    /// Forward to [`NeedForm::select_item`]
    pub fn select_item(&mut self, id: Option<ItemId>) {
        self.form.select_item(id);
    }

    /// Forward to [`NeedForm::select_size`]
    pub fn select_size(&mut self, id: Option<SizeId>) {
        self.form.select_size(id);
    }

    /// Forward to [`NeedForm::set_value`]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.form.set_value(value);
    }

    /// Forward to [`NeedForm::set_note`]
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.form.set_note(note);
    }

    /// Validate the form and store the result
    ///
    /// Appends a new entry, or replaces the one being edited. Returns the
    /// index written. The form is cleared only on success.
    pub fn commit(&mut self) -> Result<usize, Error> {
        let need = validate(&self.catalog, &self.form)?;

        let index = match self.editing {
            Some(index) => {
                self.draft.update(index, need)?;
                log::debug!("replaced draft entry {}", index);
                index
            }
            None => {
                let index = self.draft.add(need);
                log::debug!("added draft entry {}", index);
                index
            }
        };

        self.cancel_edit();
        Ok(index)
    }

    /// Load entry `index` into the form and make it the edit target
    pub fn begin_edit(&mut self, index: usize) -> Result<&Need, Error> {
        let need = self.draft.get(index).ok_or(DraftError::IndexOutOfRange {
            index,
            len: self.draft.len(),
        })?;

        let category_id = self.catalog.item(need.item_id).map(|i| i.category_id);
        self.form.prefill(
            need.brigade_id,
            category_id,
            need.item_id,
            need.size_id,
            need.value.to_string(),
            need.note.clone().unwrap_or_default(),
        );
        self.editing = Some(index);
        Ok(need)
    }

    /// Leave edit mode and clear the form; the draft list is untouched
    pub fn cancel_edit(&mut self) {
        self.form.clear();
        self.editing = None;
    }

    /// Remove entry `index` and keep the edit target pointing at the same entry
    pub fn remove(&mut self, index: usize) -> Result<Need, Error> {
        let removed = self.draft.remove(index)?;
        match self.editing {
            Some(target) if target == index => self.cancel_edit(),
            Some(target) if target > index => self.editing = Some(target - 1),
            _ => {}
        }
        Ok(removed)
    }

    /// Send the draft list to `gateway`
    ///
    /// On success the list and the form are cleared. On failure the list is
    /// left intact so the user can retry.
    pub async fn submit(&mut self, gateway: &dyn NeedsGateway) -> Result<SubmissionReceipt, Error> {
        if self.submit_state.is_in_flight() {
            return Err(Error::Busy);
        }
        if self.draft.is_empty() {
            return Err(Error::EmptyDraft);
        }

        let payloads = self.draft.payloads();
        let guard = InFlight::start(&mut self.submit_state);
        log::info!("submitting {} needs", payloads.len());

        match gateway.submit(&payloads).await {
            Ok(receipt) => {
                guard.finish(RequestState::Succeeded);
                self.draft.clear();
                self.cancel_edit();
                Ok(receipt)
            }
            Err(e) => {
                log::warn!("submission failed: {}", e);
                let message = match e {
                    Error::SubmissionFailed(message) => message,
                    other => other.to_string(),
                };
                guard.finish(RequestState::Failed(message.clone()));
                Err(Error::SubmissionFailed(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    fn session() -> Session {
        Session::with_catalog(Catalog::sample())
    }

    fn enter(session: &mut Session, brigade: u32, item: u32, size: Option<u32>, value: &str) -> usize {
        let category = session.catalog().item(item).map(|i| i.category_id);
        session.select_brigade(Some(brigade));
        session.select_category(category);
        session.select_item(Some(item));
        session.select_size(size);
        session.set_value(value);
        session.commit().unwrap()
    }

    #[test]
    fn test_commit_clears_form_but_keeps_brigade() {
        let mut session = session();
        assert_eq!(enter(&mut session, 1, 2, None, "3"), 0);
        assert_eq!(session.draft().len(), 1);
        assert_eq!(session.form().brigade_id(), Some(1));
        assert_eq!(session.form().item_id(), None);
        assert_eq!(session.form().value(), "");
    }

    #[test]
    fn test_failed_commit_keeps_form() {
        let mut session = session();
        session.select_brigade(Some(1));
        session.select_item(Some(1));
        session.set_value("4");
        let err = session.commit().unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingSize)));
        assert_eq!(session.form().item_id(), Some(1));
        assert!(session.draft().is_empty());
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut session = session();
        enter(&mut session, 1, 2, None, "3");
        enter(&mut session, 2, 4, None, "120.5");

        let need = session.begin_edit(1).unwrap().clone();
        assert_eq!(need.item_id, 4);
        assert_eq!(session.form().category_id(), Some(4));
        assert_eq!(session.form().value(), "120.5");
        assert_eq!(session.editing(), Some(1));

        session.set_value("80");
        assert_eq!(session.commit().unwrap(), 1);
        assert_eq!(session.draft().len(), 2);
        assert_eq!(session.draft().get(1).map(|n| n.value), Some(80.0));
        assert_eq!(session.editing(), None);
    }

    #[test]
    fn test_cancel_edit_leaves_list_alone() {
        let mut session = session();
        enter(&mut session, 1, 2, None, "3");
        session.begin_edit(0).unwrap();
        session.set_value("99");
        session.cancel_edit();
        assert_eq!(session.editing(), None);
        assert_eq!(session.form().value(), "");
        assert_eq!(session.draft().get(0).map(|n| n.value), Some(3.0));
    }

    #[test]
    fn test_begin_edit_out_of_range() {
        let mut session = session();
        assert!(matches!(
            session.begin_edit(0),
            Err(Error::Draft(DraftError::IndexOutOfRange { index: 0, len: 0 }))
        ));
    }

    #[test]
    fn test_remove_adjusts_edit_target() {
        let mut session = session();
        enter(&mut session, 1, 2, None, "1");
        enter(&mut session, 1, 2, None, "2");
        enter(&mut session, 1, 2, None, "3");

        session.begin_edit(2).unwrap();
        session.remove(0).unwrap();
        assert_eq!(session.editing(), Some(1));

        session.remove(1).unwrap();
        assert_eq!(session.editing(), None);
        assert_eq!(session.draft().len(), 1);
    }

    #[tokio::test]
    async fn test_request_in_flight_is_busy() {
        let mut session = session();
        enter(&mut session, 1, 2, None, "3");
        session.submit_state = RequestState::InFlight;
        let api = crate::gateway::MockApi::default();
        assert!(matches!(session.submit(&api).await, Err(Error::Busy)));
        assert_eq!(session.draft().len(), 1);

        session.load_state = RequestState::InFlight;
        assert!(matches!(session.load_catalog(&api).await, Err(Error::Busy)));
    }

    #[test]
    fn test_dropped_guard_marks_cancelled() {
        let mut state = RequestState::Idle;
        {
            let _guard = InFlight::start(&mut state);
        }
        assert_eq!(state.failure(), Some("cancelled"));

        InFlight::start(&mut state).finish(RequestState::Succeeded);
        assert_eq!(state, RequestState::Succeeded);
    }

    #[tokio::test]
    async fn test_submit_empty_draft() {
        let mut session = session();
        let api = crate::gateway::MockApi::default();
        assert!(matches!(session.submit(&api).await, Err(Error::EmptyDraft)));
        assert_eq!(session.submit_state(), &RequestState::Idle);
    }
}
