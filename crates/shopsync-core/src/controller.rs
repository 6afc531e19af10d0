// ── Generic entity list controller ──
//
// One controller per entity type, all instances of the same generic.
// Owns the in-memory collection (an ordered sequence mirroring server
// list order), the pending create draft, and at most one edit session.
//
// Synchronization contract: the collection is a cache of server state
// with no freshness guarantee beyond "as of last fetch". Every
// successful mutation triggers a wholesale refetch; local patches are
// transient optimistic echoes that the refetch overwrites. API errors
// never propagate out of a controller — they are logged, recorded on
// `last_error`, and swallowed, leaving the previous state in place.

use std::sync::Arc;

use tracing::{debug, warn};

use shopsync_api::CatalogClient;

use crate::entity::{CatalogEntity, MutableEntity};
use crate::model::EntityId;

/// Outcome of a controller mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    /// The mutation was accepted and the collection refetched.
    Completed,
    /// Required form fields were missing; no request was issued.
    Blocked,
    /// The request failed; logged and swallowed, form state untouched.
    Failed,
}

impl ActionStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// The single row currently in edit mode, with its pending field values.
#[derive(Debug, Clone)]
pub struct EditSession<D> {
    pub id: EntityId,
    pub draft: D,
}

/// Generic list controller, instantiated once per entity type.
pub struct EntityListController<E: CatalogEntity> {
    client: Arc<CatalogClient>,
    items: Vec<E>,
    create_draft: E::Draft,
    edit: Option<EditSession<E::Draft>>,
    last_error: Option<String>,
}

impl<E: CatalogEntity> EntityListController<E> {
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self {
            client,
            items: Vec::new(),
            create_draft: <E::Draft>::default(),
            edit: None,
            last_error: None,
        }
    }

    /// The current collection, in server list order.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// The pending create-form fields.
    pub fn create_draft(&self) -> &E::Draft {
        &self.create_draft
    }

    pub fn create_draft_mut(&mut self) -> &mut E::Draft {
        &mut self.create_draft
    }

    /// The id currently in edit mode, if any.
    pub fn editing_id(&self) -> Option<EntityId> {
        self.edit.as_ref().map(|session| session.id)
    }

    /// The pending edit-form fields, if a row is in edit mode.
    pub fn edit_draft(&self) -> Option<&E::Draft> {
        self.edit.as_ref().map(|session| &session.draft)
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut E::Draft> {
        self.edit.as_mut().map(|session| &mut session.draft)
    }

    /// The rendered message of the most recent swallowed API error.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Fetch the full collection and replace the owned one wholesale.
    ///
    /// Invoked on mount and after every successful mutation. Not
    /// debounced and not sequenced: overlapping refreshes race and the
    /// last response to resolve wins. On failure the previous
    /// collection is retained.
    pub async fn refresh(&mut self) -> bool {
        match E::list(&self.client).await {
            Ok(items) => {
                debug!(entity = E::LABEL, count = items.len(), "collection refreshed");
                self.items = items;
                self.last_error = None;
                true
            }
            Err(e) => {
                warn!(entity = E::LABEL, error = %e, "refresh failed");
                self.last_error = Some(e.to_string());
                false
            }
        }
    }
}

impl<E: MutableEntity> EntityListController<E> {
    /// Look up a record in the current collection by id.
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Submit the create form.
    ///
    /// Blocked before any request when required fields are empty. On
    /// success the form is cleared and the collection refetched — the
    /// new record only appears via that refetch, since the create
    /// response body carries no usable contract. On failure the form
    /// state is left untouched.
    pub async fn create(&mut self) -> ActionStatus {
        let missing = E::missing_required(&self.create_draft);
        if !missing.is_empty() {
            debug!(entity = E::LABEL, ?missing, "create blocked by required fields");
            return ActionStatus::Blocked;
        }

        match E::create(&self.client, &self.create_draft).await {
            Ok(()) => {
                self.create_draft = <E::Draft>::default();
                self.refresh().await;
                ActionStatus::Completed
            }
            Err(e) => {
                warn!(entity = E::LABEL, error = %e, "create failed");
                self.last_error = Some(e.to_string());
                ActionStatus::Failed
            }
        }
    }

    /// Enter edit mode for `id`, seeding the edit form from the
    /// record's current values.
    ///
    /// At most one row is editable; starting edit on a different row
    /// silently discards any unsaved draft for the previous row.
    pub fn begin_edit(&mut self, id: EntityId) -> bool {
        let Some(draft) = self
            .items
            .iter()
            .find(|item| item.id() == id)
            .map(MutableEntity::seed_draft)
        else {
            return false;
        };
        self.edit = Some(EditSession { id, draft });
        true
    }

    /// Submit the pending edit.
    ///
    /// On success: apply the optimistic echo to the edited row for
    /// immediate feedback, leave edit mode, then refetch — the refetch
    /// is the authority and overwrites the echo wholesale. On failure
    /// the edit session survives untouched.
    pub async fn submit_edit(&mut self) -> ActionStatus {
        let result = {
            let Some(session) = self.edit.as_ref() else {
                debug!(entity = E::LABEL, "submit_edit with no row in edit mode");
                return ActionStatus::Blocked;
            };
            let missing = E::missing_required(&session.draft);
            if !missing.is_empty() {
                debug!(entity = E::LABEL, ?missing, "edit blocked by required fields");
                return ActionStatus::Blocked;
            }
            E::update(&self.client, session.id, &session.draft).await
        };

        match result {
            Ok(()) => {
                if let Some(session) = self.edit.take() {
                    for item in &mut self.items {
                        if item.id() == session.id {
                            let patched = item.apply_draft(&session.draft);
                            *item = patched;
                        }
                    }
                }
                self.refresh().await;
                ActionStatus::Completed
            }
            Err(e) => {
                warn!(entity = E::LABEL, error = %e, "update failed");
                self.last_error = Some(e.to_string());
                ActionStatus::Failed
            }
        }
    }

    /// Delete `id`. No confirmation step.
    ///
    /// On success: optimistic removal from the collection, then the
    /// authoritative refetch.
    pub async fn delete(&mut self, id: EntityId) -> ActionStatus {
        match E::delete(&self.client, id).await {
            Ok(()) => {
                self.items.retain(|item| item.id() != id);
                // A row cannot stay in edit mode once deleted.
                if self.edit.as_ref().is_some_and(|session| session.id == id) {
                    self.edit = None;
                }
                self.refresh().await;
                ActionStatus::Completed
            }
            Err(e) => {
                warn!(entity = E::LABEL, error = %e, "delete failed");
                self.last_error = Some(e.to_string());
                ActionStatus::Failed
            }
        }
    }
}
