//! View state for the users page.

use std::any::Any;

use console_states::State;

use crate::users::model::UserRecord;
use crate::users::policy::MetaContentSelection;

/// Delete confirmation: at most one record pending a confirm/cancel
/// decision, cleared on either outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingDelete {
    #[default]
    Idle,

    /// The confirmation modal is open for this record.
    Confirming(UserRecord),
}

/// Navigation the view layer should perform. Routing itself is external;
/// the page only records the intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditNavigation {
    pub user_id: String,
}

/// State owned by the single active users view.
#[derive(Debug, Clone)]
pub struct UsersPageState {
    pub search_query: String,
    /// Caller-chosen optional columns, when the column picker is in use.
    pub meta_selection: Option<MetaContentSelection>,
    pub show_actions: bool,
    pending_delete: PendingDelete,
    edit_navigation: Option<EditNavigation>,
}

impl Default for UsersPageState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            meta_selection: None,
            show_actions: true,
            pending_delete: PendingDelete::Idle,
            edit_navigation: None,
        }
    }
}

impl UsersPageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The search query, when non-blank.
    pub fn active_query(&self) -> Option<&str> {
        let trimmed = self.search_query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn pending_delete(&self) -> &PendingDelete {
        &self.pending_delete
    }

    /// Opens the confirmation modal for `user`.
    pub fn request_delete(&mut self, user: UserRecord) {
        self.pending_delete = PendingDelete::Confirming(user);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = PendingDelete::Idle;
    }

    /// Takes the confirmed record and closes the modal. Deletion itself is
    /// the caller's job (dispatching the delete command).
    pub fn confirm_delete(&mut self) -> Option<UserRecord> {
        match std::mem::take(&mut self.pending_delete) {
            PendingDelete::Confirming(user) => Some(user),
            PendingDelete::Idle => None,
        }
    }

    pub fn request_edit(&mut self, user_id: impl Into<String>) {
        self.edit_navigation = Some(EditNavigation {
            user_id: user_id.into(),
        });
    }

    /// Takes the pending navigation intent, if any.
    pub fn take_edit_navigation(&mut self) -> Option<EditNavigation> {
        self.edit_navigation.take()
    }
}

impl State for UsersPageState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
