//! Vehicle selection state machine
//!
//! Two states: `Unselected` and `Selected(id)`. The selected id always
//! refers to a vehicle present in the store; unknown ids are rejected and
//! leave the current selection untouched.

use crate::error::FleetError;
use crate::fleet::{FleetStore, Vehicle};

/// Holds the currently selected vehicle id, if any.
///
/// The machine is live for the whole session: `select` moves to
/// `Selected(id)` from any state, `clear` returns to `Unselected`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    /// New selection, initially unselected
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a vehicle by id.
    ///
    /// Fails with [`FleetError::InvalidSelection`] if the id is not in the
    /// store; the current selection is left unchanged in that case.
    /// Re-selecting the already-selected id succeeds and is a no-op.
    pub fn select(&mut self, store: &FleetStore, id: &str) -> Result<(), FleetError> {
        if !store.contains(id) {
            return Err(FleetError::InvalidSelection { id: id.to_string() });
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    /// Clear the selection. Returns true if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// The selected id, if any
    pub fn id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the selection against the store.
    ///
    /// Never dangles: `select` only admits ids the store contains, and the
    /// store is immutable after construction.
    pub fn current<'a>(&self, store: &'a FleetStore) -> Option<&'a Vehicle> {
        self.selected.as_deref().and_then(|id| store.get(id))
    }

    /// Whether a vehicle is selected
    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }
}
