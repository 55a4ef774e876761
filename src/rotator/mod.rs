//! Wraparound text rotation.
//!
//! A [`RotationList`] carries its own position, so each rotator can be driven
//! and tested on its own. Scheduling and fades live in `scheduler`.

use crate::content::{to_owned_list, FACTS, TIPS};
use crate::domain::ValidationError;
use crate::ui::Slot;
use serde::Serialize;

/// Result of a single [`RotationList::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance<'a> {
    /// Entry at the current position.
    pub displayed: &'a str,
    /// Position after this one, wrapped to the list length.
    pub next_index: usize,
}

/// An ordered, non-empty list of display strings and the position of the next one to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationList {
    items: Vec<String>,
    index: usize,
}

impl RotationList {
    /// Create a list starting at position 0.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyRotation` for an empty list.
    pub fn new(items: Vec<String>) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::EmptyRotation);
        }

        Ok(Self { items, index: 0 })
    }

    /// Entry at the current position and the wrapped next position. Does not mutate.
    pub fn advance(&self) -> Advance<'_> {
        Advance {
            displayed: &self.items[self.index],
            next_index: (self.index + 1) % self.items.len(),
        }
    }

    /// Advance and commit the new position, returning the entry to display.
    pub fn rotate(&mut self) -> String {
        let Advance {
            displayed,
            next_index,
        } = self.advance();
        let displayed = displayed.to_string();
        self.index = next_index;
        displayed
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A rotation list bound to the text slot it drives.
#[derive(Debug, Clone)]
pub struct Rotator {
    slot: Slot,
    list: RotationList,
}

impl Rotator {
    pub fn new(slot: Slot, list: RotationList) -> Self {
        Self { slot, list }
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn list(&self) -> &RotationList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut RotationList {
        &mut self.list
    }
}

/// The site's two rotators: facts into `#rotator-fact`, tips into `#rotator-tip`.
pub fn site_rotators() -> Result<Vec<Rotator>, ValidationError> {
    Ok(vec![
        Rotator::new(
            Slot::id("rotator-fact"),
            RotationList::new(to_owned_list(FACTS))?,
        ),
        Rotator::new(
            Slot::id("rotator-tip"),
            RotationList::new(to_owned_list(TIPS))?,
        ),
    ])
}
