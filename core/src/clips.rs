//! Session-scoped clip storage.
//!
//! Every finalized recording is handed to the `ClipStore`, which issues an
//! opaque locator for it. Clip bytes are reference-counted per consumer:
//! the download trigger, the gallery and the share code each hold their own
//! reference to the same underlying clip, and releasing one reference never
//! invalidates the others. An entry is dropped once its count reaches zero.
//!
//! Locators are only meaningful within the session that issued them.

use crate::types::ClipLocator;
use std::collections::HashMap;
use std::sync::Arc;

struct ClipSlot {
    data: Arc<[u8]>,
    refs: usize,
}

/// Reference-counted store for the clips recorded this session.
#[derive(Default)]
pub struct ClipStore {
    next_id: u64,
    clips: HashMap<ClipLocator, ClipSlot>,
}

impl ClipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a clip artifact and returns its locator. The caller holds the
    /// initial reference. The creation timestamp is embedded so locators
    /// issued by an earlier session cannot collide with this session's.
    pub fn create(&mut self, bytes: Vec<u8>, created_at: i64) -> ClipLocator {
        self.next_id += 1;
        let raw = format!("clip:{}-{}", created_at, self.next_id);
        // SAFETY: the generated string is non-empty and far below the length cap.
        let locator = unsafe { ClipLocator::new_unchecked(raw) };

        self.clips.insert(
            locator.clone(),
            ClipSlot {
                data: Arc::from(bytes),
                refs: 1,
            },
        );
        locator
    }

    /// Resolves a locator to the clip bytes, or `None` if the locator was
    /// issued by another session or has been fully released.
    pub fn resolve(&self, locator: &ClipLocator) -> Option<Arc<[u8]>> {
        self.clips.get(locator).map(|slot| Arc::clone(&slot.data))
    }

    /// Takes an additional reference for a new consumer. Returns `false` if
    /// the locator is unknown.
    pub fn retain(&mut self, locator: &ClipLocator) -> bool {
        match self.clips.get_mut(locator) {
            Some(slot) => {
                slot.refs += 1;
                true
            }
            None => false,
        }
    }

    /// Releases one consumer's reference. The clip is dropped when the last
    /// reference goes. Releasing an unknown locator is a no-op.
    pub fn release(&mut self, locator: &ClipLocator) {
        let Some(slot) = self.clips.get_mut(locator) else {
            return;
        };
        slot.refs -= 1;
        if slot.refs == 0 {
            self.clips.remove(locator);
        }
    }

    /// Number of live reference holders for a locator.
    pub fn ref_count(&self, locator: &ClipLocator) -> usize {
        self.clips.get(locator).map_or(0, |slot| slot.refs)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
