// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained scene and its keyed reconciliation step.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::mark::{Mark, MarkId, MarkPayload};

/// One reconciliation operation produced by [`Scene::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark whose id was not previously retained.
    Enter {
        /// The mark id.
        id: MarkId,
        /// Render-order hint of the entering mark.
        z_index: i32,
        /// The entering payload.
        new: Box<MarkPayload>,
    },
    /// A retained mark whose payload or z-index changed.
    Update {
        /// The mark id.
        id: MarkId,
        /// Previous render-order hint.
        old_z_index: i32,
        /// New render-order hint.
        new_z_index: i32,
        /// The previously retained payload.
        old: Box<MarkPayload>,
        /// The new payload.
        new: Box<MarkPayload>,
    },
    /// A retained mark absent from the desired set.
    Exit {
        /// The mark id.
        id: MarkId,
        /// The payload that was retained before removal.
        old: Box<MarkPayload>,
    },
}

impl MarkDiff {
    /// Returns the id this operation applies to.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// A retained set of marks keyed by [`MarkId`].
///
/// Each update the owner computes a full desired mark set and calls
/// [`Scene::tick`]; unchanged marks produce no diff entry, which is what makes
/// repeated renders with identical inputs idempotent.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the retained payload for `id`, if present.
    pub fn get(&self, id: MarkId) -> Option<&(i32, MarkPayload)> {
        self.marks.get(&id)
    }

    /// Iterates over retained `(id, z_index, payload)` entries in id order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (MarkId, i32, &MarkPayload)> {
        let mut ids: Vec<MarkId> = self.marks.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().map(move |id| {
            let (z, payload) = &self.marks[&id];
            (id, *z, payload)
        })
    }

    /// Reconciles the desired mark set against the retained one.
    ///
    /// Returns enter/update operations in ascending id order, followed by exit
    /// operations in ascending id order. Duplicate ids within `desired` are
    /// resolved last-write-wins.
    pub fn tick(&mut self, desired: Vec<Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, (i32, MarkPayload)> =
            HashMap::with_capacity(desired.len());
        for mark in desired {
            next.insert(mark.id, (mark.z_index, mark.payload));
        }

        let mut entered_or_updated: Vec<MarkId> = next.keys().copied().collect();
        entered_or_updated.sort_unstable();

        let mut exited: SmallVec<[MarkId; 8]> = self
            .marks
            .keys()
            .copied()
            .filter(|id| !next.contains_key(id))
            .collect();
        exited.sort_unstable();

        let mut diffs = Vec::new();
        for id in entered_or_updated {
            let (new_z, new_payload) = &next[&id];
            match self.marks.get(&id) {
                None => diffs.push(MarkDiff::Enter {
                    id,
                    z_index: *new_z,
                    new: Box::new(new_payload.clone()),
                }),
                Some((old_z, old_payload)) => {
                    if old_z != new_z || old_payload != new_payload {
                        diffs.push(MarkDiff::Update {
                            id,
                            old_z_index: *old_z,
                            new_z_index: *new_z,
                            old: Box::new(old_payload.clone()),
                            new: Box::new(new_payload.clone()),
                        });
                    }
                }
            }
        }
        for id in exited {
            let (_, old_payload) = self.marks.remove(&id).expect("exited id was retained");
            diffs.push(MarkDiff::Exit {
                id,
                old: Box::new(old_payload),
            });
        }

        self.marks = next;
        diffs
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use peniko::Brush;

    use super::*;
    use crate::mark::RectMark;

    fn rect_mark(id: u64, x: f64) -> Mark {
        Mark::new(
            MarkId::from_raw(id),
            0,
            MarkPayload::Rect(RectMark {
                rect: Rect::new(x, 0.0, x + 10.0, 20.0),
                corner_radius: 0.0,
                fill: Brush::default(),
            }),
        )
    }

    #[test]
    fn first_tick_enters_everything() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]);
        assert_eq!(diffs.len(), 2);
        assert!(matches!(diffs[0], MarkDiff::Enter { id: MarkId(1), .. }));
        assert!(matches!(diffs[1], MarkDiff::Enter { id: MarkId(2), .. }));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn identical_tick_is_empty() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]);
        let diffs = scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]);
        assert!(diffs.is_empty());
    }

    #[test]
    fn changed_payload_updates_in_place() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0)]);
        let diffs = scene.tick(vec![rect_mark(1, 5.0)]);
        assert_eq!(diffs.len(), 1);
        assert!(matches!(diffs[0], MarkDiff::Update { id: MarkId(1), .. }));
    }

    #[test]
    fn missing_ids_exit() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]);
        let diffs = scene.tick(vec![rect_mark(2, 20.0)]);
        assert_eq!(diffs.len(), 1);
        assert!(matches!(diffs[0], MarkDiff::Exit { id: MarkId(1), .. }));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn duplicate_ids_resolve_last_write_wins() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0), rect_mark(1, 40.0)]);
        let (_, payload) = scene.get(MarkId::from_raw(1)).expect("retained");
        let MarkPayload::Rect(r) = payload else {
            panic!("expected rect payload");
        };
        assert_eq!(r.rect.x0, 40.0);
    }

    #[test]
    fn z_index_change_alone_is_an_update() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0)]);
        let mut bumped = rect_mark(1, 0.0);
        bumped.z_index = 5;
        let diffs = scene.tick(vec![bumped]);
        assert!(matches!(
            diffs[0],
            MarkDiff::Update {
                old_z_index: 0,
                new_z_index: 5,
                ..
            }
        ));
    }
}
