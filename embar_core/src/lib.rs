// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained-scene runtime for the embar chart visual.
//!
//! The host invokes the visual on its own update cycle; each update produces a
//! fresh *desired* set of marks (rects, text, paths) with stable identities.
//! [`Scene::tick`] reconciles that set against the previously retained one and
//! returns a keyed diff ([`MarkDiff`]) that a render surface applies with
//! minimal add/update/remove work.
//!
//! Text marks store unshaped strings; shaping and layout live downstream.

mod mark;
mod scene;

pub use mark::{Mark, MarkId, MarkPayload, PathMark, RectMark, TextAnchor, TextBaseline, TextMark};
pub use scene::{MarkDiff, Scene};
