// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::quality::RenderQuality;
use crate::rotation::Rotation;

/// Notification emitted by an [`ImageView`](crate::ImageView).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewEvent {
    /// A zoom request was applied.
    ///
    /// Emitted once per request, even when clamping leaves the zoom where it
    /// was.
    ZoomChanged {
        /// The zoom after clamping.
        zoom: f64,
    },
    /// A rotation request was applied.
    AngleChanged {
        /// The snapped rotation.
        rotation: Rotation,
    },
    /// The view settled; the host should repaint now at `quality`.
    RedrawRequested {
        /// Quality to paint with.
        quality: RenderQuality,
    },
}

/// Handle returned by [`ImageView::subscribe`](crate::ImageView::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ViewEvent)>;

/// Registered event callbacks, called in subscription order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &ViewEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
