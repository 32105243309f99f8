//! Concrete place storage: identity, roster, and closure window.

use rustc_hash::FxHashMap;

use cn_core::{AgentId, Day, GeoPoint};

use crate::{Container, PlaceError, PlaceKind, PlaceResult};

// ── ClosureWindow ─────────────────────────────────────────────────────────────

/// Half-open span of days `[close_day, reopen_day)` during which a place is
/// closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosureWindow {
    pub close_day:  Day,
    pub reopen_day: Day,
}

impl ClosureWindow {
    pub fn new(close_day: Day, reopen_day: Day) -> Self {
        Self { close_day, reopen_day }
    }

    /// `true` if `day` falls outside the closure.
    #[inline]
    pub fn is_open(&self, day: Day) -> bool {
        day < self.close_day || day >= self.reopen_day
    }
}

// ── Place ─────────────────────────────────────────────────────────────────────

/// A labelled roster of agents.
///
/// The roster keeps insertion order in a `Vec` (so partner sampling can index
/// it directly) plus an `FxHashMap` from agent to slot for O(1) membership
/// checks and removal.
#[derive(Clone, Debug)]
pub struct Place {
    label:   String,
    kind:    PlaceKind,
    anchor:  GeoPoint,
    roster:  Vec<AgentId>,
    slots:   FxHashMap<AgentId, usize>,
    closure: Option<ClosureWindow>,
}

impl Place {
    /// Create an empty place.
    pub fn new(label: impl Into<String>, kind: PlaceKind, anchor: GeoPoint) -> Self {
        Self {
            label:   label.into(),
            kind,
            anchor,
            roster:  Vec::new(),
            slots:   FxHashMap::default(),
            closure: None,
        }
    }

    /// Create a place and enroll `members` in order.
    ///
    /// Fails on the first duplicate.
    pub fn with_members(
        label:   impl Into<String>,
        kind:    PlaceKind,
        anchor:  GeoPoint,
        members: impl IntoIterator<Item = AgentId>,
    ) -> PlaceResult<Self> {
        let mut place = Self::new(label, kind, anchor);
        for agent in members {
            place.enroll(agent)?;
        }
        Ok(place)
    }

    /// Add `agent` to the roster.
    pub fn enroll(&mut self, agent: AgentId) -> PlaceResult<()> {
        if self.slots.contains_key(&agent) {
            return Err(PlaceError::AlreadyEnrolled { agent, place: self.label.clone() });
        }
        self.slots.insert(agent, self.roster.len());
        self.roster.push(agent);
        Ok(())
    }

    /// Remove `agent` from the roster.
    ///
    /// Uses `swap_remove`, so the last member takes the vacated slot.
    pub fn unenroll(&mut self, agent: AgentId) -> PlaceResult<()> {
        let slot = self
            .slots
            .remove(&agent)
            .ok_or_else(|| PlaceError::NotEnrolled { agent, place: self.label.clone() })?;
        self.roster.swap_remove(slot);
        if let Some(&moved) = self.roster.get(slot) {
            self.slots.insert(moved, slot);
        }
        Ok(())
    }

    /// Close the place for `[close_day, reopen_day)`, replacing any earlier window.
    pub fn set_closure(&mut self, window: ClosureWindow) {
        self.closure = Some(window);
    }

    pub fn clear_closure(&mut self) {
        self.closure = None;
    }

    pub fn closure(&self) -> Option<ClosureWindow> {
        self.closure
    }
}

impl Container for Place {
    fn label(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> PlaceKind {
        self.kind
    }

    fn anchor(&self) -> GeoPoint {
        self.anchor
    }

    fn members(&self) -> &[AgentId] {
        &self.roster
    }

    fn contains(&self, agent: AgentId) -> bool {
        self.slots.contains_key(&agent)
    }

    fn is_open(&self, day: Day) -> bool {
        self.closure.is_none_or(|w| w.is_open(day))
    }
}
