//! Expand/collapse lifecycle of the project detail overlay.
//!
//! The overlay is either closed or showing exactly one project. Opening needs
//! the on-screen rectangle of the card that was clicked; without it the open is
//! dropped and nothing changes. Selecting another project while one is shown
//! replaces it in place.

use crate::catalog::ProjectId;
use crate::motion::{Rect, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mounted at the origin rectangle, not yet animating.
    Entering,
    Shown,
    /// Animating back to the origin rectangle before unmounting.
    Leaving,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub project: ProjectId,
    pub origin: Rect,
    pub viewport: Viewport,
    /// Distinguishes timers and frames scheduled for an earlier selection.
    pub generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayState {
    Closed { next_generation: u64 },
    Open { selection: Selection, phase: Phase },
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::Closed { next_generation: 0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayAction {
    /// `origin` is `None` when the card could not be measured.
    Select {
        project: ProjectId,
        origin: Option<Rect>,
        viewport: Viewport,
    },
    /// One frame has passed since the given selection mounted.
    Settle { generation: u64 },
    Close,
    /// The collapse animation of the given selection has finished.
    Finish { generation: u64 },
}

impl OverlayState {
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Closed { .. } => None,
            Self::Open { selection, .. } => Some(selection),
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Closed { .. } => None,
            Self::Open { phase, .. } => Some(*phase),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn is_expanded(&self, project: ProjectId) -> bool {
        self.selection()
            .is_some_and(|selection| selection.project == project)
    }

    fn next_generation(&self) -> u64 {
        match self {
            Self::Closed { next_generation } => *next_generation,
            Self::Open { selection, .. } => selection.generation.wrapping_add(1),
        }
    }

    pub fn apply(self, action: OverlayAction) -> Self {
        match (self, action) {
            (
                state,
                OverlayAction::Select {
                    project,
                    origin,
                    viewport,
                },
            ) => {
                let Some(origin) = origin else {
                    log::debug!("project {project} has no measurable origin, open skipped");
                    return state;
                };
                Self::Open {
                    selection: Selection {
                        project,
                        origin,
                        viewport,
                        generation: state.next_generation(),
                    },
                    phase: Phase::Entering,
                }
            }
            (
                Self::Open {
                    selection,
                    phase: Phase::Entering,
                },
                OverlayAction::Settle { generation },
            ) if selection.generation == generation => Self::Open {
                selection,
                phase: Phase::Shown,
            },
            (
                Self::Open {
                    selection,
                    phase: Phase::Entering | Phase::Shown,
                },
                OverlayAction::Close,
            ) => Self::Open {
                selection,
                phase: Phase::Leaving,
            },
            (
                Self::Open {
                    selection,
                    phase: Phase::Leaving,
                },
                OverlayAction::Finish { generation },
            ) if selection.generation == generation => Self::Closed {
                next_generation: generation.wrapping_add(1),
            },
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fade::{FadeWindow, PointerEvents, ScrollState};

    const VIEWPORT: Viewport = Viewport {
        width: 1440.0,
        height: 900.0,
    };

    fn rect() -> Option<Rect> {
        Rect::measured(40.0, 300.0, 400.0, 225.0)
    }

    fn select(project: ProjectId) -> OverlayAction {
        OverlayAction::Select {
            project,
            origin: rect(),
            viewport: VIEWPORT,
        }
    }

    fn generation(state: &OverlayState) -> u64 {
        state.selection().expect("overlay open").generation
    }

    fn open_and_settle(state: OverlayState, project: ProjectId) -> OverlayState {
        let state = state.apply(select(project));
        let generation = generation(&state);
        state.apply(OverlayAction::Settle { generation })
    }

    #[test]
    fn select_opens_entering_then_settles() {
        let state = OverlayState::default().apply(select(1));
        assert_eq!(state.phase(), Some(Phase::Entering));

        let generation = generation(&state);
        let state = state.apply(OverlayAction::Settle { generation });
        assert_eq!(state.phase(), Some(Phase::Shown));
        assert!(state.is_expanded(1));
    }

    #[test]
    fn second_selection_replaces_first() {
        let state = open_and_settle(OverlayState::default(), 1);
        let state = state.apply(select(2));

        let selection = state.selection().expect("overlay open");
        assert_eq!(selection.project, 2);
        assert!(!state.is_expanded(1));
        assert_eq!(state.phase(), Some(Phase::Entering));
    }

    #[test]
    fn unmeasured_origin_leaves_state_untouched() {
        let closed = OverlayState::default();
        let after = closed.apply(OverlayAction::Select {
            project: 1,
            origin: None,
            viewport: VIEWPORT,
        });
        assert_eq!(after, closed);

        let open = open_and_settle(OverlayState::default(), 1);
        let after = open.apply(OverlayAction::Select {
            project: 2,
            origin: None,
            viewport: VIEWPORT,
        });
        assert_eq!(after, open);
    }

    #[test]
    fn close_plays_out_before_clearing() {
        let state = open_and_settle(OverlayState::default(), 3);
        let generation = generation(&state);

        let leaving = state.apply(OverlayAction::Close);
        assert_eq!(leaving.phase(), Some(Phase::Leaving));
        assert!(leaving.is_expanded(3));

        let closed = leaving.apply(OverlayAction::Finish { generation });
        assert!(!closed.is_open());
        assert!(closed.selection().is_none());
    }

    #[test]
    fn stale_finish_does_not_close_newer_selection() {
        let state = open_and_settle(OverlayState::default(), 1);
        let first_generation = generation(&state);
        let leaving = state.apply(OverlayAction::Close);

        let reopened = leaving.apply(select(2));
        let after = reopened.apply(OverlayAction::Finish {
            generation: first_generation,
        });
        assert_eq!(after, reopened);
        assert!(after.is_expanded(2));
    }

    #[test]
    fn stale_settle_is_ignored() {
        let first = OverlayState::default().apply(select(1));
        let first_generation = generation(&first);
        let second = first.apply(select(2));

        let after = second.apply(OverlayAction::Settle {
            generation: first_generation,
        });
        assert_eq!(after.phase(), Some(Phase::Entering));
    }

    #[test]
    fn generations_keep_increasing_across_close() {
        let state = open_and_settle(OverlayState::default(), 1);
        let first_generation = generation(&state);
        let closed = state
            .apply(OverlayAction::Close)
            .apply(OverlayAction::Finish {
                generation: first_generation,
            });

        let reopened = closed.apply(select(1));
        assert!(generation(&reopened) > first_generation);
    }

    #[test]
    fn replacing_selection_starts_fresh_generation() {
        let first = open_and_settle(OverlayState::default(), 1);
        let first_generation = generation(&first);

        let second = first.apply(select(2));
        assert!(second.is_expanded(2));
        assert_eq!(second.phase(), Some(Phase::Entering));
        assert_ne!(generation(&second), first_generation);

        let third = second.apply(select(1));
        assert_ne!(generation(&third), generation(&second));
        assert_ne!(generation(&third), first_generation);
    }

    #[test]
    fn close_when_closed_is_noop() {
        let closed = OverlayState::default();
        assert_eq!(closed.apply(OverlayAction::Close), closed);
    }

    #[test]
    fn closing_restores_hero_interactivity_above_fade_start() {
        let scroll = ScrollState::observe(&FadeWindow::default(), 50.0, VIEWPORT.height);
        let state = open_and_settle(OverlayState::default(), 4);
        assert_eq!(scroll.hero_pointer_events(state.is_open()), PointerEvents::None);

        let generation = generation(&state);
        let closed = state
            .apply(OverlayAction::Close)
            .apply(OverlayAction::Finish { generation });
        assert!(closed.selection().is_none());
        assert_eq!(scroll.hero_pointer_events(closed.is_open()), PointerEvents::Auto);
    }
}
