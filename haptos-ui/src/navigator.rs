//! Screen-transition state machine
//!
//! Tracks the active screen and decides whether a navigation request is
//! honored. Screens flagged `requires_idle` are refused while the machine
//! is moving or has commands queued; this is a deliberate safety gate,
//! e.g. manual-move and leveling pages must not be enterable mid-job.
//!
//! Back-navigation is shallow by protocol design: a single most-recent
//! previous screen, not a stack. The kill screen is terminal and only
//! reachable through the external fatal-error path.

use haptos_core::ScreenId;

use crate::screens::ScreenMap;

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavOutcome {
    /// Transition accepted; the id is now the active screen
    Entered(ScreenId),
    /// Precondition failed or session killed; no state change
    Rejected,
}

/// Navigation state
#[derive(Debug, Clone)]
pub struct Navigator {
    current: ScreenId,
    previous: Option<ScreenId>,
    killed: bool,
}

impl Navigator {
    /// Start on the given screen (typically the boot page).
    pub fn new(initial: ScreenId) -> Self {
        Self {
            current: initial,
            previous: None,
            killed: false,
        }
    }

    /// The active screen.
    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// The most recent previous screen, if any.
    pub fn previous(&self) -> Option<ScreenId> {
        self.previous
    }

    /// Whether the session has hit the terminal kill screen.
    pub fn is_killed(&self) -> bool {
        self.killed
    }

    /// Attempt a transition to `target`.
    ///
    /// `idle` is the machine idle predicate sampled by the caller.
    /// Re-entering the active screen is accepted and leaves the previous
    /// screen untouched.
    pub fn try_enter(&mut self, map: &ScreenMap, target: ScreenId, idle: bool) -> NavOutcome {
        if self.killed {
            return NavOutcome::Rejected;
        }
        // The kill screen is driven by the fault signal, never requested
        if target == map.kill_screen() {
            return NavOutcome::Rejected;
        }
        if map.requires_idle(target) && !idle {
            return NavOutcome::Rejected;
        }
        if target != self.current {
            self.previous = Some(self.current);
            self.current = target;
        }
        NavOutcome::Entered(target)
    }

    /// Enter the terminal kill screen, bypassing all preconditions.
    pub fn enter_kill(&mut self, map: &ScreenMap) -> ScreenId {
        self.killed = true;
        self.previous = Some(self.current);
        self.current = map.kill_screen();
        self.current
    }

    /// Where a confirm resolves to: the recorded previous screen, or the
    /// configured default when none is recorded.
    pub fn back_target(&self, map: &ScreenMap) -> ScreenId {
        self.previous.unwrap_or_else(|| map.default_screen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::ScreenDef;

    const BOOT: ScreenId = ScreenId::new(0);
    const MAIN: ScreenId = ScreenId::new(45);
    const SETTING: ScreenId = ScreenId::new(63);
    const MANUAL_MOVE: ScreenId = ScreenId::new(71);
    const CONFIRM: ScreenId = ScreenId::new(240);
    const KILL: ScreenId = ScreenId::new(250);

    static SCREENS: &[ScreenDef] = &[
        ScreenDef::new(45, &[], false),
        ScreenDef::new(63, &[], false),
        ScreenDef::new(71, &[], true),
    ];

    fn map() -> ScreenMap {
        ScreenMap::new(SCREENS, MAIN, CONFIRM, KILL).unwrap()
    }

    #[test]
    fn test_plain_transition() {
        let map = map();
        let mut nav = Navigator::new(BOOT);
        assert_eq!(nav.try_enter(&map, MAIN, true), NavOutcome::Entered(MAIN));
        assert_eq!(nav.current(), MAIN);
        assert_eq!(nav.previous(), Some(BOOT));
    }

    #[test]
    fn test_idle_gate_rejects_while_busy() {
        let map = map();
        let mut nav = Navigator::new(MAIN);
        assert_eq!(nav.try_enter(&map, MANUAL_MOVE, false), NavOutcome::Rejected);
        assert_eq!(nav.current(), MAIN);
        assert_eq!(nav.previous(), None);

        assert_eq!(
            nav.try_enter(&map, MANUAL_MOVE, true),
            NavOutcome::Entered(MANUAL_MOVE)
        );
        assert_eq!(nav.current(), MANUAL_MOVE);
    }

    #[test]
    fn test_back_is_single_level() {
        let map = map();
        let mut nav = Navigator::new(MAIN);
        nav.try_enter(&map, SETTING, true);
        nav.try_enter(&map, MANUAL_MOVE, true);
        // Only the immediate predecessor is recorded, not a stack
        assert_eq!(nav.back_target(&map), SETTING);
    }

    #[test]
    fn test_back_falls_back_to_default() {
        let map = map();
        let nav = Navigator::new(BOOT);
        assert_eq!(nav.back_target(&map), MAIN);
    }

    #[test]
    fn test_reentering_active_screen_keeps_previous() {
        let map = map();
        let mut nav = Navigator::new(MAIN);
        nav.try_enter(&map, SETTING, true);
        nav.try_enter(&map, SETTING, true);
        assert_eq!(nav.previous(), Some(MAIN));
    }

    #[test]
    fn test_kill_is_terminal() {
        let map = map();
        let mut nav = Navigator::new(MAIN);
        assert_eq!(nav.enter_kill(&map), KILL);
        assert!(nav.is_killed());
        assert_eq!(nav.try_enter(&map, MAIN, true), NavOutcome::Rejected);
        assert_eq!(nav.current(), KILL);
    }

    #[test]
    fn test_kill_not_reachable_by_request() {
        let map = map();
        let mut nav = Navigator::new(MAIN);
        assert_eq!(nav.try_enter(&map, KILL, true), NavOutcome::Rejected);
        assert!(!nav.is_killed());
    }
}
