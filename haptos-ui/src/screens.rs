//! Screen definitions and subscription index
//!
//! Each screen carries the ordered list of VPs that are auto-pushed while
//! it is active. List order is push order on refresh, which matters on a
//! bandwidth-limited link: time-critical variables go first.

use haptos_core::{ScreenId, VpAddr};

use crate::vp::ConfigError;

/// Static definition of one screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenDef {
    /// Display page id
    pub id: ScreenId,
    /// Auto-pushed VPs, in push order
    pub vps: &'static [VpAddr],
    /// Whether entering this screen requires the machine to be idle
    /// (no motion in flight, no commands queued)
    pub requires_idle: bool,
}

impl ScreenDef {
    /// Shorthand for building static screen maps.
    pub const fn new(id: u8, vps: &'static [VpAddr], requires_idle: bool) -> Self {
        Self {
            id: ScreenId::new(id),
            vps,
            requires_idle,
        }
    }
}

/// Screen id → definition index, plus the distinguished screen ids
///
/// A screen missing from the map is valid: it simply has no auto-pushed
/// variables and no entry precondition.
#[derive(Debug, Clone, Copy)]
pub struct ScreenMap {
    screens: &'static [ScreenDef],
    default_screen: ScreenId,
    confirm_screen: ScreenId,
    kill_screen: ScreenId,
}

impl ScreenMap {
    /// Validate a static screen map.
    ///
    /// Definitions must be in strictly ascending id order and subscription
    /// lists must not contain the terminator address.
    pub fn new(
        screens: &'static [ScreenDef],
        default_screen: ScreenId,
        confirm_screen: ScreenId,
        kill_screen: ScreenId,
    ) -> Result<Self, ConfigError> {
        let mut prev: Option<ScreenId> = None;
        for def in screens {
            match prev {
                Some(p) if def.id == p => return Err(ConfigError::DuplicateScreen(def.id)),
                Some(p) if def.id < p => return Err(ConfigError::UnsortedScreen(def.id)),
                _ => {}
            }
            if def.vps.iter().any(|vp| vp.is_terminator()) {
                return Err(ConfigError::ReservedSubscription(def.id));
            }
            prev = Some(def.id);
        }
        Ok(Self {
            screens,
            default_screen,
            confirm_screen,
            kill_screen,
        })
    }

    /// Look up a screen definition.
    pub fn get(&self, id: ScreenId) -> Option<&'static ScreenDef> {
        match self.screens.binary_search_by_key(&id, |s| s.id) {
            Ok(i) => Some(&self.screens[i]),
            Err(_) => None,
        }
    }

    /// The subscription list for a screen; empty for unknown screens.
    pub fn subscription(&self, id: ScreenId) -> &'static [VpAddr] {
        self.get(id).map(|def| def.vps).unwrap_or(&[])
    }

    /// Whether entering a screen is gated on the machine being idle.
    pub fn requires_idle(&self, id: ScreenId) -> bool {
        self.get(id).map(|def| def.requires_idle).unwrap_or(false)
    }

    /// Fallback target when confirming with no recorded previous screen.
    pub fn default_screen(&self) -> ScreenId {
        self.default_screen
    }

    /// The transient confirm/popup screen.
    pub fn confirm_screen(&self) -> ScreenId {
        self.confirm_screen
    }

    /// The terminal kill screen, reachable only via the fatal-error path.
    pub fn kill_screen(&self) -> ScreenId {
        self.kill_screen
    }
}
