//! Sub-action dispatch for control VPs
//!
//! One control VP commonly services several logical buttons on a screen;
//! this is deliberate address-space economy in the display layouts. The
//! payload is a big-endian word: the low byte selects the sub-action, the
//! high byte carries an optional argument. Each sub-action is its own
//! table entry so it stays independently testable, instead of nested
//! byte inspection inside one handler.

use crate::dispatch::UiContext;

/// One discriminated action behind a control VP
#[derive(Clone, Copy)]
pub struct SubAction {
    /// Value of the payload's action byte selecting this entry
    pub code: u8,
    /// Behavior; receives the payload's argument byte
    pub run: fn(&mut UiContext<'_>, u8),
}

impl SubAction {
    pub const fn new(code: u8, run: fn(&mut UiContext<'_>, u8)) -> Self {
        Self { code, run }
    }
}

/// The action byte: low byte of the big-endian word.
///
/// Single-byte controls use that byte directly. Empty payloads select
/// nothing (the engine never delivers one for a well-formed descriptor).
pub fn action_code(payload: &[u8]) -> Option<u8> {
    match payload {
        [] => None,
        [only] => Some(*only),
        [_, low, ..] => Some(*low),
    }
}

/// The argument byte: high byte of the big-endian word, zero for
/// single-byte controls.
pub fn action_arg(payload: &[u8]) -> u8 {
    match payload {
        [high, _, ..] => *high,
        _ => 0,
    }
}

/// Route a control payload through a sub-action table.
///
/// Unknown action codes are ignored; returns whether an entry ran.
pub fn dispatch_sub_action(
    actions: &[SubAction],
    ctx: &mut UiContext<'_>,
    payload: &[u8],
) -> bool {
    let Some(code) = action_code(payload) else {
        return false;
    };
    let arg = action_arg(payload);
    for action in actions {
        if action.code == code {
            (action.run)(ctx, arg);
            return true;
        }
    }
    false
}
