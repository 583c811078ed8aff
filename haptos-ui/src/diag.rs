//! Diagnostics counters
//!
//! Every runtime error in this subsystem is non-fatal: unknown addresses
//! are ignored, mismatched payloads discarded, failed sends dropped until
//! the next tick resends state. The counters make those conditions
//! visible to the owning firmware without turning them into control flow.

/// Saturating counters for non-fatal conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Diagnostics {
    /// Inbound frames or subscriptions naming an address not in the table
    pub unknown_addresses: u16,
    /// Declared vs. actual payload size differed; data discarded
    pub size_mismatches: u16,
    /// Navigation requests refused by a precondition gate
    pub nav_rejections: u16,
    /// Sends the transport reported as failed (not retried)
    pub send_failures: u16,
}

impl Diagnostics {
    pub fn record_unknown_address(&mut self) {
        self.unknown_addresses = self.unknown_addresses.saturating_add(1);
    }

    pub fn record_size_mismatch(&mut self) {
        self.size_mismatches = self.size_mismatches.saturating_add(1);
    }

    pub fn record_nav_rejection(&mut self) {
        self.nav_rejections = self.nav_rejections.saturating_add(1);
    }

    pub fn record_send_failure(&mut self) {
        self.send_failures = self.send_failures.saturating_add(1);
    }

    /// Clear all counters, e.g. after the owner has logged them.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
