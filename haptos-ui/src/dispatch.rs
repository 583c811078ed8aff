//! Dispatch engine
//!
//! Owns the two directions of VP traffic and the navigation state:
//!
//! - `on_inbound` routes a validated `(address, payload)` event to the
//!   descriptor's write handler.
//! - `on_refresh_tick` pushes the active screen's subscription list and
//!   services at most one deferred navigation request.
//!
//! Both entry points run to completion on the owner's control-loop tick.
//! The machine kernel and the transport are passed in per call rather than
//! owned, so the owning firmware keeps them for its other tasks.

use haptos_core::{MachineState, PayloadBuf, ScreenId, Transport, VpAddr};

use crate::diag::Diagnostics;
use crate::navigator::{NavOutcome, Navigator};
use crate::screens::ScreenMap;
use crate::vp::VpTable;

/// A navigation request recorded by a write handler
///
/// Write handlers never navigate directly: a request is parked here and
/// serviced at the start of the next refresh tick, so a handler can never
/// re-enter the subscription iteration it may have been called under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavRequest {
    /// Go to a specific screen, subject to its preconditions
    Goto(ScreenId),
    /// Resolve the confirm screen back to its predecessor
    Back,
}

/// What a write handler sees while it runs
///
/// Wraps the machine capability and the transport, plus the deferred
/// navigation slot. Sending through the context counts transport failures
/// in the engine's diagnostics.
pub struct UiContext<'a> {
    /// Machine-state capability
    pub machine: &'a mut dyn MachineState,
    transport: &'a mut dyn Transport,
    pending_nav: &'a mut Option<NavRequest>,
    diag: &'a mut Diagnostics,
}

impl UiContext<'_> {
    /// Push a payload to a VP immediately.
    ///
    /// Failures are counted, not surfaced; the next refresh resends state.
    pub fn send(&mut self, addr: VpAddr, payload: &[u8]) {
        if self.transport.send(addr, payload).is_err() {
            self.diag.record_send_failure();
        }
    }

    /// Request a screen change, deferred to the next tick.
    pub fn request_screen(&mut self, target: ScreenId) {
        *self.pending_nav = Some(NavRequest::Goto(target));
    }

    /// Request back-navigation from the confirm screen, deferred to the
    /// next tick.
    pub fn confirm_screen(&mut self) {
        *self.pending_nav = Some(NavRequest::Back);
    }
}

/// The VP dispatch and screen-navigation engine
pub struct UiEngine {
    table: VpTable,
    screens: ScreenMap,
    nav: Navigator,
    pending_nav: Option<NavRequest>,
    diag: Diagnostics,
}

impl UiEngine {
    /// Create an engine over validated configuration, starting on
    /// `initial` (typically the boot screen).
    pub fn new(table: VpTable, screens: ScreenMap, initial: ScreenId) -> Self {
        Self {
            table,
            screens,
            nav: Navigator::new(initial),
            pending_nav: None,
            diag: Diagnostics::default(),
        }
    }

    /// The active screen.
    pub fn current_screen(&self) -> ScreenId {
        self.nav.current()
    }

    /// Whether the session has hit the terminal kill screen.
    pub fn is_killed(&self) -> bool {
        self.nav.is_killed()
    }

    /// Non-fatal condition counters.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    /// Clear the diagnostics counters.
    pub fn reset_diagnostics(&mut self) {
        self.diag.reset();
    }

    /// Process one inbound `(address, payload)` event.
    ///
    /// Unknown addresses and payloads that do not span exactly the
    /// declared size are counted and discarded; neither ever reaches a
    /// handler.
    pub fn on_inbound(
        &mut self,
        machine: &mut dyn MachineState,
        transport: &mut dyn Transport,
        addr: VpAddr,
        payload: &[u8],
    ) {
        if addr.is_terminator() {
            self.diag.record_unknown_address();
            return;
        }
        let Some(desc) = self.table.lookup(addr) else {
            self.diag.record_unknown_address();
            return;
        };
        if payload.len() != desc.size as usize {
            self.diag.record_size_mismatch();
            return;
        }
        let Some(write) = desc.handler.write() else {
            // Push-only or placeholder entry: writes are a no-op
            return;
        };
        let mut ctx = UiContext {
            machine,
            transport,
            pending_nav: &mut self.pending_nav,
            diag: &mut self.diag,
        };
        write(desc, &mut ctx, payload);
    }

    /// Run one refresh tick.
    ///
    /// Services at most one deferred navigation request, then pushes the
    /// active screen's subscription list in declared order. A successful
    /// deferred navigation already refreshes the new screen; nothing is
    /// pushed twice.
    pub fn on_refresh_tick(&mut self, machine: &mut dyn MachineState, transport: &mut dyn Transport) {
        if let Some(request) = self.pending_nav.take() {
            let target = match request {
                NavRequest::Goto(id) => id,
                NavRequest::Back => self.nav.back_target(&self.screens),
            };
            if self.navigate(machine, transport, target) {
                return;
            }
        }
        self.refresh_screen(machine, transport, self.nav.current());
    }

    /// Request a screen change from the owning control loop.
    ///
    /// Returns false and leaves the current screen untouched when a
    /// precondition gate refuses the target. On success the display is
    /// told to switch pages and the new screen's subscriptions are pushed
    /// exactly once.
    pub fn request_screen(
        &mut self,
        machine: &mut dyn MachineState,
        transport: &mut dyn Transport,
        target: ScreenId,
    ) -> bool {
        self.navigate(machine, transport, target)
    }

    /// Resolve the confirm screen back to its predecessor (or the default
    /// screen when none is recorded).
    pub fn confirm_screen(
        &mut self,
        machine: &mut dyn MachineState,
        transport: &mut dyn Transport,
    ) -> bool {
        let target = self.nav.back_target(&self.screens);
        self.navigate(machine, transport, target)
    }

    /// Enter the terminal kill screen.
    ///
    /// Driven by an external fatal-error signal; bypasses all
    /// preconditions. The session stays on the kill screen afterwards.
    pub fn kill(&mut self, machine: &mut dyn MachineState, transport: &mut dyn Transport) {
        let target = self.nav.enter_kill(&self.screens);
        if transport.switch_screen(target).is_err() {
            self.diag.record_send_failure();
        }
        self.refresh_screen(machine, transport, target);
    }

    fn navigate(
        &mut self,
        machine: &mut dyn MachineState,
        transport: &mut dyn Transport,
        target: ScreenId,
    ) -> bool {
        let idle = machine.is_idle();
        match self.nav.try_enter(&self.screens, target, idle) {
            NavOutcome::Entered(screen) => {
                if transport.switch_screen(screen).is_err() {
                    self.diag.record_send_failure();
                }
                // Fresh push of every subscribed VP: the display never
                // has to guess state after a page switch
                self.refresh_screen(machine, transport, screen);
                true
            }
            NavOutcome::Rejected => {
                self.diag.record_nav_rejection();
                false
            }
        }
    }

    fn refresh_screen(
        &mut self,
        machine: &mut dyn MachineState,
        transport: &mut dyn Transport,
        screen: ScreenId,
    ) {
        for &addr in self.screens.subscription(screen) {
            let Some(desc) = self.table.lookup(addr) else {
                self.diag.record_unknown_address();
                continue;
            };
            let Some(push) = desc.handler.push() else {
                continue;
            };
            let mut payload = PayloadBuf::new();
            push(desc, machine, &mut payload);
            if payload.len() != desc.size as usize {
                self.diag.record_size_mismatch();
                continue;
            }
            if transport.send(addr, &payload).is_err() {
                self.diag.record_send_failure();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::ScreenDef;
    use crate::testing::{MockMachine, MockTransport};
    use crate::vp::{VpDescriptor, VpHandler};
    use haptos_core::{value, Axis};

    const MOVE_X: VpAddr = VpAddr::new(0x1048);
    const GOTO_TEMP: VpAddr = VpAddr::new(0x2000);
    const GOTO_MANUAL: VpAddr = VpAddr::new(0x2002);
    const CONFIRMED: VpAddr = VpAddr::new(0x2010);
    const SHORT_PUSH: VpAddr = VpAddr::new(0x3999);

    const MAIN: ScreenId = ScreenId::new(45);
    const STATUS: ScreenId = ScreenId::new(53);
    const TEMP_CONTROL: ScreenId = ScreenId::new(57);
    const BROKEN: ScreenId = ScreenId::new(60);
    const MANUAL_MOVE: ScreenId = ScreenId::new(71);
    const CONFIRM: ScreenId = ScreenId::new(240);
    const KILL: ScreenId = ScreenId::new(250);

    fn write_move_x(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
        if let Some(mm) = value::decode_scaled_i16(payload, 10) {
            ctx.machine.set_axis_position(Axis::X, mm);
        }
    }

    fn push_move_x(_: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
        let raw = value::encode_scaled_i16(machine.axis_position(Axis::X), 10);
        let _ = out.extend_from_slice(&raw);
    }

    fn goto_temp_control(_: &VpDescriptor, ctx: &mut UiContext<'_>, _: &[u8]) {
        ctx.request_screen(TEMP_CONTROL);
    }

    fn goto_manual_move(_: &VpDescriptor, ctx: &mut UiContext<'_>, _: &[u8]) {
        ctx.request_screen(MANUAL_MOVE);
    }

    fn confirmed(_: &VpDescriptor, ctx: &mut UiContext<'_>, _: &[u8]) {
        ctx.confirm_screen();
    }

    // Deliberately produces one byte against a declared size of two
    fn short_push(_: &VpDescriptor, _: &mut dyn MachineState, out: &mut PayloadBuf) {
        let _ = out.push(0xAB);
    }

    static TABLE: &[VpDescriptor] = &[
        VpDescriptor::new(0x1048, 2, VpHandler::Both { write: write_move_x, push: push_move_x }),
        VpDescriptor::new(0x2000, 2, VpHandler::Write(goto_temp_control)),
        VpDescriptor::new(0x2002, 2, VpHandler::Write(goto_manual_move)),
        VpDescriptor::new(0x2010, 2, VpHandler::Write(confirmed)),
        VpDescriptor::new(0x3999, 2, VpHandler::Push(short_push)),
    ];

    static SCREENS: &[ScreenDef] = &[
        ScreenDef::new(45, &[], false),
        ScreenDef::new(53, &[MOVE_X], false),
        ScreenDef::new(57, &[MOVE_X], false),
        ScreenDef::new(60, &[SHORT_PUSH], false),
        ScreenDef::new(71, &[MOVE_X], true),
    ];

    fn engine_on(initial: ScreenId) -> UiEngine {
        let table = VpTable::new(TABLE).unwrap();
        let screens = ScreenMap::new(SCREENS, MAIN, CONFIRM, KILL).unwrap();
        UiEngine::new(table, screens, initial)
    }

    #[test]
    fn test_unknown_address_is_noop() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        engine.on_inbound(&mut machine, &mut transport, VpAddr::new(0x0F0F), &[0, 1]);

        assert_eq!(engine.diagnostics().unknown_addresses, 1);
        assert!(transport.sent.is_empty());
        assert_eq!(machine, MockMachine::default());
    }

    #[test]
    fn test_terminator_never_dispatched() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        engine.on_inbound(&mut machine, &mut transport, VpAddr::TERMINATOR, &[0, 1]);
        assert_eq!(engine.diagnostics().unknown_addresses, 1);
    }

    #[test]
    fn test_size_mismatch_discards_inbound() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        engine.on_inbound(&mut machine, &mut transport, MOVE_X, &[0x00, 0x64, 0x00]);

        assert_eq!(engine.diagnostics().size_mismatches, 1);
        assert_eq!(machine.positions[0], 0.0);
    }

    #[test]
    fn test_move_x_write_then_refresh_roundtrip() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        // 0x0064 = 100 raw at ×10 → 10.0 mm
        engine.on_inbound(&mut machine, &mut transport, MOVE_X, &[0x00, 0x64]);
        assert_eq!(machine.positions[0], 10.0);

        engine.on_refresh_tick(&mut machine, &mut transport);
        assert_eq!(transport.last_sent_to(MOVE_X), Some(&[0x00, 0x64][..]));
    }

    #[test]
    fn test_refresh_of_unknown_screen_sends_nothing() {
        let mut engine = engine_on(ScreenId::new(99));
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        engine.on_refresh_tick(&mut machine, &mut transport);
        assert!(transport.sent.is_empty());
        assert_eq!(engine.diagnostics(), &Diagnostics::default());
    }

    #[test]
    fn test_request_screen_rejected_while_busy() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine {
            queued: true,
            ..Default::default()
        };
        let mut transport = MockTransport::default();

        assert!(!engine.request_screen(&mut machine, &mut transport, MANUAL_MOVE));
        assert_eq!(engine.current_screen(), STATUS);
        assert!(transport.switched.is_empty());
        assert_eq!(engine.diagnostics().nav_rejections, 1);
    }

    #[test]
    fn test_request_screen_switches_and_refreshes_once() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        assert!(engine.request_screen(&mut machine, &mut transport, MANUAL_MOVE));
        assert_eq!(engine.current_screen(), MANUAL_MOVE);
        assert_eq!(&transport.switched[..], &[MANUAL_MOVE]);
        // Full subscription list pushed exactly once
        assert_eq!(transport.sent.len(), 1);
        assert_eq!(transport.sent[0].0, MOVE_X);
    }

    #[test]
    fn test_confirm_returns_to_previous_screen() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        assert!(engine.request_screen(&mut machine, &mut transport, TEMP_CONTROL));
        assert!(engine.confirm_screen(&mut machine, &mut transport));
        assert_eq!(engine.current_screen(), STATUS);
    }

    #[test]
    fn test_confirm_without_history_goes_to_default() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        assert!(engine.confirm_screen(&mut machine, &mut transport));
        assert_eq!(engine.current_screen(), MAIN);
    }

    #[test]
    fn test_handler_navigation_is_deferred_to_next_tick() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        engine.on_inbound(&mut machine, &mut transport, GOTO_TEMP, &[0x00, 0x03]);
        // Nothing switches during dispatch
        assert!(transport.switched.is_empty());
        assert_eq!(engine.current_screen(), STATUS);

        engine.on_refresh_tick(&mut machine, &mut transport);
        assert_eq!(engine.current_screen(), TEMP_CONTROL);
        assert_eq!(&transport.switched[..], &[TEMP_CONTROL]);
        // Exactly the new screen's subscriptions, no double push
        assert_eq!(transport.sent.len(), 1);
    }

    #[test]
    fn test_deferred_navigation_rejected_falls_back_to_refresh() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine {
            moving: true,
            ..Default::default()
        };
        let mut transport = MockTransport::default();

        engine.on_inbound(&mut machine, &mut transport, GOTO_MANUAL, &[0x00, 0x01]);
        engine.on_refresh_tick(&mut machine, &mut transport);

        assert_eq!(engine.current_screen(), STATUS);
        assert_eq!(engine.diagnostics().nav_rejections, 1);
        // The normal refresh of the current screen still ran
        assert_eq!(transport.sent.len(), 1);
        assert_eq!(transport.sent[0].0, MOVE_X);
    }

    #[test]
    fn test_confirm_vp_resolves_on_next_tick() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        engine.request_screen(&mut machine, &mut transport, TEMP_CONTROL);
        transport.clear();

        engine.on_inbound(&mut machine, &mut transport, CONFIRMED, &[0x00, 0x01]);
        engine.on_refresh_tick(&mut machine, &mut transport);
        assert_eq!(engine.current_screen(), STATUS);
    }

    #[test]
    fn test_kill_is_terminal() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        engine.kill(&mut machine, &mut transport);
        assert_eq!(engine.current_screen(), KILL);
        assert!(engine.is_killed());
        assert_eq!(&transport.switched[..], &[KILL]);

        assert!(!engine.request_screen(&mut machine, &mut transport, MAIN));
        assert_eq!(engine.current_screen(), KILL);
    }

    #[test]
    fn test_send_failures_counted_not_fatal() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport {
            fail_sends: true,
            ..Default::default()
        };

        engine.on_refresh_tick(&mut machine, &mut transport);
        assert_eq!(engine.diagnostics().send_failures, 1);

        // Next tick simply tries again
        transport.fail_sends = false;
        engine.on_refresh_tick(&mut machine, &mut transport);
        assert_eq!(transport.sent.len(), 1);
    }

    #[test]
    fn test_push_span_mismatch_suppresses_send() {
        let mut engine = engine_on(BROKEN);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        engine.on_refresh_tick(&mut machine, &mut transport);
        assert!(transport.sent.is_empty());
        assert_eq!(engine.diagnostics().size_mismatches, 1);
    }

    #[test]
    fn test_write_to_push_only_vp_is_noop() {
        let mut engine = engine_on(STATUS);
        let mut machine = MockMachine::default();
        let mut transport = MockTransport::default();

        engine.on_inbound(&mut machine, &mut transport, SHORT_PUSH, &[0x00, 0x01]);
        assert_eq!(engine.diagnostics(), &Diagnostics::default());
        assert_eq!(machine, MockMachine::default());
    }
}
