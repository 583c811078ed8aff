//! Mock machine and transport for host tests
//!
//! Gated behind the `mock` feature so model crates can drive the engine
//! against recorded state in their own tests.

use haptos_core::{
    Axis, Heater, MachineState, PayloadBuf, PidValues, ScreenId, Transport, TransportError, VpAddr,
};
use heapless::{String, Vec};

/// Machine-state stub with directly poke-able fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockMachine {
    /// (actual, target) °C
    pub hotend: (f32, f32),
    /// (actual, target) °C
    pub bed: (f32, f32),
    /// X/Y/Z logical positions in mm
    pub positions: [f32; 3],
    /// Per-axis homed flags
    pub homed: [bool; 3],
    pub z_offset: f32,
    pub fan: u8,
    pub feedrate: u16,
    pub flow: u16,
    pub progress: u8,
    pub moving: bool,
    pub queued: bool,
    pub hotend_pid: PidValues,
    pub bed_pid: PidValues,
    /// Bed-mesh heights in mm, indexed `[y][x]`
    pub mesh: [[f32; 5]; 5],
    /// Operator message lines, e.g. kill-screen text
    pub messages: [String<32>; 4],
    /// Transient status line
    pub status: String<32>,
    /// Command macros handed to `inject_commands`, in order
    pub injected: Vec<String<64>, 8>,
}

fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    }
}

impl MachineState for MockMachine {
    fn actual_temp(&mut self, heater: Heater) -> f32 {
        match heater {
            Heater::Hotend => self.hotend.0,
            Heater::Bed => self.bed.0,
        }
    }

    fn target_temp(&mut self, heater: Heater) -> f32 {
        match heater {
            Heater::Hotend => self.hotend.1,
            Heater::Bed => self.bed.1,
        }
    }

    fn set_target_temp(&mut self, heater: Heater, celsius: f32) {
        match heater {
            Heater::Hotend => self.hotend.1 = celsius,
            Heater::Bed => self.bed.1 = celsius,
        }
    }

    fn axis_position(&mut self, axis: Axis) -> f32 {
        self.positions[axis_index(axis)]
    }

    fn set_axis_position(&mut self, axis: Axis, mm: f32) {
        self.positions[axis_index(axis)] = mm;
    }

    fn axis_position_known(&mut self, axis: Axis) -> bool {
        self.homed[axis_index(axis)]
    }

    fn position_known(&mut self) -> bool {
        self.homed.iter().all(|&h| h)
    }

    fn z_offset(&mut self) -> f32 {
        self.z_offset
    }

    fn set_z_offset(&mut self, mm: f32) {
        self.z_offset = mm;
    }

    fn fan_percent(&mut self) -> u8 {
        self.fan
    }

    fn set_fan_percent(&mut self, percent: u8) {
        self.fan = percent;
    }

    fn feedrate_percent(&mut self) -> u16 {
        self.feedrate
    }

    fn set_feedrate_percent(&mut self, percent: u16) {
        self.feedrate = percent;
    }

    fn flow_percent(&mut self) -> u16 {
        self.flow
    }

    fn set_flow_percent(&mut self, percent: u16) {
        self.flow = percent;
    }

    fn print_progress_percent(&mut self) -> u8 {
        self.progress
    }

    fn is_moving(&mut self) -> bool {
        self.moving
    }

    fn commands_queued(&mut self) -> bool {
        self.queued
    }

    fn pid_values(&mut self, heater: Heater) -> PidValues {
        match heater {
            Heater::Hotend => self.hotend_pid,
            Heater::Bed => self.bed_pid,
        }
    }

    fn mesh_point(&mut self, x: u8, y: u8) -> f32 {
        self.mesh[y as usize][x as usize]
    }

    fn message_line(&mut self, line: u8) -> &str {
        self.messages
            .get(line as usize)
            .map(|m| m.as_str())
            .unwrap_or("")
    }

    fn status_message(&mut self) -> &str {
        self.status.as_str()
    }

    fn inject_commands(&mut self, gcode: &str) {
        let mut macro_text = String::new();
        let _ = macro_text.push_str(gcode);
        let _ = self.injected.push(macro_text);
    }
}

/// Transport stub recording everything the engine sends
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    /// Payloads pushed via `send`, in order
    pub sent: Vec<(VpAddr, PayloadBuf), 32>,
    /// Page switches commanded via `switch_screen`, in order
    pub switched: Vec<ScreenId, 8>,
    /// When set, every send reports failure
    pub fail_sends: bool,
}

impl MockTransport {
    /// Most recent payload sent to `addr`, if any.
    pub fn last_sent_to(&self, addr: VpAddr) -> Option<&[u8]> {
        self.sent
            .iter()
            .rev()
            .find(|(a, _)| *a == addr)
            .map(|(_, p)| p.as_slice())
    }

    pub fn clear(&mut self) {
        self.sent.clear();
        self.switched.clear();
    }
}

impl Transport for MockTransport {
    fn send(&mut self, addr: VpAddr, payload: &[u8]) -> Result<(), TransportError> {
        if self.fail_sends {
            return Err(TransportError::SendFailed);
        }
        let mut buf = PayloadBuf::new();
        buf.extend_from_slice(payload)
            .map_err(|_| TransportError::SendFailed)?;
        self.sent
            .push((addr, buf))
            .map_err(|_| TransportError::SendFailed)?;
        Ok(())
    }

    fn switch_screen(&mut self, screen: ScreenId) -> Result<(), TransportError> {
        self.switched
            .push(screen)
            .map_err(|_| TransportError::SendFailed)?;
        Ok(())
    }
}
