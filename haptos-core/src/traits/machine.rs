//! Machine-state capability trait
//!
//! The VP handlers never talk to the motion or temperature kernels
//! directly; everything goes through `MachineState`. Long-running
//! operations (homing, leveling) are issued as opaque command macros via
//! `inject_commands` and are fire-and-forget - nothing in the display
//! bridge ever waits for completion.

/// Motion axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Heating elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Heater {
    /// Extruder hotend
    Hotend,
    /// Heated bed
    Bed,
}

/// PID coefficients as reported by the temperature kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PidValues {
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
}

/// Trait for the machine-state kernel consumed by VP handlers
///
/// Units are the firmware's native ones: degrees Celsius and millimeters
/// as `f32`, percentages as integers. Conversion to the display's
/// fixed-point integers is the handlers' job.
pub trait MachineState {
    /// Current temperature of a heater in °C.
    fn actual_temp(&mut self, heater: Heater) -> f32;

    /// Target temperature of a heater in °C.
    fn target_temp(&mut self, heater: Heater) -> f32;

    /// Set the target temperature of a heater in °C.
    fn set_target_temp(&mut self, heater: Heater, celsius: f32);

    /// Current logical position of an axis in mm.
    fn axis_position(&mut self, axis: Axis) -> f32;

    /// Command an axis to a new absolute position in mm.
    ///
    /// Queued with the motion planner; returns immediately.
    fn set_axis_position(&mut self, axis: Axis, mm: f32);

    /// Whether the position of one axis has been established (homed).
    fn axis_position_known(&mut self, axis: Axis) -> bool;

    /// Whether the full machine position has been established.
    fn position_known(&mut self) -> bool;

    /// Probe Z offset in mm.
    fn z_offset(&mut self) -> f32;

    /// Set the probe Z offset in mm.
    fn set_z_offset(&mut self, mm: f32);

    /// Part-cooling fan speed, 0-100.
    fn fan_percent(&mut self) -> u8;

    /// Set part-cooling fan speed, 0-100.
    fn set_fan_percent(&mut self, percent: u8);

    /// Feedrate override, percent.
    fn feedrate_percent(&mut self) -> u16;

    /// Set feedrate override, percent.
    fn set_feedrate_percent(&mut self, percent: u16);

    /// Extrusion flow override, percent.
    fn flow_percent(&mut self) -> u16;

    /// Set extrusion flow override, percent.
    fn set_flow_percent(&mut self, percent: u16);

    /// Job progress, 0-100.
    fn print_progress_percent(&mut self) -> u8;

    /// Whether any motion is in flight.
    fn is_moving(&mut self) -> bool;

    /// Whether commands are queued in the planner.
    fn commands_queued(&mut self) -> bool;

    /// PID coefficients of a heater.
    fn pid_values(&mut self, heater: Heater) -> PidValues;

    /// Measured bed-mesh height at a probe grid point, in mm.
    ///
    /// `x`/`y` are zero-based grid indices; the grid dimensions are part
    /// of the model configuration, not this trait.
    fn mesh_point(&mut self, x: u8, y: u8) -> f32;

    /// One operator-facing message line, e.g. for the kill screen.
    ///
    /// Line numbering is model-defined; unknown lines are empty.
    fn message_line(&mut self, line: u8) -> &str;

    /// Transient status line set by the job or the operator.
    fn status_message(&mut self) -> &str;

    /// Queue a command macro (newline-separated G-code) for execution.
    ///
    /// Fire-and-forget: the macro is handed to the command queue and this
    /// returns immediately.
    fn inject_commands(&mut self, gcode: &str);

    /// Machine idle predicate used by navigation precondition gates.
    fn is_idle(&mut self) -> bool {
        !self.is_moving() && !self.commands_queued()
    }

    /// Turn every heater off.
    fn all_heaters_off(&mut self) {
        self.set_target_temp(Heater::Hotend, 0.0);
        self.set_target_temp(Heater::Bed, 0.0);
    }
}
