//! Creality V4-style touch display layout
//!
//! Typed port of the stock T5 UI address map: boot strings, main/status
//! temperature panels, manual movement, bed leveling with probe-offset
//! nudging, and the fan/feedrate tuning page. Scales follow the stock
//! firmware: positions ×10, probe offset ×1000, PID coefficients ×100,
//! temperatures and percentages unscaled.

use haptos_core::{value, Axis, Heater, MachineState, PayloadBuf, ScreenId, VpAddr};
use haptos_ui::handlers::{self, SubAction};
use haptos_ui::{
    ConfigError, PushHandler, ScreenDef, ScreenMap, UiContext, UiEngine, VpDescriptor, VpHandler,
    VpTable, WriteHandler,
};

/// VP address map
pub mod vp {
    use haptos_core::VpAddr;

    pub const MAIN_SCREEN: VpAddr = VpAddr::new(0x1002);
    pub const PROGRESS: VpAddr = VpAddr::new(0x1016);
    pub const SETTEMP_SCREEN: VpAddr = VpAddr::new(0x1032);
    pub const HOTEND_TARGET: VpAddr = VpAddr::new(0x1034);
    pub const HOTEND_TEMP: VpAddr = VpAddr::new(0x1036);
    pub const BED_TARGET: VpAddr = VpAddr::new(0x103A);
    pub const BED_TEMP: VpAddr = VpAddr::new(0x103C);
    pub const SETTING_SCREEN: VpAddr = VpAddr::new(0x103E);
    pub const LEVELING_SCREEN: VpAddr = VpAddr::new(0x1040);
    pub const BED_MEASURE: VpAddr = VpAddr::new(0x1044);
    pub const HOME_XY: VpAddr = VpAddr::new(0x1046);
    pub const MOVE_X: VpAddr = VpAddr::new(0x1048);
    pub const MOVE_Y: VpAddr = VpAddr::new(0x104A);
    pub const MOVE_Z: VpAddr = VpAddr::new(0x104C);
    pub const MACHINE_NAME: VpAddr = VpAddr::new(0x1060);
    pub const VERSION: VpAddr = VpAddr::new(0x106A);
    pub const PRINTER_SIZE: VpAddr = VpAddr::new(0x1074);

    // Operator message lines, shown on the kill screen and reused by the
    // confirm popup
    pub const MSG_LINE1: VpAddr = VpAddr::new(0x1100);
    pub const MSG_LINE2: VpAddr = VpAddr::new(0x1140);
    pub const MSG_LINE3: VpAddr = VpAddr::new(0x1180);
    pub const MSG_LINE4: VpAddr = VpAddr::new(0x11C0);

    // Controls
    pub const SCREENCHANGE: VpAddr = VpAddr::new(0x2000);
    pub const ALL_HEATERS_OFF: VpAddr = VpAddr::new(0x2002);
    pub const CONFIRMED: VpAddr = VpAddr::new(0x2010);
    /// Placeholder: touch event exists in the UI, no firmware action yet.
    /// The stock layout aliased this onto a PID address; it gets its own
    /// slot in the control range here.
    pub const ADJUST: VpAddr = VpAddr::new(0x2030);
    pub const MOTOR_LOCK: VpAddr = VpAddr::new(0x2130);

    // Telemetry
    pub const STATUS_MSG: VpAddr = VpAddr::new(0x3020);
    pub const FLOW: VpAddr = VpAddr::new(0x3090);
    pub const FAN_PERCENT: VpAddr = VpAddr::new(0x3100);
    pub const FEEDRATE: VpAddr = VpAddr::new(0x3102);
    pub const PROGRESS_PERCENT: VpAddr = VpAddr::new(0x3104);
    /// Base of the 5×5 bed-mesh grid: 25 contiguous big-endian words in
    /// row-major order, written directly, without table entries
    pub const MESH_GRID: VpAddr = VpAddr::new(0x3200);
    pub const PROBE_OFFSET: VpAddr = VpAddr::new(0x32A0);
    pub const HOTEND_PID_P: VpAddr = VpAddr::new(0x3700);
    pub const HOTEND_PID_I: VpAddr = VpAddr::new(0x3702);
    pub const HOTEND_PID_D: VpAddr = VpAddr::new(0x3704);
}

/// Display page numbers
pub mod screen {
    use haptos_core::ScreenId;

    pub const BOOT: ScreenId = ScreenId::new(0);
    pub const FAN_FEEDRATE: ScreenId = ScreenId::new(44);
    pub const MAIN: ScreenId = ScreenId::new(45);
    pub const STATUS: ScreenId = ScreenId::new(53);
    pub const STATUS_PAUSED: ScreenId = ScreenId::new(54);
    pub const TEMP_CONTROL: ScreenId = ScreenId::new(57);
    pub const SETTING: ScreenId = ScreenId::new(63);
    pub const LEVELING: ScreenId = ScreenId::new(64);
    pub const MANUAL_MOVE: ScreenId = ScreenId::new(71);
    pub const CONFIRM: ScreenId = ScreenId::new(240);
    /// Must stay 250 so the display can show "wrong UI version" itself
    pub const KILL: ScreenId = ScreenId::new(250);
}

pub const MACHINE_NAME: &str = "Haptos CR-4";
pub const FIRMWARE_VERSION: &str = "Haptos 0.1.0";
pub const BUILD_VOLUME: &str = "350 x 350 x 400";

const SCALE_NONE: i32 = 1;
const SCALE_POS: i32 = 10;
const SCALE_OFFSET: i32 = 1000;
const SCALE_PID: i32 = 100;

const Z_OFFSET_MIN: f32 = -2.0;
const Z_OFFSET_MAX: f32 = 2.0;
const Z_OFFSET_STEP: f32 = 0.1;

const X_HOME_POS: f32 = 0.0;
const Y_HOME_POS: f32 = 0.0;

const MESH_POINTS_PER_AXIS: u8 = 5;

// ---------------------------------------------------------------------
// Push handlers

fn push_machine_name(desc: &VpDescriptor, _: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_text(desc, MACHINE_NAME, out);
}

fn push_version(desc: &VpDescriptor, _: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_text(desc, FIRMWARE_VERSION, out);
}

fn push_build_volume(desc: &VpDescriptor, _: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_text(desc, BUILD_VOLUME, out);
}

fn push_message_line(desc: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    let line = match desc.addr {
        vp::MSG_LINE1 => 0,
        vp::MSG_LINE2 => 1,
        vp::MSG_LINE3 => 2,
        vp::MSG_LINE4 => 3,
        _ => return,
    };
    handlers::push_text(desc, machine.message_line(line), out);
}

fn push_status_message(desc: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_text(desc, machine.status_message(), out);
}

fn push_hotend_temp(_: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_scaled(machine.actual_temp(Heater::Hotend), SCALE_NONE, out);
}

fn push_hotend_target(_: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_scaled(machine.target_temp(Heater::Hotend), SCALE_NONE, out);
}

fn push_bed_temp(_: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_scaled(machine.actual_temp(Heater::Bed), SCALE_NONE, out);
}

fn push_bed_target(_: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_scaled(machine.target_temp(Heater::Bed), SCALE_NONE, out);
}

fn axis_for(addr: VpAddr) -> Option<Axis> {
    match addr {
        vp::MOVE_X => Some(Axis::X),
        vp::MOVE_Y => Some(Axis::Y),
        vp::MOVE_Z => Some(Axis::Z),
        _ => None,
    }
}

fn push_axis_position(desc: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    if let Some(axis) = axis_for(desc.addr) {
        handlers::push_scaled(machine.axis_position(axis), SCALE_POS, out);
    }
}

fn push_probe_offset(_: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_scaled(machine.z_offset(), SCALE_OFFSET, out);
}

fn push_fan_percent(_: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_u16(machine.fan_percent() as u16, out);
}

fn push_feedrate(_: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_u16(machine.feedrate_percent(), out);
}

fn push_flow(_: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_u16(machine.flow_percent(), out);
}

fn push_progress(_: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    handlers::push_u16(machine.print_progress_percent() as u16, out);
}

fn push_hotend_pid(desc: &VpDescriptor, machine: &mut dyn MachineState, out: &mut PayloadBuf) {
    let pid = machine.pid_values(Heater::Hotend);
    let coefficient = match desc.addr {
        vp::HOTEND_PID_P => pid.kp,
        vp::HOTEND_PID_I => pid.ki,
        vp::HOTEND_PID_D => pid.kd,
        _ => return,
    };
    handlers::push_scaled(coefficient, SCALE_PID, out);
}

// ---------------------------------------------------------------------
// Write handlers

fn write_hotend_target(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    if let Some(celsius) = handlers::write_scaled(payload, SCALE_NONE) {
        ctx.machine.set_target_temp(Heater::Hotend, celsius);
    }
}

fn write_bed_target(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    if let Some(celsius) = handlers::write_scaled(payload, SCALE_NONE) {
        ctx.machine.set_target_temp(Heater::Bed, celsius);
    }
}

fn write_axis_position(desc: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    let Some(axis) = axis_for(desc.addr) else {
        return;
    };
    if let Some(mm) = handlers::write_scaled(payload, SCALE_POS) {
        ctx.machine.set_axis_position(axis, mm);
    }
}

fn write_probe_offset(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    if let Some(mm) = handlers::write_scaled(payload, SCALE_OFFSET) {
        if (Z_OFFSET_MIN..=Z_OFFSET_MAX).contains(&mm) {
            ctx.machine.set_z_offset(mm);
        }
    }
}

fn write_fan_percent(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    if let Some(raw) = value::decode_u16(payload) {
        ctx.machine.set_fan_percent(raw.min(100) as u8);
    }
}

fn write_feedrate(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    if let Some(raw) = value::decode_u16(payload) {
        ctx.machine.set_feedrate_percent(raw);
    }
}

fn write_flow(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    if let Some(raw) = value::decode_u16(payload) {
        ctx.machine.set_flow_percent(raw);
    }
}

// ---------------------------------------------------------------------
// Screen controls

fn send_axis_seed(ctx: &mut UiContext<'_>, addr: VpAddr, mm: f32) {
    let mut buf = PayloadBuf::new();
    handlers::push_scaled(mm, SCALE_POS, &mut buf);
    ctx.send(addr, &buf);
}

fn main_show_status(ctx: &mut UiContext<'_>, _: u8) {
    ctx.request_screen(screen::STATUS);
}

fn main_show_temp_control(ctx: &mut UiContext<'_>, _: u8) {
    ctx.request_screen(screen::TEMP_CONTROL);
}

static MAIN_SCREEN_ACTIONS: &[SubAction] = &[
    SubAction::new(1, main_show_status),
    SubAction::new(3, main_show_temp_control),
];

fn main_screen_control(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    handlers::dispatch_sub_action(MAIN_SCREEN_ACTIONS, ctx, payload);
}

// Row-major upload of the measured mesh, one word per probe point
fn setting_push_mesh(ctx: &mut UiContext<'_>, _: u8) {
    let mut index: u16 = 0;
    for y in 0..MESH_POINTS_PER_AXIS {
        for x in 0..MESH_POINTS_PER_AXIS {
            let mm = ctx.machine.mesh_point(x, y);
            let mut buf = PayloadBuf::new();
            handlers::push_scaled(mm, SCALE_OFFSET, &mut buf);
            ctx.send(VpAddr::new(vp::MESH_GRID.raw() + index * 2), &buf);
            index += 1;
        }
    }
}

fn setting_show_manual_move(ctx: &mut UiContext<'_>, _: u8) {
    // Seed the move page with current positions before it comes up
    let x = ctx.machine.axis_position(Axis::X);
    let y = ctx.machine.axis_position(Axis::Y);
    send_axis_seed(ctx, vp::MOVE_X, x);
    send_axis_seed(ctx, vp::MOVE_Y, y);
    ctx.request_screen(screen::MANUAL_MOVE);
}

static SETTING_SCREEN_ACTIONS: &[SubAction] = &[
    SubAction::new(1, setting_push_mesh),
    SubAction::new(3, setting_show_manual_move),
];

fn setting_screen_control(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    handlers::dispatch_sub_action(SETTING_SCREEN_ACTIONS, ctx, payload);
}

fn settemp_show_temp_control(ctx: &mut UiContext<'_>, _: u8) {
    ctx.request_screen(screen::TEMP_CONTROL);
}

static SETTEMP_SCREEN_ACTIONS: &[SubAction] = &[SubAction::new(0, settemp_show_temp_control)];

fn settemp_screen_control(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    handlers::dispatch_sub_action(SETTEMP_SCREEN_ACTIONS, ctx, payload);
}

fn leveling_show_setting(ctx: &mut UiContext<'_>, _: u8) {
    ctx.request_screen(screen::SETTING);
}

static LEVELING_SCREEN_ACTIONS: &[SubAction] = &[SubAction::new(1, leveling_show_setting)];

fn leveling_screen_control(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    handlers::dispatch_sub_action(LEVELING_SCREEN_ACTIONS, ctx, payload);
}

fn screen_change(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    // Target page number in the action byte
    if let Some(page) = handlers::action_code(payload) {
        ctx.request_screen(ScreenId::new(page));
    }
}

fn screen_confirmed(_: &VpDescriptor, ctx: &mut UiContext<'_>, _: &[u8]) {
    ctx.confirm_screen();
}

fn all_heaters_off(_: &VpDescriptor, ctx: &mut UiContext<'_>, _: &[u8]) {
    ctx.machine.all_heaters_off();
}

fn motor_lock_unlock(_: &VpDescriptor, ctx: &mut UiContext<'_>, _: &[u8]) {
    if ctx.machine.is_idle() {
        ctx.machine.inject_commands("M84");
    }
}

fn home_xy(_: &VpDescriptor, ctx: &mut UiContext<'_>, _: &[u8]) {
    ctx.machine.inject_commands("G28 X Y");
    send_axis_seed(ctx, vp::MOVE_X, X_HOME_POS);
    send_axis_seed(ctx, vp::MOVE_Y, Y_HOME_POS);
}

// ---------------------------------------------------------------------
// Bed measure page

fn bed_measure_home_z(ctx: &mut UiContext<'_>, _: u8) {
    if !ctx.machine.axis_position_known(Axis::X) || !ctx.machine.axis_position_known(Axis::Y) {
        ctx.machine.inject_commands("G28\nG1 F1500 Z0");
    } else {
        ctx.machine.inject_commands("G28 Z\nG1 F1500 Z0");
    }
}

fn nudge_z_offset(ctx: &mut UiContext<'_>, delta: f32) {
    let next = ctx.machine.z_offset() + delta;
    if (Z_OFFSET_MIN..=Z_OFFSET_MAX).contains(&next) {
        ctx.machine.set_z_offset(next);
        ctx.machine.inject_commands("M500");
    }
}

fn bed_measure_offset_up(ctx: &mut UiContext<'_>, _: u8) {
    nudge_z_offset(ctx, Z_OFFSET_STEP);
}

fn bed_measure_offset_down(ctx: &mut UiContext<'_>, _: u8) {
    nudge_z_offset(ctx, -Z_OFFSET_STEP);
}

fn bed_measure_probe(ctx: &mut UiContext<'_>, _: u8) {
    if !ctx.machine.position_known() {
        ctx.machine.inject_commands("G28");
    }
    ctx.machine.inject_commands("G29 P1\nG29 S1\nG29 S0\nG29 F0.0\nG29 A\nM500");
}

static BED_MEASURE_ACTIONS: &[SubAction] = &[
    SubAction::new(1, bed_measure_home_z),
    SubAction::new(2, bed_measure_offset_up),
    SubAction::new(3, bed_measure_offset_down),
    SubAction::new(5, bed_measure_probe),
];

fn bed_measure_control(_: &VpDescriptor, ctx: &mut UiContext<'_>, payload: &[u8]) {
    // Probing and offset moves are only safe on an idle machine
    if !ctx.machine.is_idle() {
        return;
    }
    handlers::dispatch_sub_action(BED_MEASURE_ACTIONS, ctx, payload);
}

// ---------------------------------------------------------------------
// Tables

const fn both(addr: VpAddr, size: u8, write: WriteHandler, push: PushHandler) -> VpDescriptor {
    VpDescriptor {
        addr,
        size,
        handler: VpHandler::Both { write, push },
    }
}

const fn write_only(addr: VpAddr, size: u8, write: WriteHandler) -> VpDescriptor {
    VpDescriptor {
        addr,
        size,
        handler: VpHandler::Write(write),
    }
}

const fn push_only(addr: VpAddr, size: u8, push: PushHandler) -> VpDescriptor {
    VpDescriptor {
        addr,
        size,
        handler: VpHandler::Push(push),
    }
}

const fn placeholder(addr: VpAddr, size: u8) -> VpDescriptor {
    VpDescriptor {
        addr,
        size,
        handler: VpHandler::None,
    }
}

static VP_TABLE: &[VpDescriptor] = &[
    write_only(vp::MAIN_SCREEN, 2, main_screen_control),
    push_only(vp::PROGRESS, 2, push_progress),
    write_only(vp::SETTEMP_SCREEN, 2, settemp_screen_control),
    both(vp::HOTEND_TARGET, 2, write_hotend_target, push_hotend_target),
    push_only(vp::HOTEND_TEMP, 2, push_hotend_temp),
    both(vp::BED_TARGET, 2, write_bed_target, push_bed_target),
    push_only(vp::BED_TEMP, 2, push_bed_temp),
    write_only(vp::SETTING_SCREEN, 2, setting_screen_control),
    write_only(vp::LEVELING_SCREEN, 2, leveling_screen_control),
    write_only(vp::BED_MEASURE, 2, bed_measure_control),
    write_only(vp::HOME_XY, 2, home_xy),
    both(vp::MOVE_X, 2, write_axis_position, push_axis_position),
    both(vp::MOVE_Y, 2, write_axis_position, push_axis_position),
    both(vp::MOVE_Z, 2, write_axis_position, push_axis_position),
    push_only(vp::MACHINE_NAME, 16, push_machine_name),
    push_only(vp::VERSION, 16, push_version),
    push_only(vp::PRINTER_SIZE, 16, push_build_volume),
    push_only(vp::MSG_LINE1, 32, push_message_line),
    push_only(vp::MSG_LINE2, 32, push_message_line),
    push_only(vp::MSG_LINE3, 32, push_message_line),
    push_only(vp::MSG_LINE4, 32, push_message_line),
    write_only(vp::SCREENCHANGE, 2, screen_change),
    write_only(vp::ALL_HEATERS_OFF, 2, all_heaters_off),
    write_only(vp::CONFIRMED, 2, screen_confirmed),
    placeholder(vp::ADJUST, 2),
    write_only(vp::MOTOR_LOCK, 2, motor_lock_unlock),
    push_only(vp::STATUS_MSG, 32, push_status_message),
    both(vp::FLOW, 2, write_flow, push_flow),
    both(vp::FAN_PERCENT, 2, write_fan_percent, push_fan_percent),
    both(vp::FEEDRATE, 2, write_feedrate, push_feedrate),
    push_only(vp::PROGRESS_PERCENT, 2, push_progress),
    both(vp::PROBE_OFFSET, 2, write_probe_offset, push_probe_offset),
    push_only(vp::HOTEND_PID_P, 2, push_hotend_pid),
    push_only(vp::HOTEND_PID_I, 2, push_hotend_pid),
    push_only(vp::HOTEND_PID_D, 2, push_hotend_pid),
];

static BOOT_VPS: &[VpAddr] = &[vp::MACHINE_NAME, vp::VERSION, vp::PRINTER_SIZE];

static TEMP_VPS: &[VpAddr] = &[
    vp::HOTEND_TEMP,
    vp::HOTEND_TARGET,
    vp::BED_TEMP,
    vp::BED_TARGET,
];

// Time-critical variables first: temperatures before positions
static STATUS_VPS: &[VpAddr] = &[
    vp::HOTEND_TEMP,
    vp::HOTEND_TARGET,
    vp::BED_TEMP,
    vp::BED_TARGET,
    vp::MOVE_X,
    vp::MOVE_Y,
    vp::MOVE_Z,
    vp::PROGRESS,
    vp::STATUS_MSG,
];

static MSG_VPS: &[VpAddr] = &[vp::MSG_LINE1, vp::MSG_LINE2, vp::MSG_LINE3, vp::MSG_LINE4];

static FAN_FEEDRATE_VPS: &[VpAddr] = &[vp::FEEDRATE, vp::FAN_PERCENT, vp::FLOW];

static MOVE_VPS: &[VpAddr] = &[vp::MOVE_X, vp::MOVE_Y, vp::MOVE_Z];

static LEVELING_VPS: &[VpAddr] = &[vp::PROBE_OFFSET];

static PID_VPS: &[VpAddr] = &[vp::HOTEND_PID_P, vp::HOTEND_PID_I, vp::HOTEND_PID_D];

static SCREENS: &[ScreenDef] = &[
    ScreenDef {
        id: screen::BOOT,
        vps: BOOT_VPS,
        requires_idle: false,
    },
    ScreenDef {
        id: screen::FAN_FEEDRATE,
        vps: FAN_FEEDRATE_VPS,
        requires_idle: false,
    },
    ScreenDef {
        id: screen::MAIN,
        vps: TEMP_VPS,
        requires_idle: false,
    },
    ScreenDef {
        id: screen::STATUS,
        vps: STATUS_VPS,
        requires_idle: false,
    },
    ScreenDef {
        id: screen::STATUS_PAUSED,
        vps: STATUS_VPS,
        requires_idle: false,
    },
    ScreenDef {
        id: screen::TEMP_CONTROL,
        vps: TEMP_VPS,
        requires_idle: false,
    },
    ScreenDef {
        id: screen::SETTING,
        vps: PID_VPS,
        requires_idle: false,
    },
    ScreenDef {
        id: screen::LEVELING,
        vps: LEVELING_VPS,
        requires_idle: true,
    },
    ScreenDef {
        id: screen::MANUAL_MOVE,
        vps: MOVE_VPS,
        requires_idle: true,
    },
    ScreenDef {
        id: screen::CONFIRM,
        vps: MSG_VPS,
        requires_idle: false,
    },
    ScreenDef {
        id: screen::KILL,
        vps: MSG_VPS,
        requires_idle: false,
    },
];

/// The validated VP table for this model.
pub fn vp_table() -> Result<VpTable, ConfigError> {
    VpTable::new(VP_TABLE)
}

/// The validated screen map for this model.
pub fn screen_map() -> Result<ScreenMap, ConfigError> {
    ScreenMap::new(SCREENS, screen::MAIN, screen::CONFIRM, screen::KILL)
}

/// A ready engine for this model, starting on the boot screen.
pub fn engine() -> Result<UiEngine, ConfigError> {
    Ok(UiEngine::new(vp_table()?, screen_map()?, screen::BOOT))
}
