//! VP descriptor table
//!
//! Each descriptor binds one VP address to a declared payload size and a
//! tagged pair of handlers: one for writes coming from the display, one
//! for pushes going to it. The table is static per-model configuration,
//! validated once at startup and immutable afterwards.

use haptos_core::{MachineState, PayloadBuf, ScreenId, VpAddr, MAX_PAYLOAD_SIZE};

use crate::dispatch::UiContext;

/// Handler invoked when the display writes to a VP.
///
/// Receives the descriptor and the raw payload; the handler owns the
/// interpretation of its own payload layout. The engine guarantees the
/// payload spans exactly the declared size.
pub type WriteHandler = fn(&VpDescriptor, &mut UiContext<'_>, &[u8]);

/// Handler invoked to produce the outbound payload for a VP.
///
/// Must fill the buffer with exactly the declared number of bytes. Push
/// handlers see only the machine capability: the refresh path is defined
/// to be side-effect-free on navigation, so no navigation surface is
/// reachable from here.
pub type PushHandler = fn(&VpDescriptor, &mut dyn MachineState, &mut PayloadBuf);

/// Handler capability of one VP
///
/// `None` entries are tolerated as pure size/documentation placeholders;
/// the engine treats them as no-ops in both directions.
#[derive(Debug, Clone, Copy)]
pub enum VpHandler {
    /// Placeholder entry, no behavior in either direction
    None,
    /// Display may write, firmware never pushes
    Write(WriteHandler),
    /// Firmware pushes, display never writes
    Push(PushHandler),
    /// Read/write pair for the same quantity
    Both {
        write: WriteHandler,
        push: PushHandler,
    },
}

impl VpHandler {
    /// The write-path handler, if any.
    pub fn write(&self) -> Option<WriteHandler> {
        match self {
            VpHandler::Write(w) | VpHandler::Both { write: w, .. } => Some(*w),
            _ => None,
        }
    }

    /// The push-path handler, if any.
    pub fn push(&self) -> Option<PushHandler> {
        match self {
            VpHandler::Push(p) | VpHandler::Both { push: p, .. } => Some(*p),
            _ => None,
        }
    }
}

/// One row of the VP table
#[derive(Debug, Clone, Copy)]
pub struct VpDescriptor {
    /// VP address, unique within the table, never the terminator
    pub addr: VpAddr,
    /// Declared payload size in bytes (1..=32)
    pub size: u8,
    /// Handler pair
    pub handler: VpHandler,
}

impl VpDescriptor {
    /// Shorthand for building static tables.
    pub const fn new(addr: u16, size: u8, handler: VpHandler) -> Self {
        Self {
            addr: VpAddr::new(addr),
            size,
            handler,
        }
    }
}

/// Errors detected while validating static configuration
///
/// All of these are defects in the per-model tables, caught once at
/// startup. The engine itself has no fatal runtime errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// An entry uses the reserved terminator address 0
    ReservedAddress,
    /// Declared payload size is zero or exceeds the payload buffer
    BadPayloadSize(VpAddr),
    /// Two entries share an address (latent config defect, never
    /// silently resolved by last-definition-wins)
    DuplicateAddress(VpAddr),
    /// Entries are not in ascending address order
    UnsortedAddress(VpAddr),
    /// Two screen definitions share an id
    DuplicateScreen(ScreenId),
    /// Screen definitions are not in ascending id order
    UnsortedScreen(ScreenId),
    /// A subscription list contains the terminator address
    ReservedSubscription(ScreenId),
}

/// Address-keyed registry of VP descriptors
///
/// A thin validated view over a static table. Lookup is a binary search:
/// tables hold hundreds of entries and a lookup happens on every inbound
/// frame and every subscription entry of every refresh tick.
#[derive(Debug, Clone, Copy)]
pub struct VpTable {
    entries: &'static [VpDescriptor],
}

impl VpTable {
    /// Validate a static table.
    ///
    /// Entries must be in strictly ascending address order, must not use
    /// the terminator address, and must declare a size the payload buffer
    /// can hold.
    pub fn new(entries: &'static [VpDescriptor]) -> Result<Self, ConfigError> {
        let mut prev: Option<VpAddr> = None;
        for entry in entries {
            if entry.addr.is_terminator() {
                return Err(ConfigError::ReservedAddress);
            }
            if entry.size == 0 || entry.size as usize > MAX_PAYLOAD_SIZE {
                return Err(ConfigError::BadPayloadSize(entry.addr));
            }
            match prev {
                Some(p) if entry.addr == p => {
                    return Err(ConfigError::DuplicateAddress(entry.addr))
                }
                Some(p) if entry.addr < p => {
                    return Err(ConfigError::UnsortedAddress(entry.addr))
                }
                _ => {}
            }
            prev = Some(entry.addr);
        }
        Ok(Self { entries })
    }

    /// Look up the descriptor for an address.
    ///
    /// A miss is not an error condition; the engine counts and ignores
    /// unknown addresses.
    pub fn lookup(&self, addr: VpAddr) -> Option<&'static VpDescriptor> {
        match self.entries.binary_search_by_key(&addr, |d| d.addr) {
            Ok(i) => Some(&self.entries[i]),
            Err(_) => None,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
