//! Cable transport trait and drivers.

use std::collections::HashMap;

use jtap_types::error::{JtapError, Result};

// ---------------------------------------------------------------------------
// Cable trait
// ---------------------------------------------------------------------------

/// Abstraction over a JTAG cable transport.
///
/// Drivers are opened by name through [`open_cable`] and owned by the
/// chain. All operations are blocking; a slow transport blocks the caller
/// for the full duration of the operation.
pub trait Cable: std::fmt::Debug {
    /// Driver name (what the user typed to open it).
    fn name(&self) -> &str;

    /// Current TCK frequency in Hz.
    fn frequency(&self) -> u32;

    /// Set the TCK frequency in Hz. Drivers may clamp to the nearest
    /// supported rate; `frequency()` reports the effective value.
    fn set_frequency(&mut self, hz: u32);

    /// Drive the TAP through Test-Logic-Reset.
    fn reset(&mut self) -> Result<()>;

    /// Read the IDCODE of the device at the head of the chain.
    fn idcode(&mut self) -> Result<u32>;

    /// Read a 32-bit word from the target address space.
    fn peek(&mut self, addr: u32) -> Result<u32>;

    /// Write a 32-bit word to the target address space.
    fn poke(&mut self, addr: u32, value: u32) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Driver table
// ---------------------------------------------------------------------------

/// Names of the cable drivers [`open_cable`] accepts.
pub fn cable_drivers() -> &'static [&'static str] {
    &["sim"]
}

/// Open a cable driver by name.
///
/// Unknown names fail with a diagnostic listing the available drivers.
pub fn open_cable(driver: &str) -> Result<Box<dyn Cable>> {
    match driver {
        "sim" => Ok(Box::new(SimCable::new())),
        other => Err(JtapError::Cable(format!(
            "unknown driver: '{}' (available: {})",
            other,
            cable_drivers().join(", ")
        ))),
    }
}

// ---------------------------------------------------------------------------
// Simulated cable
// ---------------------------------------------------------------------------

/// Default TCK frequency for the simulated cable, in Hz.
const SIM_DEFAULT_FREQUENCY: u32 = 100_000;

/// IDCODE reported by the simulated device.
///
/// Version 1, part number 0x2b94, manufacturer id 0x23b (with the
/// mandatory trailing 1 bit).
const SIM_IDCODE: u32 = 0x1_2B94_477;

/// A cable driver backed by in-process state.
///
/// Presents a single simulated device with a fixed IDCODE and a sparse
/// word-addressed memory. Used as the default driver and by the test
/// suites of the crates above this one.
#[derive(Debug)]
pub struct SimCable {
    frequency: u32,
    memory: HashMap<u32, u32>,
    resets: u32,
}

impl SimCable {
    pub fn new() -> Self {
        Self {
            frequency: SIM_DEFAULT_FREQUENCY,
            memory: HashMap::new(),
            resets: 0,
        }
    }

    /// Number of TAP resets seen since the cable was opened.
    pub fn reset_count(&self) -> u32 {
        self.resets
    }
}

impl Default for SimCable {
    fn default() -> Self {
        Self::new()
    }
}

impl Cable for SimCable {
    fn name(&self) -> &str {
        "sim"
    }

    fn frequency(&self) -> u32 {
        self.frequency
    }

    fn set_frequency(&mut self, hz: u32) {
        self.frequency = hz;
    }

    fn reset(&mut self) -> Result<()> {
        self.resets += 1;
        Ok(())
    }

    fn idcode(&mut self) -> Result<u32> {
        Ok(SIM_IDCODE)
    }

    fn peek(&mut self, addr: u32) -> Result<u32> {
        // Unwritten addresses read as zero, like uninitialised RAM on the
        // simulated target.
        Ok(self.memory.get(&addr).copied().unwrap_or(0))
    }

    fn poke(&mut self, addr: u32, value: u32) -> Result<()> {
        self.memory.insert(addr, value);
        Ok(())
    }
}
