//! Built-in commands for the JTAP console.

use std::thread;
use std::time::Duration;

use jtap_chain::{Chain, open_cable};
use jtap_types::error::{JtapError, Result};

use crate::dispatch::{Command, CommandOutput, CommandRegistry, require_cable};
use crate::number::parse_uint;

/// Register all built-in commands into a registry.
///
/// Registration order is the completion order and the ambiguity tie-break,
/// so it is fixed here rather than left to callers.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(QuitCmd));
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(FrequencyCmd));
    reg.register(Box::new(CableCmd));
    reg.register(Box::new(ResetCmd));
    reg.register(Box::new(IdcodeCmd));
    reg.register(Box::new(DetectCmd));
    reg.register(Box::new(PeekCmd));
    reg.register(Box::new(PokeCmd));
    reg.register(Box::new(UsleepCmd));
}

// ---------------------------------------------------------------------------
// quit
// ---------------------------------------------------------------------------

struct QuitCmd;
impl Command for QuitCmd {
    fn name(&self) -> &str {
        "quit"
    }
    fn description(&self) -> &str {
        "Exit the console"
    }
    fn usage(&self) -> &str {
        "quit"
    }
    fn execute(&self, _chain: &mut Chain, _args: &[&str]) -> Result<CommandOutput> {
        Ok(CommandOutput::Quit)
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn execute(&self, _chain: &mut Chain, _args: &[&str]) -> Result<CommandOutput> {
        // The registry renders help after resolution; it alone can
        // enumerate itself. This body only runs when the command is
        // invoked directly, outside any registry.
        Ok(CommandOutput::Text(
            "Use 'help' at the console for a list of commands.".to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// frequency
// ---------------------------------------------------------------------------

struct FrequencyCmd;
impl Command for FrequencyCmd {
    fn name(&self) -> &str {
        "frequency"
    }
    fn description(&self) -> &str {
        "Show or set the TCK frequency"
    }
    fn usage(&self) -> &str {
        "frequency [HZ]"
    }
    fn execute(&self, chain: &mut Chain, args: &[&str]) -> Result<CommandOutput> {
        if args.len() > 2 {
            return Err(JtapError::InvalidArgument(
                "usage: frequency [HZ]".to_string(),
            ));
        }
        let cable = require_cable(chain)?;
        if let Some(arg) = args.get(1) {
            let hz = parse_uint(arg)?;
            cable.set_frequency(hz);
            log::debug!("TCK frequency set to {hz} Hz");
        }
        // Report the effective rate; drivers may clamp the request.
        Ok(CommandOutput::Text(format!(
            "TCK frequency: {} Hz",
            cable.frequency()
        )))
    }
}

// ---------------------------------------------------------------------------
// cable
// ---------------------------------------------------------------------------

struct CableCmd;
impl Command for CableCmd {
    fn name(&self) -> &str {
        "cable"
    }
    fn description(&self) -> &str {
        "Attach a cable driver"
    }
    fn usage(&self) -> &str {
        "cable <driver>"
    }
    fn execute(&self, chain: &mut Chain, args: &[&str]) -> Result<CommandOutput> {
        if args.len() != 2 {
            return Err(JtapError::InvalidArgument("usage: cable <driver>".to_string()));
        }
        let cable = open_cable(args[1])?;
        let name = cable.name().to_string();
        chain.attach_cable(cable);
        Ok(CommandOutput::Text(format!("cable '{name}' attached")))
    }
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

struct ResetCmd;
impl Command for ResetCmd {
    fn name(&self) -> &str {
        "reset"
    }
    fn description(&self) -> &str {
        "Reset the TAP of all devices"
    }
    fn usage(&self) -> &str {
        "reset"
    }
    fn execute(&self, chain: &mut Chain, _args: &[&str]) -> Result<CommandOutput> {
        require_cable(chain)?.reset()?;
        log::debug!("TAP reset");
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// idcode
// ---------------------------------------------------------------------------

struct IdcodeCmd;
impl Command for IdcodeCmd {
    fn name(&self) -> &str {
        "idcode"
    }
    fn description(&self) -> &str {
        "Read the device IDCODE"
    }
    fn usage(&self) -> &str {
        "idcode"
    }
    fn execute(&self, chain: &mut Chain, _args: &[&str]) -> Result<CommandOutput> {
        let id = require_cable(chain)?.idcode()?;
        Ok(CommandOutput::Text(format!("IDCODE: 0x{id:08X}")))
    }
}

// ---------------------------------------------------------------------------
// detect
// ---------------------------------------------------------------------------

struct DetectCmd;
impl Command for DetectCmd {
    fn name(&self) -> &str {
        "detect"
    }
    fn description(&self) -> &str {
        "Probe the chain for devices"
    }
    fn usage(&self) -> &str {
        "detect"
    }
    fn execute(&self, chain: &mut Chain, _args: &[&str]) -> Result<CommandOutput> {
        let id = require_cable(chain)?.idcode()?;
        // All-zero and all-one patterns mean the data line is stuck and
        // nothing is driving TDO.
        if id == 0 || id == u32::MAX {
            return Ok(CommandOutput::Text("no devices found".to_string()));
        }
        let version = id >> 28;
        let part = (id >> 12) & 0xFFFF;
        let manufacturer = (id >> 1) & 0x7FF;
        let mut lines = Vec::new();
        lines.push("found 1 device".to_string());
        lines.push(format!(
            "  IDCODE 0x{id:08X} (version {version}, part 0x{part:04X}, manufacturer 0x{manufacturer:03X})"
        ));
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// peek
// ---------------------------------------------------------------------------

struct PeekCmd;
impl Command for PeekCmd {
    fn name(&self) -> &str {
        "peek"
    }
    fn description(&self) -> &str {
        "Read a word from the target"
    }
    fn usage(&self) -> &str {
        "peek <addr>"
    }
    fn execute(&self, chain: &mut Chain, args: &[&str]) -> Result<CommandOutput> {
        if args.len() != 2 {
            return Err(JtapError::InvalidArgument("usage: peek <addr>".to_string()));
        }
        let cable = require_cable(chain)?;
        let addr = parse_uint(args[1])?;
        let value = cable.peek(addr)?;
        Ok(CommandOutput::Text(format!("0x{addr:08X}: 0x{value:08X}")))
    }
}

// ---------------------------------------------------------------------------
// poke
// ---------------------------------------------------------------------------

struct PokeCmd;
impl Command for PokeCmd {
    fn name(&self) -> &str {
        "poke"
    }
    fn description(&self) -> &str {
        "Write a word to the target"
    }
    fn usage(&self) -> &str {
        "poke <addr> <value>"
    }
    fn execute(&self, chain: &mut Chain, args: &[&str]) -> Result<CommandOutput> {
        if args.len() != 3 {
            return Err(JtapError::InvalidArgument(
                "usage: poke <addr> <value>".to_string(),
            ));
        }
        let cable = require_cable(chain)?;
        let addr = parse_uint(args[1])?;
        let value = parse_uint(args[2])?;
        cable.poke(addr, value)?;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// usleep
// ---------------------------------------------------------------------------

struct UsleepCmd;
impl Command for UsleepCmd {
    fn name(&self) -> &str {
        "usleep"
    }
    fn description(&self) -> &str {
        "Sleep for a number of microseconds"
    }
    fn usage(&self) -> &str {
        "usleep <usecs>"
    }
    fn execute(&self, _chain: &mut Chain, args: &[&str]) -> Result<CommandOutput> {
        if args.len() != 2 {
            return Err(JtapError::InvalidArgument(
                "usage: usleep <usecs>".to_string(),
            ));
        }
        let usecs = parse_uint(args[1])?;
        thread::sleep(Duration::from_micros(u64::from(usecs)));
        Ok(CommandOutput::None)
    }
}
