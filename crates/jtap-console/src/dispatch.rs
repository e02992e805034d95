//! Command trait, registry, dispatch, and name completion.

use jtap_chain::{Cable, Chain};
use jtap_types::error::{JtapError, Result};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to the front end to leave the read loop.
    Quit,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "peek <addr>").
    fn usage(&self) -> &str;

    /// Execute the command. `args[0]` is the command name as typed; the
    /// remaining entries are the operands.
    fn execute(&self, chain: &mut Chain, args: &[&str]) -> Result<CommandOutput>;
}

/// Outcome of the prefix-match bookkeeping during a dispatch scan.
enum PrefixMatch {
    None,
    Unique(usize),
    Ambiguous,
}

/// Registry of available commands.
///
/// The registry is an ordered catalog built once at startup. Order is
/// significant: it is the completion iteration order and the tie-break
/// when two entries share a name (first registered wins).
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command. Duplicate names are allowed; dispatch and
    /// completion resolve to the earlier entry.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.push(cmd);
    }

    /// Return a sorted list of (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .iter()
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }

    /// Resolve `args[0]` against the registry and run the matched command.
    ///
    /// Resolution is case-insensitive. A full match wins outright and
    /// stops the scan; otherwise a name that `args[0]` is a strict prefix
    /// of is dispatched when it is the only such name. Unknown and
    /// ambiguous input are logged and succeed without invoking anything;
    /// only the invoked command's own result can fail.
    pub fn run(&self, chain: &mut Chain, args: &[&str]) -> Result<CommandOutput> {
        let Some(&input) = args.first() else {
            return Ok(CommandOutput::None);
        };

        let mut prefix = PrefixMatch::None;
        for (idx, cmd) in self.commands.iter().enumerate() {
            if cmd.name().eq_ignore_ascii_case(input) {
                return self.invoke(idx, chain, args);
            }
            if is_strict_prefix(input, cmd.name()) {
                prefix = match prefix {
                    PrefixMatch::None => PrefixMatch::Unique(idx),
                    PrefixMatch::Unique(_) | PrefixMatch::Ambiguous => PrefixMatch::Ambiguous,
                };
            }
        }

        match prefix {
            PrefixMatch::Unique(idx) => self.invoke(idx, chain, args),
            PrefixMatch::None => {
                log::warn!("{input}: unknown command");
                Ok(CommandOutput::None)
            },
            PrefixMatch::Ambiguous => {
                log::warn!("{input}: ambiguous command");
                Ok(CommandOutput::None)
            },
        }
    }

    fn invoke(&self, idx: usize, chain: &mut Chain, args: &[&str]) -> Result<CommandOutput> {
        let cmd = &self.commands[idx];
        // `help` enumerates the registry, which the command itself cannot
        // reach; it is rendered here after resolution so that prefix forms
        // like `he` still find it.
        if cmd.name() == "help" {
            return Ok(self.render_help(&args[1..]));
        }
        cmd.execute(chain, args)
    }

    fn render_help(&self, topics: &[&str]) -> CommandOutput {
        if let Some(&topic) = topics.first() {
            for cmd in &self.commands {
                if cmd.name().eq_ignore_ascii_case(topic) {
                    return CommandOutput::Text(format!(
                        "{}\nusage: {}",
                        cmd.description(),
                        cmd.usage()
                    ));
                }
            }
            return CommandOutput::Text(format!("{topic}: unknown command"));
        }
        let mut lines = vec!["Available commands:".to_string()];
        for (name, desc) in self.list_commands() {
            lines.push(format!("  {name:<12} {desc}"));
        }
        CommandOutput::Text(lines.join("\n"))
    }

    /// Return the next registered name matching the completion prefix, or
    /// `Ok(None)` when the scan is exhausted.
    ///
    /// The cursor advances past the returned entry, so successive calls
    /// walk the registry in registration order without repeats. Matching
    /// compares the first `prefix_len` bytes captured by
    /// [`CompletionCursor::start`] byte-for-byte (case-sensitive, unlike
    /// dispatch). The returned name is an independently owned copy; if
    /// allocating the copy fails the call reports
    /// [`JtapError::OutOfMemory`] rather than a match.
    pub fn next_match(
        &self,
        text: &str,
        cursor: &mut CompletionCursor,
    ) -> Result<Option<String>> {
        while cursor.position < self.commands.len() {
            let name = self.commands[cursor.position].name();
            cursor.position += 1;
            if bytes_prefix_eq(name, text, cursor.prefix_len) {
                let mut copy = String::new();
                copy.try_reserve_exact(name.len())
                    .map_err(|_| JtapError::OutOfMemory)?;
                copy.push_str(name);
                return Ok(Some(copy));
            }
        }
        Ok(None)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// State for one tab-completion session over a registry.
///
/// The prefix length is captured once, when the cursor is created, and is
/// deliberately not recomputed on later calls: callers must pass the same
/// `text` to every `next_match` call of one session, or the prefix
/// filtering becomes inconsistent. Start a new cursor to search a new
/// prefix. Cursors are independent; two sessions over the same registry
/// do not disturb each other.
#[derive(Debug, Clone)]
pub struct CompletionCursor {
    position: usize,
    prefix_len: usize,
}

impl CompletionCursor {
    /// Begin a new completion session for `text`.
    pub fn start(text: &str) -> Self {
        Self {
            position: 0,
            prefix_len: text.len(),
        }
    }
}

/// `input` is strictly shorter than `name` and matches its head,
/// ASCII-case-insensitively.
fn is_strict_prefix(input: &str, name: &str) -> bool {
    input.len() < name.len()
        && name
            .get(..input.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(input))
}

/// First `len` bytes of `name` and `text` are identical. A string shorter
/// than `len` matches nothing.
fn bytes_prefix_eq(name: &str, text: &str, len: usize) -> bool {
    match (name.as_bytes().get(..len), text.as_bytes().get(..len)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Verify that a cable is attached before a transport-dependent command
/// proceeds, handing back the verified transport.
pub fn require_cable(chain: &mut Chain) -> Result<&mut dyn Cable> {
    match chain.cable_mut() {
        Some(cable) => Ok(cable),
        None => Err(JtapError::IllegalState(
            "cable not configured -- use the 'cable' command first".to_string(),
        )),
    }
}
