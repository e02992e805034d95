//! Chain session state.

use crate::cable::Cable;

/// One debugging session: the attached cable (if any) and its wired
/// configuration.
///
/// The chain starts with no cable; transport-dependent commands are
/// expected to check for one before proceeding.
pub struct Chain {
    cable: Option<Box<dyn Cable>>,
}

impl Chain {
    /// Create a session with no cable attached.
    pub fn new() -> Self {
        Self { cable: None }
    }

    /// Attach a cable, replacing any previously attached one.
    pub fn attach_cable(&mut self, cable: Box<dyn Cable>) {
        log::info!("cable attached: {}", cable.name());
        self.cable = Some(cable);
    }

    /// Detach the current cable, if any.
    pub fn detach_cable(&mut self) {
        if let Some(cable) = self.cable.take() {
            log::info!("cable detached: {}", cable.name());
        }
    }

    /// Whether a cable is currently attached.
    pub fn has_cable(&self) -> bool {
        self.cable.is_some()
    }

    /// The attached cable.
    pub fn cable(&self) -> Option<&dyn Cable> {
        self.cable.as_deref()
    }

    /// The attached cable, mutably.
    pub fn cable_mut(&mut self) -> Option<&mut (dyn Cable + 'static)> {
        self.cable.as_deref_mut()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::SimCable;

    #[test]
    fn new_chain_has_no_cable() {
        let chain = Chain::new();
        assert!(!chain.has_cable());
        assert!(chain.cable().is_none());
    }

    #[test]
    fn attach_and_query() {
        let mut chain = Chain::new();
        chain.attach_cable(Box::new(SimCable::new()));
        assert!(chain.has_cable());
        assert_eq!(chain.cable().unwrap().name(), "sim");
    }

    #[test]
    fn attach_replaces_previous() {
        let mut chain = Chain::new();
        let mut first = SimCable::new();
        first.set_frequency(42);
        chain.attach_cable(Box::new(first));
        chain.attach_cable(Box::new(SimCable::new()));
        // The replacement starts from driver defaults.
        assert_ne!(chain.cable().unwrap().frequency(), 42);
    }

    #[test]
    fn detach_clears_cable() {
        let mut chain = Chain::new();
        chain.attach_cable(Box::new(SimCable::new()));
        chain.detach_cable();
        assert!(!chain.has_cable());
    }

    #[test]
    fn detach_without_cable_is_noop() {
        let mut chain = Chain::new();
        chain.detach_cable();
        assert!(!chain.has_cable());
    }

    #[test]
    fn cable_mut_allows_transport_ops() {
        let mut chain = Chain::new();
        chain.attach_cable(Box::new(SimCable::new()));
        let cable = chain.cable_mut().unwrap();
        cable.poke(0x40, 7).unwrap();
        assert_eq!(cable.peek(0x40).unwrap(), 7);
    }
}
