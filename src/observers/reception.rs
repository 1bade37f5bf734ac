use std::rc::Rc;

use log::debug;

use crate::{
    appointments::Appointment,
    console::{Console, StdoutConsole},
    observers::Observer,
};

/// Observer keeping the reception desk records up to date.
///
/// Emits `(Reception) Update record: {name} -> {status}`.
pub struct ReceptionObserver {
    console: Rc<dyn Console>,
}

impl ReceptionObserver {
    /// Creates an observer writing to standard output.
    pub fn new() -> Self {
        Self::with_console(Rc::new(StdoutConsole))
    }

    /// Creates an observer writing to `console`.
    pub fn with_console(console: Rc<dyn Console>) -> Self {
        ReceptionObserver { console }
    }
}

impl Default for ReceptionObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ReceptionObserver {
    fn notify(&self, subject: &dyn Appointment) {
        debug!("updating reception record of {}", subject.patient_name());
        self.console.emit(&format!(
            "(Reception) Update record: {} -> {}",
            subject.patient_name(),
            subject.status()
        ));
    }
}
