use std::rc::Rc;

use log::debug;

use crate::{
    appointments::Appointment,
    console::{Console, StdoutConsole},
    observers::Observer,
};

/// Observer telling the patient about the new status of their appointment.
///
/// Emits `(Patient) {name}, your appointment is now: {status}`.
pub struct PatientObserver {
    console: Rc<dyn Console>,
}

impl PatientObserver {
    /// Creates an observer writing to standard output.
    pub fn new() -> Self {
        Self::with_console(Rc::new(StdoutConsole))
    }

    /// Creates an observer writing to `console`.
    pub fn with_console(console: Rc<dyn Console>) -> Self {
        PatientObserver { console }
    }
}

impl Default for PatientObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for PatientObserver {
    fn notify(&self, subject: &dyn Appointment) {
        debug!("notifying patient {}", subject.patient_name());
        self.console.emit(&format!(
            "(Patient) {}, your appointment is now: {}",
            subject.patient_name(),
            subject.status()
        ));
    }
}
