//! Observers notified when an appointment changes status.
//!
//! - [`Observer`]: The notification capability
//! - [`PatientObserver`]: Tells the patient about the new status
//! - [`ReceptionObserver`]: Updates the reception desk records
//!
//! Observers are stateless apart from the [`Console`](crate::console::Console) they
//! write to, so a single instance can be shared between several appointments.

mod observer;
mod patient;
mod reception;

pub use crate::observers::{
    observer::Observer, patient::PatientObserver, reception::ReceptionObserver,
};

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::Observer;
    use crate::appointments::Appointment;

    /// Observer remembering every notification it receives.
    #[derive(Default)]
    pub struct RecordingObserver {
        seen: RefCell<Vec<String>>,
        descriptions: RefCell<Vec<String>>,
    }

    impl RecordingObserver {
        /// Notifications received, formatted as `name:status`.
        pub fn seen(&self) -> Vec<String> {
            self.seen.borrow().clone()
        }

        /// Subject descriptions at notification time.
        pub fn descriptions(&self) -> Vec<String> {
            self.descriptions.borrow().clone()
        }
    }

    impl Observer for RecordingObserver {
        fn notify(&self, subject: &dyn Appointment) {
            self.seen
                .borrow_mut()
                .push(format!("{}:{}", subject.patient_name(), subject.status()));
            self.descriptions.borrow_mut().push(subject.describe());
        }
    }
}
