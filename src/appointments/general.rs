//! General practice appointment.

use std::rc::Rc;

use crate::{
    appointments::{Appointment, AppointmentRecord},
    observers::Observer,
};

/// Appointment with a general practitioner.
pub struct GeneralAppointment {
    record: AppointmentRecord,
}

impl GeneralAppointment {
    /// Creates a booked general appointment without observers.
    pub fn new(patient_name: &str, schedule: &str) -> Self {
        GeneralAppointment {
            record: AppointmentRecord::new(patient_name, schedule),
        }
    }
}

impl Appointment for GeneralAppointment {
    fn patient_name(&self) -> &str {
        self.record.patient_name()
    }

    fn schedule(&self) -> &str {
        self.record.schedule()
    }

    fn status(&self) -> String {
        self.record.status()
    }

    fn attach(&self, observer: Rc<dyn Observer>) {
        self.record.attach(observer);
    }

    fn detach(&self, observer: &Rc<dyn Observer>) {
        self.record.detach(observer);
    }

    fn change_status(&self, new_status: &str) {
        self.record.change_status(new_status, self);
    }

    fn describe(&self) -> String {
        format!(
            "General appointment for {} at {} (status: {})",
            self.record.patient_name(),
            self.record.schedule(),
            self.record.status()
        )
    }
}
