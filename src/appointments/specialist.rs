//! Specialist appointment.

use std::rc::Rc;

use crate::{
    appointments::{Appointment, AppointmentRecord},
    observers::Observer,
};

/// Appointment with a specialist of a given specialty.
pub struct SpecialistAppointment {
    record: AppointmentRecord,
    /// Medical specialty, e.g. `Cardiology`.
    specialty: String,
}

impl SpecialistAppointment {
    /// Creates a booked specialist appointment without observers.
    pub fn new(patient_name: &str, schedule: &str, specialty: &str) -> Self {
        SpecialistAppointment {
            record: AppointmentRecord::new(patient_name, schedule),
            specialty: specialty.to_owned(),
        }
    }

    /// Medical specialty of the appointment.
    pub fn specialty(&self) -> &str {
        &self.specialty
    }
}

impl Appointment for SpecialistAppointment {
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
            "Specialist appointment ({}) for {} at {} (status: {})",
            self.specialty,
            self.record.patient_name(),
            self.record.schedule(),
            self.record.status()
        )
    }
}
