use log::debug;

use crate::appointments::{Appointment, GeneralAppointment, SpecialistAppointment};

/// Factory method for appointments.
pub trait AppointmentCreator {
    /// Builds a new appointment with status `booked` and no observers.
    fn create_appointment(&self) -> Box<dyn Appointment>;
}

/// Creator of [`GeneralAppointment`]s.
pub struct GeneralCreator {
    patient_name: String,
    schedule: String,
}

impl GeneralCreator {
    /// Creates a creator booking `patient_name` at `schedule`.
    pub fn new(patient_name: &str, schedule: &str) -> Self {
        GeneralCreator {
            patient_name: patient_name.to_owned(),
            schedule: schedule.to_owned(),
        }
    }
}

impl AppointmentCreator for GeneralCreator {
    fn create_appointment(&self) -> Box<dyn Appointment> {
        debug!("creating general appointment for {}", self.patient_name);
        Box::new(GeneralAppointment::new(&self.patient_name, &self.schedule))
    }
}

/// Creator of [`SpecialistAppointment`]s.
pub struct SpecialistCreator {
    patient_name: String,
    schedule: String,
    specialty: String,
}

impl SpecialistCreator {
    /// Creates a creator booking `patient_name` at `schedule` with a `specialty` specialist.
    pub fn new(patient_name: &str, schedule: &str, specialty: &str) -> Self {
        SpecialistCreator {
            patient_name: patient_name.to_owned(),
            schedule: schedule.to_owned(),
            specialty: specialty.to_owned(),
        }
    }
}

impl AppointmentCreator for SpecialistCreator {
    fn create_appointment(&self) -> Box<dyn Appointment> {
        debug!(
            "creating {} appointment for {}",
            self.specialty, self.patient_name
        );
        Box::new(SpecialistAppointment::new(
            &self.patient_name,
            &self.schedule,
            &self.specialty,
        ))
    }
}
