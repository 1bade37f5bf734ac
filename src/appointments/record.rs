//! State shared by every appointment variant.

use std::{cell::RefCell, rc::Rc};

use log::debug;

use crate::{appointments::Appointment, observers::Observer};

/// Status every appointment starts with.
pub const DEFAULT_STATUS: &str = "booked";

/// Patient, schedule, status and observer list of an appointment.
///
/// Variants embed a record and delegate the observable part of the
/// [`Appointment`] contract to it, keeping only their description for themselves.
pub struct AppointmentRecord {
    patient_name: String,
    schedule: String,
    status: RefCell<String>,
    observers: RefCell<Vec<Rc<dyn Observer>>>,
}

impl AppointmentRecord {
    /// Creates a record with status [`DEFAULT_STATUS`] and no observers.
    pub fn new(patient_name: &str, schedule: &str) -> Self {
        AppointmentRecord {
            patient_name: patient_name.to_owned(),
            schedule: schedule.to_owned(),
            status: RefCell::new(DEFAULT_STATUS.to_owned()),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Name of the patient.
    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    /// Schedule slot as given at creation.
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    /// Current status.
    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    /// Number of attached observers, duplicates included.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Appends `observer`, duplicates included.
    pub fn attach(&self, observer: Rc<dyn Observer>) {
        let mut observers = self.observers.borrow_mut();
        observers.push(observer);
        debug!(
            "attached observer to appointment for {} ({} attached)",
            self.patient_name,
            observers.len()
        );
    }

    /// Removes the first entry sharing `observer`'s allocation, if any.
    pub fn detach(&self, observer: &Rc<dyn Observer>) {
        let mut observers = self.observers.borrow_mut();
        let Some(index) = observers.iter().position(|o| Rc::ptr_eq(o, observer)) else {
            debug!(
                "observer not attached to appointment for {}, nothing to detach",
                self.patient_name
            );
            return;
        };

        observers.remove(index);
        debug!(
            "detached observer from appointment for {} ({} attached)",
            self.patient_name,
            observers.len()
        );
    }

    /// Stores `new_status` and notifies a snapshot of the observers with `subject`.
    ///
    /// No borrow of the observer list is held while observers run.
    pub fn change_status(&self, new_status: &str, subject: &dyn Appointment) {
        *self.status.borrow_mut() = new_status.to_owned();

        let snapshot: Vec<Rc<dyn Observer>> = self.observers.borrow().clone();
        debug!(
            "status of appointment for {} is now {}, notifying {} observers",
            self.patient_name,
            new_status,
            snapshot.len()
        );

        for observer in snapshot {
            observer.notify(subject);
        }
    }
}
