//! Appointment entities and their core contract.
//!
//! This module provides everything a booking is made of:
//!
//! - [`Appointment`]: The capability every appointment (and every decorator) exposes
//! - [`AppointmentRecord`]: Patient, schedule, status and observer list shared by all variants
//! - [`GeneralAppointment`] and [`SpecialistAppointment`]: The two concrete variants
//!
//! # Notification
//!
//! Changing the status of an appointment notifies every attached
//! [`Observer`](crate::observers::Observer) in attachment order. The observer list is
//! copied before dispatch, so an observer may attach or detach others while the
//! pass is running without affecting who receives the current notification.
//!
//! # Example
//!
//! ```no_run
//! use std::rc::Rc;
//!
//! use booking::appointments::{Appointment, GeneralAppointment};
//! use booking::observers::{Observer, PatientObserver};
//!
//! let appointment = GeneralAppointment::new("Ana Ruiz", "2025-01-01 10:00");
//! let patient: Rc<dyn Observer> = Rc::new(PatientObserver::new());
//!
//! appointment.attach(Rc::clone(&patient));
//! appointment.change_status("confirmed");
//! // prints "(Patient) Ana Ruiz, your appointment is now: confirmed"
//! ```

mod appointment;
mod general;
mod record;
mod specialist;

pub use crate::appointments::{
    appointment::Appointment, general::GeneralAppointment, record::AppointmentRecord,
    record::DEFAULT_STATUS, specialist::SpecialistAppointment,
};
