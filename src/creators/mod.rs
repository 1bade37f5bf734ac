//! Factories producing appointment variants.
//!
//! Each creator is built from the data its variant needs and hands out fresh
//! appointments through [`AppointmentCreator::create_appointment`]. Callers only
//! see the [`Appointment`](crate::appointments::Appointment) contract, never the
//! concrete variant.
//!
//! [`creator_for`] maps a configured [`AppointmentKind`] onto the matching creator.

mod creator;
mod kind;

pub use crate::creators::{
    creator::{AppointmentCreator, GeneralCreator, SpecialistCreator},
    kind::{AppointmentKind, creator_for},
};
