//! Decorators adding a delivery channel to an appointment.
//!
//! A decorator wraps any [`Appointment`](crate::appointments::Appointment), forwards
//! the whole core contract to it and adds one extra operation that is only
//! reachable through the decorator's own type:
//!
//! - [`SmsNotification::send_sms`]
//! - [`EmailReminder::send_email`]
//!
//! Decorators stack in any order. Each one appends its own marker to
//! `describe()` and nothing else.
//!
//! When the decoration is chosen at runtime, [`DecoratedAppointment`] keeps the
//! concrete decorator in a tagged variant so the extra operation stays reachable
//! without downcasting.

mod decorated;
mod email;
mod sms;

pub use crate::decorators::{
    decorated::{Channel, DecoratedAppointment},
    email::{EMAIL_SUFFIX, EmailReminder},
    sms::{SMS_SUFFIX, SmsNotification},
};
