use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    appointments::Appointment,
    console::Console,
    decorators::{EmailReminder, SmsNotification},
};

/// Delivery channel a booking is decorated with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// No decoration, messages are not delivered.
    #[default]
    None,
    Sms,
    Email,
}

/// Appointment together with the decorator chosen for it at runtime.
///
/// Each variant keeps its concrete decorator type, so the channel specific send
/// operation is reached by matching instead of downcasting.
pub enum DecoratedAppointment {
    Plain(Box<dyn Appointment>),
    Sms(SmsNotification<Box<dyn Appointment>>),
    Email(EmailReminder<Box<dyn Appointment>>),
}

impl DecoratedAppointment {
    /// Wraps `appointment` with the decorator matching `channel`.
    pub fn wrap(
        appointment: Box<dyn Appointment>,
        channel: Channel,
        console: Rc<dyn Console>,
    ) -> Self {
        match channel {
            Channel::None => DecoratedAppointment::Plain(appointment),
            Channel::Sms => {
                DecoratedAppointment::Sms(SmsNotification::with_console(appointment, console))
            }
            Channel::Email => {
                DecoratedAppointment::Email(EmailReminder::with_console(appointment, console))
            }
        }
    }

    /// The appointment seen through the core contract.
    pub fn appointment(&self) -> &dyn Appointment {
        match self {
            DecoratedAppointment::Plain(appointment) => appointment.as_ref(),
            DecoratedAppointment::Sms(sms) => sms as &dyn Appointment,
            DecoratedAppointment::Email(email) => email as &dyn Appointment,
        }
    }

    /// Sends `message` through the decorator's channel.
    ///
    /// Returns `false` when the appointment is not decorated.
    pub fn deliver(&self, message: &str) -> bool {
        match self {
            DecoratedAppointment::Plain(appointment) => {
                debug!(
                    "no delivery channel for {}, message dropped",
                    appointment.patient_name()
                );
                false
            }
            DecoratedAppointment::Sms(sms) => {
                sms.send_sms(message);
                true
            }
            DecoratedAppointment::Email(email) => {
                email.send_email(message);
                true
            }
        }
    }
}
