use std::rc::Rc;

use log::debug;

use crate::{
    appointments::Appointment,
    console::{Console, StdoutConsole},
    observers::Observer,
};

/// Marker appended to the description of an appointment with email reminders.
pub const EMAIL_SUFFIX: &str = " + Email reminder";

/// Appointment decorated with email reminders.
///
/// Behaves like [`SmsNotification`](crate::decorators::SmsNotification) with
/// email as the delivery channel.
pub struct EmailReminder<A> {
    inner: A,
    patient_name: String,
    schedule: String,
    console: Rc<dyn Console>,
}

impl<A: Appointment> EmailReminder<A> {
    /// Wraps `inner`, sending messages to standard output.
    pub fn new(inner: A) -> Self {
        Self::with_console(inner, Rc::new(StdoutConsole))
    }

    /// Wraps `inner`, sending messages to `console`.
    pub fn with_console(inner: A, console: Rc<dyn Console>) -> Self {
        EmailReminder {
            patient_name: inner.patient_name().to_owned(),
            schedule: inner.schedule().to_owned(),
            inner,
            console,
        }
    }

    /// The wrapped appointment.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Emits `[Email to {name}]: {message}`.
    pub fn send_email(&self, message: &str) {
        debug!("sending email to {}", self.inner.patient_name());
        self.console.emit(&format!(
            "[Email to {}]: {}",
            self.inner.patient_name(),
            message
        ));
    }
}

impl<A: Appointment> Appointment for EmailReminder<A> {
    fn patient_name(&self) -> &str {
        &self.patient_name
    }

    fn schedule(&self) -> &str {
        &self.schedule
    }

    fn status(&self) -> String {
        self.inner.status()
    }

    fn attach(&self, observer: Rc<dyn Observer>) {
        self.inner.attach(observer);
    }

    fn detach(&self, observer: &Rc<dyn Observer>) {
        self.inner.detach(observer);
    }

    fn change_status(&self, new_status: &str) {
        self.inner.change_status(new_status);
    }

    fn describe(&self) -> String {
        format!("{}{}", self.inner.describe(), EMAIL_SUFFIX)
    }
}
