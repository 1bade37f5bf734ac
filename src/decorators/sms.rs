use std::rc::Rc;

use log::debug;

use crate::{
    appointments::Appointment,
    console::{Console, StdoutConsole},
    observers::Observer,
};

/// Marker appended to the description of an SMS-notified appointment.
pub const SMS_SUFFIX: &str = " + SMS notification";

/// Appointment decorated with SMS delivery.
///
/// Name and schedule are copied from the wrapped appointment at construction.
/// Status and observers always live in the wrapped appointment.
pub struct SmsNotification<A> {
    inner: A,
    patient_name: String,
    schedule: String,
    console: Rc<dyn Console>,
}

impl<A: Appointment> SmsNotification<A> {
    /// Wraps `inner`, sending messages to standard output.
    pub fn new(inner: A) -> Self {
        Self::with_console(inner, Rc::new(StdoutConsole))
    }

    /// Wraps `inner`, sending messages to `console`.
    pub fn with_console(inner: A, console: Rc<dyn Console>) -> Self {
        SmsNotification {
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

    /// Emits `[SMS to {name}]: {message}`.
    pub fn send_sms(&self, message: &str) {
        debug!("sending SMS to {}", self.inner.patient_name());
        self.console.emit(&format!(
            "[SMS to {}]: {}",
            self.inner.patient_name(),
            message
        ));
    }
}

impl<A: Appointment> Appointment for SmsNotification<A> {
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
        format!("{}{}", self.inner.describe(), SMS_SUFFIX)
    }
}
