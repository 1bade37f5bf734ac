use crate::appointments::Appointment;

/// Capability notified synchronously whenever an appointment changes status.
///
/// `subject` is the appointment whose status changed; its
/// [`status`](Appointment::status) already holds the new value.
pub trait Observer {
    fn notify(&self, subject: &dyn Appointment);
}
