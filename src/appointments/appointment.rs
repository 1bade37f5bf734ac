//! The [`Appointment`] capability and its forwarding implementations.

use std::rc::Rc;

use crate::observers::Observer;

/// Core contract shared by appointment variants and the decorators wrapping them.
///
/// Every method takes `&self`: an appointment keeps its mutable state behind
/// interior mutability so observers receiving `&dyn Appointment` during a
/// notification pass can still attach or detach observers.
pub trait Appointment {
    /// Name of the patient the appointment is booked for.
    fn patient_name(&self) -> &str;

    /// Schedule slot, kept as free-form text.
    fn schedule(&self) -> &str;

    /// Status as last set by [`Appointment::change_status`].
    fn status(&self) -> String;

    /// Appends `observer` to the notification list. Duplicates are allowed.
    fn attach(&self, observer: Rc<dyn Observer>);

    /// Removes the first entry pointing at the same observer as `observer`.
    ///
    /// Detaching an observer that is not attached does nothing.
    fn detach(&self, observer: &Rc<dyn Observer>);

    /// Sets the status, then notifies every observer attached at call time.
    fn change_status(&self, new_status: &str);

    /// Human-readable summary of the appointment.
    fn describe(&self) -> String;
}

impl<A: Appointment + ?Sized> Appointment for &A {
    fn patient_name(&self) -> &str {
        (**self).patient_name()
    }

    fn schedule(&self) -> &str {
        (**self).schedule()
    }

    fn status(&self) -> String {
        (**self).status()
    }

    fn attach(&self, observer: Rc<dyn Observer>) {
        (**self).attach(observer)
    }

    fn detach(&self, observer: &Rc<dyn Observer>) {
        (**self).detach(observer)
    }

    fn change_status(&self, new_status: &str) {
        (**self).change_status(new_status)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<A: Appointment + ?Sized> Appointment for Box<A> {
    fn patient_name(&self) -> &str {
        (**self).patient_name()
    }

    fn schedule(&self) -> &str {
        (**self).schedule()
    }

    fn status(&self) -> String {
        (**self).status()
    }

    fn attach(&self, observer: Rc<dyn Observer>) {
        (**self).attach(observer)
    }

    fn detach(&self, observer: &Rc<dyn Observer>) {
        (**self).detach(observer)
    }

    fn change_status(&self, new_status: &str) {
        (**self).change_status(new_status)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<A: Appointment + ?Sized> Appointment for Rc<A> {
    fn patient_name(&self) -> &str {
        (**self).patient_name()
    }

    fn schedule(&self) -> &str {
        (**self).schedule()
    }

    fn status(&self) -> String {
        (**self).status()
    }

    fn attach(&self, observer: Rc<dyn Observer>) {
        (**self).attach(observer)
    }

    fn detach(&self, observer: &Rc<dyn Observer>) {
        (**self).detach(observer)
    }

    fn change_status(&self, new_status: &str) {
        (**self).change_status(new_status)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointments::GeneralAppointment;

    #[test]
    fn test_shared_appointment_forwards_to_the_same_value() {
        let shared = Rc::new(GeneralAppointment::new("Ana Ruiz", "2025-01-01 10:00"));
        let other_handle = Rc::clone(&shared);

        other_handle.change_status("confirmed");

        assert_eq!(shared.status(), "confirmed");
        assert_eq!(shared.describe(), other_handle.describe());
    }

    #[test]
    fn test_boxed_and_borrowed_appointments_forward() {
        let boxed: Box<dyn Appointment> =
            Box::new(GeneralAppointment::new("Ana Ruiz", "2025-01-01 10:00"));
        let borrowed = &boxed;

        borrowed.change_status("arrived");

        assert_eq!(boxed.status(), "arrived");
        assert_eq!(borrowed.patient_name(), "Ana Ruiz");
        assert_eq!(borrowed.schedule(), "2025-01-01 10:00");
    }
}
