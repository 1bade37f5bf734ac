use std::{cell::RefCell, rc::Rc};

use booking::{
    appointments::{
        Appointment, AppointmentRecord, DEFAULT_STATUS, GeneralAppointment, SpecialistAppointment,
    },
    console::Console,
    decorators::{EMAIL_SUFFIX, EmailReminder, SMS_SUFFIX, SmsNotification},
    observers::{Observer, PatientObserver, ReceptionObserver},
};

#[derive(Default)]
struct Lines(RefCell<Vec<String>>);

impl Console for Lines {
    fn emit(&self, line: &str) {
        self.0.borrow_mut().push(line.to_owned());
    }
}

#[test]
fn test_detach_through_decorator_stops_notifications() {
    let lines = Rc::new(Lines::default());
    let appointment = GeneralAppointment::new("Ana Ruiz", "2025-01-01 10:00");
    let patient: Rc<dyn Observer> = Rc::new(PatientObserver::with_console(lines.clone()));
    let reception: Rc<dyn Observer> = Rc::new(ReceptionObserver::with_console(lines.clone()));

    let sms = SmsNotification::with_console(&appointment, lines.clone());
    sms.attach(Rc::clone(&patient));
    sms.attach(Rc::clone(&reception));
    sms.detach(&reception);
    sms.change_status("confirmed");
    sms.send_sms("See you soon");

    assert_eq!(
        *lines.0.borrow(),
        vec![
            "(Patient) Ana Ruiz, your appointment is now: confirmed",
            "[SMS to Ana Ruiz]: See you soon",
        ]
    );
    assert_eq!(sms.inner().status(), "confirmed");
}

#[test]
fn test_decorators_expose_wrapped_value_and_suffixes() {
    let specialist = SpecialistAppointment::new("Roberto Cruz", "2025-11-21 15:30", "Cardiology");
    let base_description = specialist.describe();

    let email = EmailReminder::new(SmsNotification::new(specialist));

    assert_eq!(email.inner().inner().specialty(), "Cardiology");
    assert_eq!(
        email.describe(),
        format!("{}{}{}", base_description, SMS_SUFFIX, EMAIL_SUFFIX)
    );
    assert_eq!(email.status(), DEFAULT_STATUS);
}

#[test]
fn test_record_counts_attached_observers() {
    let record = AppointmentRecord::new("Ana Ruiz", "2025-01-01 10:00");
    let patient: Rc<dyn Observer> = Rc::new(PatientObserver::new());

    record.attach(Rc::clone(&patient));
    assert_eq!(record.observer_count(), 1);

    record.detach(&patient);
    assert_eq!(record.observer_count(), 0);
}
