//! Demonstration runner composing creators, observers and decorators.
//!
//! # Flow
//!
//! ```text
//! Booking → creator_for() → Appointment → attach(patient, reception)
//!         → DecoratedAppointment::wrap() → describe()
//!         → change_status() → observers → deliver()
//! ```
//!
//! The patient and reception observers are created once and shared by every
//! booking, in that attachment order.

use std::rc::Rc;

use log::info;

use crate::{
    appointments::Appointment,
    config::Config,
    console::Console,
    creators::creator_for,
    decorators::DecoratedAppointment,
    observers::{Observer, PatientObserver, ReceptionObserver},
};

/// Plays a [`Config`] through a [`Console`].
pub struct Scenario {
    config: Config,
    console: Rc<dyn Console>,
}

impl Scenario {
    /// Creates a scenario playing `config` through `console`.
    pub fn new(config: Config, console: Rc<dyn Console>) -> Self {
        Scenario { config, console }
    }

    /// Runs the whole demonstration, top to bottom.
    ///
    /// Prints the title, books every appointment and prints their descriptions,
    /// then for each booking prints its headline, changes its status and
    /// delivers its message.
    pub fn run(&self) {
        info!("running scenario with {} bookings", self.config.bookings.len());
        self.console.emit(&self.config.title);

        let patient: Rc<dyn Observer> = Rc::new(PatientObserver::with_console(Rc::clone(
            &self.console,
        )));
        let reception: Rc<dyn Observer> = Rc::new(ReceptionObserver::with_console(Rc::clone(
            &self.console,
        )));

        let appointments: Vec<DecoratedAppointment> = self
            .config
            .bookings
            .iter()
            .map(|booking| {
                let appointment =
                    creator_for(&booking.appointment, &booking.patient, &booking.schedule)
                        .create_appointment();
                appointment.attach(Rc::clone(&patient));
                appointment.attach(Rc::clone(&reception));
                DecoratedAppointment::wrap(appointment, booking.channel, Rc::clone(&self.console))
            })
            .collect();

        for appointment in &appointments {
            self.console.emit(&appointment.appointment().describe());
        }
        self.console.emit("");

        for (index, (booking, appointment)) in
            self.config.bookings.iter().zip(&appointments).enumerate()
        {
            if index > 0 {
                self.console.emit("");
            }
            self.console.emit(&booking.headline);
            appointment.appointment().change_status(&booking.new_status);
            appointment.deliver(&booking.message);
        }

        info!("scenario finished");
    }
}
