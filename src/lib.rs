//! Booking - appointment booking built from three composable patterns.
//!
//! A small booking library showing how a factory, decorators and observers fit
//! together around an appointment. The `booking` binary plays a demonstration
//! scenario on top of it.
//!
//! # Overview
//!
//! Appointments are created through their creators, the patient and the
//! reception desk observe them, and each one is wrapped with a delivery channel.
//! Changing an appointment's status notifies its observers, after which a
//! message is delivered through the channel.
//!
//! # Architecture
//!
//! - [`appointments`] - The appointment contract, shared record and variants
//! - [`console`] - Output sink every user-facing line goes through
//! - [`config`] - Scenario configuration with YAML file and environment overrides
//! - [`creators`] - Factories producing appointment variants
//! - [`decorators`] - SMS and email decorators plus runtime channel selection
//! - [`observers`] - Patient and reception observers
//! - [`scenario`] - The demonstration runner

pub mod appointments;
pub mod config;
pub mod console;
pub mod creators;
pub mod decorators;
pub mod observers;
pub mod scenario;
