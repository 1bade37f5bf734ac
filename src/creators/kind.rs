use serde::{Deserialize, Serialize};

use crate::creators::{AppointmentCreator, GeneralCreator, SpecialistCreator};

/// Appointment variant of a configured booking.
///
/// # YAML
///
/// ```yaml
/// appointment:
///   kind: specialist
///   specialty: Dermatology
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AppointmentKind {
    General,
    Specialist {
        #[serde(deserialize_with = "crate::config::text")]
        specialty: String,
    },
}

/// Returns the creator producing `kind` for the given patient and schedule.
pub fn creator_for(
    kind: &AppointmentKind,
    patient_name: &str,
    schedule: &str,
) -> Box<dyn AppointmentCreator> {
    match kind {
        AppointmentKind::General => Box::new(GeneralCreator::new(patient_name, schedule)),
        AppointmentKind::Specialist { specialty } => {
            Box::new(SpecialistCreator::new(patient_name, schedule, specialty))
        }
    }
}
