use serde::Deserialize;

/// Patient intake fields for diet plan generation.
///
/// Transient: lives for the duration of one request and is never stored.
/// Field presence and primitive types are enforced by deserialization;
/// there are no range checks.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientProfile {
    pub age: u32,
    /// Height in centimeters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub gender: String,
    pub goals: String,
    pub medical_condition: String,
    pub dietary: String,
    /// Where to deliver the generated plan, if anywhere.
    #[serde(default)]
    pub email: Option<String>,
}
