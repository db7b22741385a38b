//! Shipment draft and validated step inputs.
//!
//! The draft accumulates across the wizard: each step contributes only
//! its own fields, and nothing is removed until an explicit reset.
//! Step inputs validate at construction so the aggregate only ever sees
//! well-formed values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::transport::{vehicle_label, TransportMode};

/// The partially-filled shipment threaded through the wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TransportMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
}

impl ShipmentDraft {
    /// Empty draft, as created at wizard mount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the Route step's contribution.
    pub fn apply_route(&mut self, leg: RouteLeg) {
        self.source = Some(leg.source);
        self.destination = Some(leg.destination);
    }

    /// Merges the Cargo step's contribution.
    pub fn apply_cargo(&mut self, cargo: CargoDetails) {
        self.weight_kg = Some(cargo.weight_kg);
    }

    /// Merges the Transport step's contribution.
    pub fn apply_transport(&mut self, choice: TransportChoice) {
        self.mode = Some(choice.mode);
        self.vehicle_type = Some(choice.vehicle_key);
    }

    /// True when no step has contributed yet.
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.destination.is_none()
            && self.weight_kg.is_none()
            && self.mode.is_none()
            && self.vehicle_type.is_none()
    }
}

/// Validated Route step input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    source: String,
    destination: String,
}

impl RouteLeg {
    /// Accepts non-empty source and destination; surrounding whitespace
    /// is trimmed.
    pub fn parse(source: &str, destination: &str) -> Result<Self, ValidationError> {
        let source = source.trim();
        let destination = destination.trim();
        if source.is_empty() {
            return Err(ValidationError::empty_field("source"));
        }
        if destination.is_empty() {
            return Err(ValidationError::empty_field("destination"));
        }
        Ok(Self {
            source: source.to_string(),
            destination: destination.to_string(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

/// Validated Cargo step input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CargoDetails {
    weight_kg: f64,
}

impl CargoDetails {
    /// Parses the raw form value as a non-negative finite weight in kg.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("weight"));
        }
        let weight_kg: f64 = raw
            .parse()
            .map_err(|_| ValidationError::not_a_number("weight", raw))?;
        Self::from_kg(weight_kg, raw)
    }

    /// Accepts an already-numeric weight.
    pub fn from_weight(weight_kg: f64) -> Result<Self, ValidationError> {
        Self::from_kg(weight_kg, &weight_kg.to_string())
    }

    fn from_kg(weight_kg: f64, raw: &str) -> Result<Self, ValidationError> {
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(ValidationError::not_a_number("weight", raw));
        }
        Ok(Self { weight_kg })
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Validated Transport step input: a mode plus a vehicle class it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportChoice {
    mode: TransportMode,
    vehicle_key: String,
}

impl TransportChoice {
    /// Accepts a vehicle key offered by the given mode.
    pub fn parse(mode: TransportMode, vehicle_key: &str) -> Result<Self, ValidationError> {
        if vehicle_label(mode, vehicle_key).is_none() {
            return Err(ValidationError::invalid_value(
                "vehicleType",
                format!("'{}' is not offered for mode '{}'", vehicle_key, mode),
            ));
        }
        Ok(Self {
            mode,
            vehicle_key: vehicle_key.to_string(),
        })
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn vehicle_key(&self) -> &str {
        &self.vehicle_key
    }
}
