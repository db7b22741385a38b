//! Transport modes and the vehicle catalog.
//!
//! The catalog is static reference data: each mode offers two or three
//! vehicle classes, identified by a stable key and displayed with a
//! human-readable label. Submissions carry the key; labels are resolved
//! only for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How the shipment travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Road,
    Air,
    Ship,
    Train,
}

impl TransportMode {
    /// All selectable modes, in display order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Road,
        TransportMode::Air,
        TransportMode::Ship,
        TransportMode::Train,
    ];

    /// Wire key (matches the serde rendering).
    pub fn key(&self) -> &'static str {
        match self {
            TransportMode::Road => "road",
            TransportMode::Air => "air",
            TransportMode::Ship => "ship",
            TransportMode::Train => "train",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Road => "Road",
            TransportMode::Air => "Air",
            TransportMode::Ship => "Ship",
            TransportMode::Train => "Train",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for TransportMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "road" => Ok(TransportMode::Road),
            "air" => Ok(TransportMode::Air),
            "ship" => Ok(TransportMode::Ship),
            "train" => Ok(TransportMode::Train),
            other => Err(ValidationError::invalid_value(
                "mode",
                format!("unknown transport mode '{}'", other),
            )),
        }
    }
}

/// One selectable vehicle class within a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VehicleClass {
    /// Stable catalog key, e.g. `hgv_avg`.
    pub key: &'static str,
    /// Human-readable label, e.g. `Average Truck`.
    pub label: &'static str,
}

/// Vehicle classes offered for a mode.
pub fn vehicle_options(mode: TransportMode) -> &'static [VehicleClass] {
    match mode {
        TransportMode::Road => &[
            VehicleClass { key: "hgv_avg", label: "Average Truck" },
            VehicleClass { key: "hgv_rigid_avg", label: "Rigid Truck" },
            VehicleClass { key: "hgv_artic_avg", label: "Articulated Truck" },
        ],
        TransportMode::Air => &[
            VehicleClass { key: "freighter_avg", label: "Average Freighter" },
            VehicleClass { key: "belly_freight", label: "Passenger Plane Belly" },
        ],
        TransportMode::Ship => &[
            VehicleClass { key: "container_ship_avg", label: "Container Ship" },
            VehicleClass { key: "bulk_carrier_avg", label: "Bulk Carrier" },
            VehicleClass { key: "ro-ro_ferry", label: "Ro-Ro Ferry" },
        ],
        TransportMode::Train => &[
            VehicleClass { key: "diesel", label: "Diesel Train" },
            VehicleClass { key: "electric", label: "Electric Train" },
        ],
    }
}

/// Resolves a vehicle key back to its display label within a mode.
pub fn vehicle_label(mode: TransportMode, key: &str) -> Option<&'static str> {
    vehicle_options(mode)
        .iter()
        .find(|class| class.key == key)
        .map(|class| class.label)
}

/// Two-stage transport picker: mode first, then a vehicle class offered
/// by that mode. Re-selecting a mode discards any vehicle choice made
/// under the previous mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportSelection {
    mode: Option<TransportMode>,
    vehicle_key: Option<String>,
}

impl TransportSelection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected mode, if any.
    pub fn mode(&self) -> Option<TransportMode> {
        self.mode
    }

    /// Currently selected vehicle key, if any.
    pub fn vehicle_key(&self) -> Option<&str> {
        self.vehicle_key.as_deref()
    }

    /// Selects a mode. Switching modes clears the vehicle choice.
    pub fn select_mode(&mut self, mode: TransportMode) {
        if self.mode != Some(mode) {
            self.vehicle_key = None;
        }
        self.mode = Some(mode);
    }

    /// Selects a vehicle class; the key must be offered by the selected mode.
    pub fn select_vehicle(&mut self, key: &str) -> Result<(), ValidationError> {
        let mode = self.mode.ok_or_else(|| {
            ValidationError::invalid_value("vehicleType", "select a transport mode first")
        })?;
        if vehicle_label(mode, key).is_none() {
            return Err(ValidationError::invalid_value(
                "vehicleType",
                format!("'{}' is not offered for mode '{}'", key, mode),
            ));
        }
        self.vehicle_key = Some(key.to_string());
        Ok(())
    }

    /// Vehicle classes offered by the selected mode (empty before one is picked).
    pub fn options(&self) -> &'static [VehicleClass] {
        self.mode.map(vehicle_options).unwrap_or(&[])
    }

    /// True once both mode and vehicle are chosen; the submit control
    /// stays disabled until then.
    pub fn is_complete(&self) -> bool {
        self.mode.is_some() && self.vehicle_key.is_some()
    }
}
