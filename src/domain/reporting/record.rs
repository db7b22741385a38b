//! Result log records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// One appended log entry: when a result was reported, and its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub timestamp: Timestamp,
    pub result: String,
}

impl ResultRecord {
    /// Stamps a result with the current instant.
    pub fn now(result: impl Into<String>) -> Self {
        Self {
            timestamp: Timestamp::now(),
            result: result.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn serializes_timestamp_then_result() {
        let record = ResultRecord {
            timestamp: Timestamp::from_datetime(
                Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap(),
            ),
            result: "452.78 kg CO2e (Grade C)".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timestamp"], "2024-03-15T09:30:00.000Z");
        assert_eq!(json["result"], "452.78 kg CO2e (Grade C)");
    }

    #[test]
    fn now_stamps_the_current_instant() {
        let record = ResultRecord::now("logged");
        assert_eq!(record.result, "logged");
    }
}
