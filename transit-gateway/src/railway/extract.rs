//! Positional field extraction from railway ticket records.
//!
//! Each train in a ticket query result is one `|`-delimited string with a
//! fixed field layout. [`TrainRecord`] gives raw positional access;
//! [`TicketSummary::from_record`] is the typed step that picks out the
//! fields we report and fails if any of them is missing.

use serde::Serialize;

/// Field delimiter within a ticket record.
pub const DELIMITER: char = '|';

/// Positions of the fields we report.
pub mod index {
    pub const ENCRYPTED_CODE: usize = 0;
    pub const BOOKING_BUTTON: usize = 1;
    pub const TRAIN_NUMBER: usize = 2;
    pub const TRAIN_NAME: usize = 3;
    pub const DEPARTURE_TIME: usize = 8;
    pub const ARRIVAL_TIME: usize = 9;
    pub const DURATION: usize = 10;
    pub const AVAILABILITY: usize = 11;
    pub const SECOND_CLASS_SEAT: usize = 30;
}

/// Error when a record is too short to hold a required field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("train record has {len} fields; {name} expected at index {index}")]
pub struct ExtractError {
    pub index: usize,
    pub name: &'static str,
    pub len: usize,
}

/// One ticket record split into its positional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainRecord<'a> {
    fields: Vec<&'a str>,
}

impl<'a> TrainRecord<'a> {
    /// Split a raw record on [`DELIMITER`]. Empty fields are preserved.
    pub fn parse(raw: &'a str) -> Self {
        Self {
            fields: raw.split(DELIMITER).collect(),
        }
    }

    /// The field at `index`, or `None` past the end of the record.
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// Number of fields in the record. Never zero.
    fn len(&self) -> usize {
        self.fields.len()
    }

    fn require(&self, index: usize, name: &'static str) -> Result<String, ExtractError> {
        self.field(index)
            .map(str::to_string)
            .ok_or(ExtractError {
                index,
                name,
                len: self.len(),
            })
    }
}

/// The fields reported for a single train.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub encrypted_code: String,
    pub booking_button: String,
    pub train_number: String,
    pub train_name: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub availability: String,
    pub second_class_seat: String,
}

impl TicketSummary {
    /// Pick the reported fields out of a record.
    pub fn from_record(record: &TrainRecord<'_>) -> Result<Self, ExtractError> {
        Ok(Self {
            encrypted_code: record.require(index::ENCRYPTED_CODE, "encryptedCode")?,
            booking_button: record.require(index::BOOKING_BUTTON, "bookingButton")?,
            train_number: record.require(index::TRAIN_NUMBER, "trainNumber")?,
            train_name: record.require(index::TRAIN_NAME, "trainName")?,
            departure_time: record.require(index::DEPARTURE_TIME, "departureTime")?,
            arrival_time: record.require(index::ARRIVAL_TIME, "arrivalTime")?,
            duration: record.require(index::DURATION, "duration")?,
            availability: record.require(index::AVAILABILITY, "availability")?,
            second_class_seat: record.require(index::SECOND_CLASS_SEAT, "secondClassSeat")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A record with the reported fields at their real positions and
    /// filler everywhere else.
    fn sample_record() -> String {
        let mut fields: Vec<String> = (0..36).map(|i| format!("f{i}")).collect();
        fields[0] = "ENC".into();
        fields[1] = "BTN".into();
        fields[2] = "123".into();
        fields[3] = "G101".into();
        fields[8] = "0800".into();
        fields[9] = "0830".into();
        fields[10] = "0030".into();
        fields[11] = "Y".into();
        fields[30] = "2A".into();
        fields.join("|")
    }

    #[test]
    fn split_preserves_positions() {
        let raw = sample_record();
        let record = TrainRecord::parse(&raw);

        assert_eq!(record.len(), 36);
        assert_eq!(record.field(index::TRAIN_NUMBER), Some("123"));
        assert_eq!(record.field(index::DEPARTURE_TIME), Some("0800"));
        assert_eq!(record.field(index::SECOND_CLASS_SEAT), Some("2A"));
        assert_eq!(record.field(4), Some("f4"));
    }

    #[test]
    fn field_past_end_is_absent() {
        let record = TrainRecord::parse("a|b|c");
        assert_eq!(record.field(2), Some("c"));
        assert_eq!(record.field(3), None);
        assert_eq!(record.field(index::SECOND_CLASS_SEAT), None);
    }

    #[test]
    fn empty_fields_are_kept() {
        let record = TrainRecord::parse("a||c|");
        assert_eq!(record.len(), 4);
        assert_eq!(record.field(1), Some(""));
        assert_eq!(record.field(3), Some(""));
    }

    #[test]
    fn summary_from_known_record() {
        let raw = sample_record();
        let summary = TicketSummary::from_record(&TrainRecord::parse(&raw)).unwrap();

        assert_eq!(
            summary,
            TicketSummary {
                encrypted_code: "ENC".into(),
                booking_button: "BTN".into(),
                train_number: "123".into(),
                train_name: "G101".into(),
                departure_time: "0800".into(),
                arrival_time: "0830".into(),
                duration: "0030".into(),
                availability: "Y".into(),
                second_class_seat: "2A".into(),
            }
        );
    }

    #[test]
    fn summary_serializes_camel_case() {
        let raw = sample_record();
        let summary = TicketSummary::from_record(&TrainRecord::parse(&raw)).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["trainNumber"], "123");
        assert_eq!(json["secondClassSeat"], "2A");
        assert_eq!(json["encryptedCode"], "ENC");
        assert_eq!(json.as_object().unwrap().len(), 9);
    }

    #[test]
    fn short_record_is_a_decode_error() {
        let raw = (0..12).map(|i| i.to_string()).collect::<Vec<_>>().join("|");
        let err = TicketSummary::from_record(&TrainRecord::parse(&raw)).unwrap_err();

        assert_eq!(
            err,
            ExtractError {
                index: index::SECOND_CLASS_SEAT,
                name: "secondClassSeat",
                len: 12,
            }
        );
        assert_eq!(
            err.to_string(),
            "train record has 12 fields; secondClassSeat expected at index 30"
        );
    }

    #[test]
    fn first_missing_field_is_reported() {
        let err = TicketSummary::from_record(&TrainRecord::parse("only")).unwrap_err();
        assert_eq!(err.index, index::BOOKING_BUTTON);
    }
}
