use super::csv::write_row;
use super::record::Record;
use crate::domain::Slots;

/// Serialize a collection: header row first, then one row per live entity in
/// ascending id order. Holes produce no output.
pub fn serialize<T: Record>(slots: &Slots<T>) -> String {
    let mut output = write_row(T::HEADERS);
    for entity in slots.iter() {
        output.push_str(&write_row(entity.to_row().as_slice()));
    }
    output
}
