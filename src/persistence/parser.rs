use super::csv::parse_rows;
use super::error::PersistenceError;
use super::record::Record;
use crate::domain::{normalize_key, Fields, Slots, MAX_ID};

/// Parse a header-led file into `slots`, placing each entity at the slot
/// matching its id. Returns the number of entities placed.
///
/// Empty and header-only files are valid and place nothing. A row whose id
/// coerces to 0 cannot occupy the placeholder slot and is skipped; a repeated
/// id replaces the earlier row. An id above [`MAX_ID`] is an error.
pub fn parse_into<T: Record>(text: &str, slots: &mut Slots<T>) -> Result<usize, PersistenceError> {
    let mut rows = parse_rows(text)?.into_iter();

    let Some(header) = rows.next() else {
        return Ok(0);
    };
    if !header.fields.iter().any(|name| normalize_key(name) == "id") {
        return Err(PersistenceError::MissingIdColumn);
    }

    let mut placed = 0;
    for row in rows {
        if row.fields.len() != header.fields.len() {
            return Err(PersistenceError::MalformedRow {
                line: row.line,
                expected: header.fields.len(),
                found: row.fields.len(),
            });
        }

        let entity = T::from_fields(&Fields::from_row(&header.fields, &row.fields));
        let id = entity.id();
        if id == 0 {
            log::warn!("line {}: skipping row without a usable id", row.line);
            continue;
        }
        if id > MAX_ID {
            return Err(PersistenceError::IdOutOfRange { line: row.line, id });
        }
        if slots.insert_at(id, entity).is_some() {
            log::warn!("line {}: id {} appears more than once, keeping the later row", row.line, id);
        } else {
            placed += 1;
        }
    }

    Ok(placed)
}
