use super::error::PersistenceError;

/// One record read from a comma-separated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Line on which the record starts (1-based)
    pub line: usize,
    pub fields: Vec<String>,
}

/// Split comma-separated text into records.
///
/// Fields may be wrapped in double quotes, in which case they can contain
/// commas, line breaks and `""` (a literal quote). Blank lines are skipped.
pub fn parse_rows(text: &str) -> Result<Vec<Row>, PersistenceError> {
    let mut rows = Vec::new();
    let mut chars = text.chars().peekable();

    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut has_content = false;
    let mut line = 1;
    let mut record_line = 1;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                has_content = true;
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                has_content = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                if has_content {
                    fields.push(std::mem::take(&mut field));
                    rows.push(Row {
                        line: record_line,
                        fields: std::mem::take(&mut fields),
                    });
                }
                has_content = false;
                line += 1;
                record_line = line;
            }
            _ => {
                field.push(c);
                has_content = true;
            }
        }
    }

    if in_quotes {
        return Err(PersistenceError::UnterminatedQuote { line: record_line });
    }
    if has_content {
        fields.push(field);
        rows.push(Row {
            line: record_line,
            fields,
        });
    }

    Ok(rows)
}

/// Render one record, terminated by a newline
pub fn write_row<S: AsRef<str>>(fields: &[S]) -> String {
    let mut output = fields
        .iter()
        .map(|field| quote_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    output.push('\n');
    output
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
