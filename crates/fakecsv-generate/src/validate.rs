//! Request sanity checks and field-list validation.

use crate::errors::GenerationError;
use crate::fields::FieldKind;

/// Split a raw field list on commas, verbatim. Whitespace is not trimmed.
pub fn split_fields(raw: &str) -> Vec<&str> {
    raw.split(',').collect()
}

/// Tokens of `raw` that are not in the field vocabulary, in input order.
pub fn invalid_fields(raw: &str) -> Vec<String> {
    split_fields(raw)
        .into_iter()
        .filter(|token| FieldKind::parse(token).is_none())
        .map(str::to_string)
        .collect()
}

/// A validated generation request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    rows: u64,
    fields: Vec<FieldKind>,
    raw_fields: String,
    filename: String,
    seed: u64,
}

impl GenerationRequest {
    /// Check row count, field string and filename (in that order), then the
    /// field vocabulary, reporting every unknown token at once.
    pub fn new(
        rows: i64,
        fields: &str,
        filename: &str,
        seed: u64,
    ) -> Result<Self, GenerationError> {
        check_request(rows, fields, filename)?;

        let invalid = invalid_fields(fields);
        if !invalid.is_empty() {
            return Err(GenerationError::InvalidFields(invalid));
        }

        let kinds = split_fields(fields)
            .into_iter()
            .filter_map(FieldKind::parse)
            .collect();

        Ok(Self {
            rows: rows.unsigned_abs(),
            fields: kinds,
            raw_fields: fields.to_string(),
            filename: filename.to_string(),
            seed,
        })
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn fields(&self) -> &[FieldKind] {
        &self.fields
    }

    /// The field list as the user wrote it.
    pub fn raw_fields(&self) -> &str {
        &self.raw_fields
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

fn check_request(rows: i64, fields: &str, filename: &str) -> Result<(), GenerationError> {
    if rows <= 0 {
        return Err(GenerationError::InvalidRowCount(rows));
    }
    if fields.is_empty() {
        return Err(GenerationError::EmptyFields);
    }
    if filename.is_empty() {
        return Err(GenerationError::EmptyFilename);
    }
    Ok(())
}
