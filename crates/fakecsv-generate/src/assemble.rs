//! Row and table assembly.

use crate::fields::{BaseFields, FieldKind};
use crate::provider::FakeProvider;

/// One output row, cells in field-list order.
pub type Row = Vec<String>;

/// Header plus a lazy sequence of data rows.
pub struct Table<'a, P: FakeProvider + ?Sized> {
    pub header: Vec<String>,
    pub rows: Rows<'a, P>,
}

/// Lazily generated data rows.
///
/// Each call to `next` derives a fresh [`BaseFields`] and then evaluates the
/// fields in order, so the provider stream is consumed strictly row by row.
pub struct Rows<'a, P: FakeProvider + ?Sized> {
    fields: &'a [FieldKind],
    provider: &'a mut P,
    remaining: u64,
}

impl<P: FakeProvider + ?Sized> Iterator for Rows<'_, P> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let provider = &mut *self.provider;
        let base = BaseFields::derive(provider);
        let row = self
            .fields
            .iter()
            .map(|field| field.generate(&base, provider))
            .collect();
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<P: FakeProvider + ?Sized> ExactSizeIterator for Rows<'_, P> {}

/// Build the header from `fields` verbatim and prepare `row_count` rows.
pub fn assemble<'a, P>(
    fields: &'a [FieldKind],
    row_count: u64,
    provider: &'a mut P,
) -> Table<'a, P>
where
    P: FakeProvider + ?Sized,
{
    let header = fields.iter().map(|field| field.as_str().to_string()).collect();
    Table {
        header,
        rows: Rows {
            fields,
            provider,
            remaining: row_count,
        },
    }
}
