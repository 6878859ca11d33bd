//! Synthetic tabular data generation for fakecsv.
//!
//! A run takes a row count, an ordered list of field names and a seed, and
//! writes a header plus one row of fake values per requested row as CSV.
//! Identity fields (`name`, `firstName`, `lastName`, `email`) are derived
//! together once per row so they always agree with each other.

pub mod assemble;
pub mod engine;
pub mod errors;
pub mod fields;
pub mod model;
pub mod output;
pub mod provider;
pub mod validate;

pub use assemble::{Row, Rows, Table, assemble};
pub use engine::{GenerationEngine, GenerationResult, WriteSummary};
pub use errors::GenerationError;
pub use fields::{BaseFields, FieldKind, UnknownField};
pub use model::{GenerateOptions, GenerationReport};
pub use output::{CsvSink, RowSink, create_csv_file};
pub use provider::{FakeProvider, FakeRsProvider};
pub use validate::{GenerationRequest, invalid_fields, split_fields};
