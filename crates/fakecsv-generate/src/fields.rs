//! The closed field vocabulary and the per-row identity bundle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::provider::FakeProvider;

const MIN_AGE: i64 = 18;
const MAX_AGE: i64 = 99;

/// A column kind the generator knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Name,
    Age,
    Email,
    FirstName,
    LastName,
    MiddleName,
    City,
    JobTitle,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Name,
        FieldKind::Age,
        FieldKind::Email,
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::MiddleName,
        FieldKind::City,
        FieldKind::JobTitle,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "age" => Some(Self::Age),
            "email" => Some(Self::Email),
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            "middleName" => Some(Self::MiddleName),
            "city" => Some(Self::City),
            "jobTitle" => Some(Self::JobTitle),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Email => "email",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::MiddleName => "middleName",
            Self::City => "city",
            Self::JobTitle => "jobTitle",
        }
    }

    /// Whether the value is read from the row's [`BaseFields`] rather than drawn fresh.
    pub fn is_identity(self) -> bool {
        matches!(
            self,
            Self::Name | Self::Email | Self::FirstName | Self::LastName
        )
    }

    /// Produce one cell for this field.
    ///
    /// Identity fields copy from `base`; the rest consume fresh values from
    /// `provider`, so repeating `age` in one row gives independent draws while
    /// repeating `email` repeats the same address.
    pub fn generate<P>(self, base: &BaseFields, provider: &mut P) -> String
    where
        P: FakeProvider + ?Sized,
    {
        match self {
            Self::Name => base.name.clone(),
            Self::FirstName => base.first_name.clone(),
            Self::LastName => base.last_name.clone(),
            Self::Email => base.email.clone(),
            Self::Age => provider.number(MIN_AGE, MAX_AGE).to_string(),
            Self::MiddleName => provider.middle_name(),
            Self::City => provider.city(),
            Self::JobTitle => provider.job_title(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not part of the field vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FieldKind {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnknownField(value.to_string()))
    }
}

/// Identity values generated together once per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseFields {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl BaseFields {
    /// Draw first name, last name and domain, in that order, and derive the rest.
    ///
    /// Called for every row whether or not any identity field was requested,
    /// which keeps the provider stream aligned across field selections.
    pub fn derive<P>(provider: &mut P) -> Self
    where
        P: FakeProvider + ?Sized,
    {
        let first_name = provider.first_name();
        let last_name = provider.last_name();
        let domain = provider.domain_name();
        let name = format!("{first_name} {last_name}");
        let email = format!(
            "{}.{}@{domain}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );

        Self {
            name,
            first_name,
            last_name,
            email,
        }
    }
}
