use std::fmt;
use std::net::Ipv4Addr;

use thiserror::Error;

use crate::dns_record::RecordType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Name must not end with a dot: {0:?}")]
    TrailingDot(String),

    #[error("Name must not contain an underscore: {0:?}")]
    Underscore(String),

    #[error("Invalid IPv4 address: {0:?}")]
    InvalidIpv4(String),

    #[error("Ambiguous target {0:?}: use a bare label or terminate the name with a dot")]
    AmbiguousTarget(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleSyntaxError {
    #[error("Transform rule {rule}: expected 4 fields separated by '~', found {found}")]
    FieldCount { rule: usize, found: usize },

    #[error("Transform rule {rule}: missing {field} address")]
    MissingBound { rule: usize, field: &'static str },

    #[error("Transform rule {rule}: {field} is not a valid IPv4 address: {value:?}")]
    InvalidAddress {
        rule: usize,
        field: &'static str,
        value: String,
    },

    #[error("Transform rule {rule}: new base and explicit targets cannot both be set")]
    BothRewrites { rule: usize },

    #[error("Transform rule {rule}: one of new base or explicit targets must be set")]
    NoRewrite { rule: usize },

    #[error("Transform rule {rule}: low bound {low} is above high bound {high}")]
    InvertedRange {
        rule: usize,
        low: Ipv4Addr,
        high: Ipv4Addr,
    },
}

/// Everything that can go wrong while normalizing a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    RuleSyntax(#[from] RuleSyntaxError),

    #[error("{0} record cannot be created for the bare domain")]
    ApexNotAllowed(RecordType),

    #[error("Offset rewrite of {address} from {low} onto {new_base} leaves the IPv4 address space")]
    AddressOverflow {
        address: Ipv4Addr,
        low: Ipv4Addr,
        new_base: Ipv4Addr,
    },

    #[error("Import source zone not found: {0}")]
    UnknownImportSource(String),

    #[error("Import transform has no transform_table metadata")]
    MissingTransformTable,
}

/// A [`RecordError`] tagged with the identity of the offending record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("In {record_type} {name} (zone {zone}, record #{position}): {source}")]
pub struct ValidationError {
    pub zone: String,
    pub position: usize,
    pub name: String,
    pub record_type: RecordType,
    #[source]
    pub source: RecordError,
}

/// Outcome of a failed normalization pass. Holds at least one error; exactly one when the
/// pass runs in fail-fast mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeError {
    errors: Vec<ValidationError>,
}

impl NormalizeError {
    pub fn new(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn first(&self) -> &ValidationError {
        &self.errors[0]
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<ValidationError> for NormalizeError {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            1 => write!(f, "{}", self.errors[0]),
            n => write!(f, "{} validation errors, first: {}", n, self.errors[0]),
        }
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors.first().map(|e| e as &(dyn std::error::Error + 'static))
    }
}
