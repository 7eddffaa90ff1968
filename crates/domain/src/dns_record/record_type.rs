use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    TXT,
    ALIAS,

    /// Pseudo-record: pulls the A and CNAME records of another zone into this one.
    #[serde(rename = "IMPORT_TRANSFORM")]
    ImportTransform,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::TXT => "TXT",
            RecordType::ALIAS => "ALIAS",
            RecordType::ImportTransform => "IMPORT_TRANSFORM",
        }
    }

    /// Types whose target is a host name rather than an address or free text.
    pub fn has_hostname_target(&self) -> bool {
        matches!(
            self,
            RecordType::CNAME | RecordType::MX | RecordType::NS | RecordType::ALIAS
        )
    }

    /// TXT labels carry service prefixes such as `_dmarc`.
    pub fn allows_underscore_label(&self) -> bool {
        matches!(self, RecordType::TXT)
    }

    pub fn forbidden_at_apex(&self) -> bool {
        matches!(self, RecordType::CNAME | RecordType::NS)
    }

    pub fn is_pseudo(&self) -> bool {
        matches!(self, RecordType::ImportTransform)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "TXT" => Ok(RecordType::TXT),
            "ALIAS" => Ok(RecordType::ALIAS),
            "IMPORT_TRANSFORM" => Ok(RecordType::ImportTransform),
            _ => Err(format!("Unsupported record type: {}", s)),
        }
    }
}
