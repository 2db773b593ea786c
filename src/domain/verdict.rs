use super::registry::Authorization;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable rejection codes. The serialized form is part of the external contract.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    EntityNotFound,
    EntityNotAuthorized,
    ScopeForbidden,
    AmountLimitExceeded,
    AmountInvalid,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::EntityNotFound => "ENTITY_NOT_FOUND",
            ReasonCode::EntityNotAuthorized => "ENTITY_NOT_AUTHORIZED",
            ReasonCode::ScopeForbidden => "SCOPE_FORBIDDEN",
            ReasonCode::AmountLimitExceeded => "AMOUNT_LIMIT_EXCEEDED",
            ReasonCode::AmountInvalid => "AMOUNT_INVALID",
        }
    }

    /// Human-readable explanation shown to callers alongside the code.
    pub fn description(&self) -> &'static str {
        match self {
            ReasonCode::EntityNotFound => "Entity is not registered to operate insurance.",
            ReasonCode::EntityNotAuthorized => "Entity is not authorized to operate insurance.",
            ReasonCode::ScopeForbidden => {
                "Entity is not authorized to operate in the requested insurance line."
            }
            ReasonCode::AmountLimitExceeded => {
                "Amount exceeds the limit allowed for unsupervised operations."
            }
            ReasonCode::AmountInvalid => "Amount must not be negative.",
        }
    }

    /// Maps a failed registry lookup to its reason. `Authorized` has no reason.
    pub fn from_authorization(authorization: Authorization) -> Option<Self> {
        match authorization {
            Authorization::Authorized => None,
            Authorization::NotFound => Some(ReasonCode::EntityNotFound),
            Authorization::NotAuthorized => Some(ReasonCode::EntityNotAuthorized),
            Authorization::ScopeForbidden => Some(ReasonCode::ScopeForbidden),
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The accept/reject decision for a transaction.
///
/// A rejection always carries a reason; there is no way to build a non-compliant
/// verdict without one.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verdict {
    Compliant,
    NonCompliant(ReasonCode),
}

impl Verdict {
    pub fn is_compliant(&self) -> bool {
        matches!(self, Verdict::Compliant)
    }

    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            Verdict::Compliant => None,
            Verdict::NonCompliant(reason) => Some(*reason),
        }
    }

    pub fn status(&self) -> ComplianceStatus {
        match self {
            Verdict::Compliant => ComplianceStatus::Compliant,
            Verdict::NonCompliant(_) => ComplianceStatus::NonCompliant,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum ComplianceStatus {
    Compliant,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonCompliant => "Non-Compliant",
        }
    }
}
