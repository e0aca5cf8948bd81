use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of one rewrite pass.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RewriteReport {
    /// Permission grants re-pointed at a canary alias, in resource order.
    pub rewritten: Vec<RewrittenGrant>,

    /// Per-resource anomalies. Never fatal; the pass always completes.
    #[serde(default)]
    pub warnings: Vec<RewriteWarning>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewrittenGrant {
    /// Logical name of the permission resource that was rewritten.
    pub resource: String,
    /// Logical name of the canary alias resource it now references.
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewriteWarning {
    /// The reference matched the provisioned-alias shape but its first
    /// operand is not the expected attribute read. The resource is left
    /// unchanged.
    MalformedJoin { resource: String },

    /// The synthesized canary alias resource is not present in the template.
    /// The rewrite is still applied; the dangling reference will surface at
    /// deploy time.
    DanglingAlias { resource: String, target: String },
}

impl RewriteWarning {
    pub fn resource(&self) -> &str {
        match self {
            RewriteWarning::MalformedJoin { resource }
            | RewriteWarning::DanglingAlias { resource, .. } => resource,
        }
    }
}

impl fmt::Display for RewriteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteWarning::MalformedJoin { resource } => write!(
                f,
                "{}: provisioned-alias reference has an unexpected first operand, left unchanged",
                resource
            ),
            RewriteWarning::DanglingAlias { resource, target } => write!(
                f,
                "{}: rewritten to reference {}, which does not exist in the template",
                resource, target
            ),
        }
    }
}
