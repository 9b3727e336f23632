//! Policy configuration and enforcement.

use crate::{CapabilityKind, CapabilityRequest, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Policy configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Policy {
    /// Tools allowed per capability.
    #[serde(default)]
    pub allow: AllowRules,

    /// Capabilities and tools that are explicitly denied (overrides allow).
    #[serde(default)]
    pub deny: DenyRules,
}

/// Tool name patterns allowed per capability.
///
/// A pattern is `*`, a `prefix*` or an exact tool name. Both lists default to
/// `["*"]`, so an empty policy file allows every tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowRules {
    /// Tools that may read the page.
    #[serde(default = "wildcard")]
    pub page_read: Vec<String>,

    /// Tools that may mutate the page.
    #[serde(default = "wildcard")]
    pub page_write: Vec<String>,
}

impl Default for AllowRules {
    fn default() -> Self {
        Self {
            page_read: wildcard(),
            page_write: wildcard(),
        }
    }
}

fn wildcard() -> Vec<String> {
    vec!["*".to_string()]
}

/// Rules for denied capabilities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DenyRules {
    /// Deny all tools requiring these capabilities.
    #[serde(default)]
    pub all: HashSet<CapabilityKind>,

    /// Deny these tool name patterns whatever their capability.
    #[serde(default)]
    pub tools: Vec<String>,
}

/// Result of a capability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: String },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

impl Policy {
    /// Parse policy from TOML string.
    pub fn parse(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Allow every tool.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Allow reads and assertions, deny anything that mutates the page.
    pub fn read_only() -> Self {
        let mut deny_all = HashSet::new();
        deny_all.insert(CapabilityKind::PageWrite);

        Self {
            allow: AllowRules {
                page_write: Vec::new(),
                ..Default::default()
            },
            deny: DenyRules {
                all: deny_all,
                ..Default::default()
            },
        }
    }

    /// Check if a capability request is allowed.
    pub fn check(&self, request: &CapabilityRequest) -> Decision {
        // Check explicit denials first
        if self.deny.all.contains(&request.kind) {
            return Decision::Deny {
                reason: format!("{} is denied by policy", request.kind),
            };
        }
        if let Some(tool) = &request.scope {
            if self.deny.tools.iter().any(|p| pattern_matches(p, tool)) {
                return Decision::Deny {
                    reason: format!("tool {tool} is denied by policy"),
                };
            }
        }

        let allowlist = match request.kind {
            CapabilityKind::PageRead => &self.allow.page_read,
            CapabilityKind::PageWrite => &self.allow.page_write,
        };
        let allowed = match &request.scope {
            Some(tool) => allowlist.iter().any(|p| pattern_matches(p, tool)),
            None => !allowlist.is_empty(), // No scope = any tool, allow if list non-empty
        };

        if allowed {
            Decision::Allow
        } else {
            Decision::Deny {
                reason: format!(
                    "{} not in allowlist{}",
                    request.kind,
                    request
                        .scope
                        .as_ref()
                        .map(|s| format!(" (tool: {s})"))
                        .unwrap_or_default()
                ),
            }
        }
    }
}

fn pattern_matches(pattern: &str, tool: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    match pattern.strip_suffix('*') {
        Some(prefix) => tool.starts_with(prefix),
        None => pattern == tool,
    }
}
