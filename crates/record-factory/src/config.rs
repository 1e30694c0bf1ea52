// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Factory configuration.
//!
//! - **Static**: naming rules for global type names.
//! - **Runtime**: [`FactoryConfig`], handed to a [`TypeRegistry`](crate::TypeRegistry).
//!
//! The process-wide registry runs with `FactoryConfig::default()`.

/// Separator allowed inside a global type name besides alphanumerics.
pub const NAME_SEPARATOR: char = '_';

/// What a registry does when a name is bound a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedefinePolicy {
    /// Rebind silently.
    Replace,
    /// Rebind and log a warning ("already initialized constant").
    #[default]
    Warn,
    /// Keep the existing binding and return
    /// [`RecordError::AlreadyDefined`](crate::RecordError::AlreadyDefined).
    Reject,
}

/// Runtime configuration of a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FactoryConfig {
    pub redefine: RedefinePolicy,
}

impl FactoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_redefine(mut self, policy: RedefinePolicy) -> Self {
        self.redefine = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_warns() {
        assert_eq!(FactoryConfig::default().redefine, RedefinePolicy::Warn);
    }

    #[test]
    fn test_builder() {
        let config = FactoryConfig::new().with_redefine(RedefinePolicy::Reject);
        assert_eq!(config.redefine, RedefinePolicy::Reject);
    }
}
