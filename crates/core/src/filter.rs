// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event filtering by severity and namespace patterns

use crate::event::{Event, EventType};

/// Pattern for matching hierarchical event namespaces
/// Supports:
///   - Exact: "agent.tools"
///   - Single wildcard: "agent.*" matches "agent.tools", "agent.llm"
///   - Subtree: "agent.**" matches everything under agent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespacePattern(String);

impl NamespacePattern {
    pub fn new(pattern: &str) -> Self {
        Self(pattern.to_string())
    }

    /// Check if this pattern matches a namespace
    pub fn matches(&self, namespace: &str) -> bool {
        // Empty pattern matches nothing
        if self.0.is_empty() {
            return false;
        }

        if self.0 == "*" || self.0 == "**" {
            return true;
        }

        let pattern_parts: Vec<&str> = self.0.split('.').collect();
        let namespace_parts: Vec<&str> = namespace.split('.').collect();

        Self::match_segments(&pattern_parts, &namespace_parts)
    }

    fn match_segments(pattern: &[&str], namespace: &[&str]) -> bool {
        match (pattern.first(), namespace.first()) {
            (None, None) => true,
            (Some(&"**"), _) => true, // ** matches everything remaining
            (Some(&"*"), Some(_)) => {
                // * matches single segment
                Self::match_segments(&pattern[1..], &namespace[1..])
            }
            (Some(p), Some(n)) if *p == *n => Self::match_segments(&pattern[1..], &namespace[1..]),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Decides which events a transport (or wrapped listener) should see
///
/// `matches` is a total, side-effect-free predicate: an event passes
/// when its severity clears `min_level` and every configured
/// constraint is satisfied. Empty constraint sets mean "no
/// constraint". Two transports may hold different filters over the
/// same event stream.
#[derive(Clone, Debug, Default)]
pub struct EventFilter {
    pub min_level: EventType,
    /// Include-patterns over `event.namespace`; empty = all
    pub namespaces: Vec<NamespacePattern>,
    /// Include-set over `event.name`; empty = all
    pub names: Vec<String>,
}

impl EventFilter {
    /// Filter on severity alone
    pub fn min_level(min_level: EventType) -> Self {
        Self {
            min_level,
            namespaces: Vec::new(),
            names: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, pattern: &str) -> Self {
        self.namespaces.push(NamespacePattern::new(pattern));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// True iff the event clears the level floor and all constraints
    pub fn matches(&self, event: &Event) -> bool {
        if event.event_type < self.min_level {
            return false;
        }

        if !self.namespaces.is_empty()
            && !self.namespaces.iter().any(|p| p.matches(&event.namespace))
        {
            return false;
        }

        if !self.names.is_empty() {
            match &event.name {
                Some(name) => {
                    if !self.names.iter().any(|n| n == name) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
