//! Extraction result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The screen a source file belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// Screen identifier, e.g. `(auth)/login`.
    pub screen: String,
    /// Whether the screen is part of the primary onboarding/auth/session flow.
    pub critical: bool,
}

impl Origin {
    pub fn new(screen: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            critical: false,
        }
    }

    pub fn critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }
}

/// A requested navigation: from which screen, by what action, to where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub origin: String,
    pub action: String,
    pub destination: String,
    #[serde(default)]
    pub critical: bool,
    /// 1-based source line, when extracted from a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// `false` when the destination holds an interpolation placeholder.
    #[serde(default = "default_checkable")]
    pub checkable: bool,
}

fn default_checkable() -> bool {
    true
}

impl NavigationRequest {
    /// A request declared by hand. Checkability is inferred from the
    /// destination text.
    pub fn declared(
        origin: impl Into<String>,
        action: impl Into<String>,
        destination: impl Into<String>,
        critical: bool,
    ) -> Self {
        let destination = destination.into();
        let checkable = !destination.contains("${");
        Self {
            origin: origin.into(),
            action: action.into(),
            destination,
            critical,
            line: None,
            checkable,
        }
    }
}

/// Why an interaction point does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadReason {
    /// Pressable element without any `onPress`.
    MissingHandler,
    /// Handler bound to a no-op such as `() => {}`.
    EmptyHandler,
}

impl fmt::Display for DeadReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadReason::MissingHandler => f.write_str("no onPress handler"),
            DeadReason::EmptyHandler => f.write_str("empty handler"),
        }
    }
}

/// An interaction point with no attached action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadInteraction {
    pub origin: String,
    pub line: usize,
    /// JSX element name, e.g. `TouchableOpacity`.
    pub element: String,
    pub reason: DeadReason,
}

/// Everything found in one source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub requests: Vec<NavigationRequest>,
    pub dead_interactions: Vec<DeadInteraction>,
}

impl Extraction {
    pub fn merge(&mut self, other: Extraction) {
        self.requests.extend(other.requests);
        self.dead_interactions.extend(other.dead_interactions);
    }
}
