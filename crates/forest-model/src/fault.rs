//! Fault Classes and Advisories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::NUM_CLASSES;

/// Class names indexed by class index
pub const CLASS_NAMES: [&str; NUM_CLASSES] = [
    "Normal",
    "Open_Circuit",
    "Partial_Shading",
    "Short_Circuit",
];

/// Operating state of a panel as detected by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FaultClass {
    /// No fault detected
    Normal,
    /// Broken connection, voltage present but no current
    #[serde(rename = "Open_Circuit")]
    OpenCircuit,
    /// Part of the panel shadowed
    #[serde(rename = "Partial_Shading")]
    PartialShading,
    /// Output shorted, high current at near-zero voltage
    #[serde(rename = "Short_Circuit")]
    ShortCircuit,
}

/// How urgently a detected state needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
    Danger,
}

impl Severity {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FaultClass {
    /// All classes in index order
    pub const ALL: [FaultClass; NUM_CLASSES] = [
        FaultClass::Normal,
        FaultClass::OpenCircuit,
        FaultClass::PartialShading,
        FaultClass::ShortCircuit,
    ];

    /// Class index as emitted by the trees
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Class for an index, if in range
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_CLASSES {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Get string representation
    pub const fn as_str(self) -> &'static str {
        CLASS_NAMES[self.index()]
    }

    /// Whether this class denotes a fault
    pub const fn is_fault(self) -> bool {
        !matches!(self, FaultClass::Normal)
    }

    /// Short status line
    pub fn message(&self) -> &'static str {
        match self {
            FaultClass::Normal => "System operating normally",
            FaultClass::OpenCircuit => "Open circuit fault detected",
            FaultClass::PartialShading => "Partial shading detected",
            FaultClass::ShortCircuit => "Short circuit detected",
        }
    }

    /// Get recommended action
    pub fn recommended_action(&self) -> &'static str {
        match self {
            FaultClass::Normal => "No action required. Continue monitoring.",
            FaultClass::OpenCircuit => {
                "Check all cable connections. Inspect junction box. Look for broken wires or loose terminals. Call technician if issue persists."
            }
            FaultClass::PartialShading => {
                "Remove obstacles (trees, buildings, debris) blocking sunlight from panel. Check for shadows during peak sun hours."
            }
            FaultClass::ShortCircuit => {
                "Immediately disconnect the panel. Fire hazard, do not touch. Call a professional electrician and check for melted wires or damaged cells."
            }
        }
    }

    /// Urgency of this state
    pub fn severity(&self) -> Severity {
        match self {
            FaultClass::Normal => Severity::Info,
            FaultClass::PartialShading => Severity::Warning,
            FaultClass::OpenCircuit => Severity::Critical,
            FaultClass::ShortCircuit => Severity::Danger,
        }
    }
}

impl fmt::Display for FaultClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a class name is not one of [`CLASS_NAMES`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown fault class: {0}")]
pub struct UnknownFaultClass(pub String);

impl FromStr for FaultClass {
    type Err = UnknownFaultClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaultClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| UnknownFaultClass(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, class) in FaultClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
            assert_eq!(FaultClass::from_index(i), Some(*class));
            assert_eq!(class.as_str(), CLASS_NAMES[i]);
        }
        assert_eq!(FaultClass::from_index(NUM_CLASSES), None);
    }

    #[test]
    fn test_only_normal_is_healthy() {
        assert!(!FaultClass::Normal.is_fault());
        assert!(FaultClass::OpenCircuit.is_fault());
        assert!(FaultClass::PartialShading.is_fault());
        assert!(FaultClass::ShortCircuit.is_fault());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Short_Circuit".parse(), Ok(FaultClass::ShortCircuit));
        assert_eq!(
            "Dust_Accumulation".parse::<FaultClass>(),
            Err(UnknownFaultClass("Dust_Accumulation".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_class_names() {
        let json = serde_json::to_string(&FaultClass::PartialShading).unwrap();
        assert_eq!(json, "\"Partial_Shading\"");
        let back: FaultClass = serde_json::from_str("\"Open_Circuit\"").unwrap();
        assert_eq!(back, FaultClass::OpenCircuit);
        assert_eq!(serde_json::to_string(&Severity::Danger).unwrap(), "\"danger\"");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(FaultClass::ShortCircuit.severity() > FaultClass::OpenCircuit.severity());
        assert!(FaultClass::OpenCircuit.severity() > FaultClass::PartialShading.severity());
        assert_eq!(FaultClass::Normal.severity(), Severity::Info);
    }
}
