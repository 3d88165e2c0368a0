//! Chakra categories and resolution.
//!
//! A chakra is selected by its wound name or, when the name is not
//! recognized, by its solfeggio frequency label ("396 Hz"). A recognized
//! name always wins over a conflicting label.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The seven chakra categories driving palette and geometry selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Chakra {
    Root,
    Sacral,
    SolarPlexus,
    Heart,
    Throat,
    ThirdEye,
    Crown,
}

impl Chakra {
    /// All chakras, in ascending frequency order.
    pub const ALL: [Self; 7] = [
        Self::Root,
        Self::Sacral,
        Self::SolarPlexus,
        Self::Heart,
        Self::Throat,
        Self::ThirdEye,
        Self::Crown,
    ];

    /// Canonical lowercase name, as used in wound reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Sacral => "sacral",
            Self::SolarPlexus => "solar_plexus",
            Self::Heart => "heart",
            Self::Throat => "throat",
            Self::ThirdEye => "third_eye",
            Self::Crown => "crown",
        }
    }

    /// Parse a chakra from its wound name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "root" => Some(Self::Root),
            "sacral" => Some(Self::Sacral),
            "solar_plexus" => Some(Self::SolarPlexus),
            "heart" => Some(Self::Heart),
            "throat" => Some(Self::Throat),
            "third_eye" => Some(Self::ThirdEye),
            "crown" => Some(Self::Crown),
            _ => None,
        }
    }

    /// The solfeggio frequency associated with this chakra, in Hz.
    pub const fn frequency_hz(&self) -> u32 {
        match self {
            Self::Root => 396,
            Self::Sacral => 417,
            Self::SolarPlexus => 528,
            Self::Heart => 639,
            Self::Throat => 741,
            Self::ThirdEye => 852,
            Self::Crown => 963,
        }
    }

    /// Frequency label as used in wound reports ("396 Hz").
    pub fn frequency_label(&self) -> String {
        format!("{} Hz", self.frequency_hz())
    }

    /// Parse a chakra from a frequency label ("417 Hz" -> Sacral).
    pub fn from_frequency_label(label: &str) -> Option<Self> {
        Self::ALL.iter().find(|c| c.frequency_label() == label).copied()
    }

    /// Resolve a chakra from a wound name, falling back to a frequency label.
    ///
    /// A recognized wound name always wins over a conflicting label; an
    /// unrecognized name silently yields to a recognized label. When both
    /// fail, the error names the wound that was asked for.
    pub fn resolve(wound: &str, frequency: Option<&str>) -> Result<Self> {
        if let Some(chakra) = Self::from_name(wound) {
            return Ok(chakra);
        }
        frequency
            .and_then(Self::from_frequency_label)
            .ok_or_else(|| Error::UnknownWound(wound.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for chakra in Chakra::ALL {
            assert_eq!(Chakra::from_name(chakra.name()), Some(chakra));
        }
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Chakra::from_name("Root"), Some(Chakra::Root));
        assert_eq!(Chakra::from_name("SOLAR_PLEXUS"), Some(Chakra::SolarPlexus));
        assert_eq!(Chakra::from_name("Third_Eye"), Some(Chakra::ThirdEye));
    }

    #[test]
    fn test_label_roundtrip() {
        for chakra in Chakra::ALL {
            assert_eq!(
                Chakra::from_frequency_label(&chakra.frequency_label()),
                Some(chakra)
            );
        }
    }

    #[test]
    fn test_resolve_name_wins_over_label() {
        // An explicit recognized wound beats a conflicting frequency label.
        let chakra = Chakra::resolve("root", Some("417 Hz")).unwrap();
        assert_eq!(chakra, Chakra::Root);
    }

    #[test]
    fn test_resolve_frequency_fallback() {
        let chakra = Chakra::resolve("anything", Some("417 Hz")).unwrap();
        assert_eq!(chakra, Chakra::Sacral);
    }

    #[test]
    fn test_resolve_rejects_unknown() {
        let err = Chakra::resolve("invalid_wound", Some("999 Hz")).unwrap_err();
        assert!(matches!(err, Error::UnknownWound(ref w) if w == "invalid_wound"));

        let err = Chakra::resolve("invalid_wound", None).unwrap_err();
        assert!(err.to_string().contains("invalid_wound"));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Chakra::SolarPlexus).unwrap();
        assert_eq!(json, "\"solar_plexus\"");
        let back: Chakra = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Chakra::SolarPlexus);
    }
}
