//! Solfeggio frequency lookup - frequency to chakra with practice metadata.
//!
//! The translator's lookup table: each of the seven solfeggio frequencies
//! maps to a chakra, a breathing exercise, and a one-line visualization.

use serde::Serialize;

use crate::chakra::Chakra;
use crate::{Error, Result};

/// The solfeggio frequencies, in Hz, ascending with the chakras.
pub const SOLFEGGIO_HZ: [u32; 7] = [396, 417, 528, 639, 741, 852, 963];

/// A breathing exercise associated with a chakra.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BreathPattern {
    /// Inhale length, in counts.
    pub inhale: u32,
    /// Breath hold after the inhale, in counts.
    pub hold: u32,
    /// Exhale length, in counts.
    pub exhale: u32,
    /// Name of the technique.
    pub technique: &'static str,
}

/// Everything the lookup table knows about one frequency.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FrequencyMapping {
    pub hz: u32,
    pub chakra: Chakra,
    pub breath: BreathPattern,
    pub visualization: &'static str,
}

/// Look up the chakra mapping for a frequency.
///
/// Only the exact solfeggio frequencies are supported; anything else is an
/// [`Error::UnknownFrequency`].
pub fn lookup(hz: u32) -> Result<FrequencyMapping> {
    let chakra = Chakra::ALL
        .iter()
        .copied()
        .find(|c| c.frequency_hz() == hz)
        .ok_or(Error::UnknownFrequency(hz))?;

    Ok(FrequencyMapping {
        hz,
        chakra,
        breath: breath_pattern(chakra),
        visualization: visualization(chakra),
    })
}

/// The breathing pattern practiced at a chakra's frequency.
pub const fn breath_pattern(chakra: Chakra) -> BreathPattern {
    match chakra {
        Chakra::Root => BreathPattern {
            inhale: 6,
            hold: 2,
            exhale: 8,
            technique: "Deep Belly Breathing",
        },
        Chakra::Sacral => BreathPattern {
            inhale: 5,
            hold: 2,
            exhale: 7,
            technique: "Pelvic Expansion Breathing",
        },
        Chakra::SolarPlexus => BreathPattern {
            inhale: 2,
            hold: 0,
            exhale: 2,
            technique: "Fire Breath",
        },
        Chakra::Heart => BreathPattern {
            inhale: 5,
            hold: 5,
            exhale: 5,
            technique: "Heart-Centered Breathing",
        },
        Chakra::Throat => BreathPattern {
            inhale: 4,
            hold: 0,
            exhale: 8,
            technique: "Resonant Humming",
        },
        Chakra::ThirdEye => BreathPattern {
            inhale: 4,
            hold: 4,
            exhale: 4,
            technique: "Alternate Nostril Breathing",
        },
        Chakra::Crown => BreathPattern {
            inhale: 7,
            hold: 3,
            exhale: 9,
            technique: "Crown Channeling Breath",
        },
    }
}

/// Guided visualization for a chakra.
pub const fn visualization(chakra: Chakra) -> &'static str {
    match chakra {
        Chakra::Root => "Red earth energy rising from the ground",
        Chakra::Sacral => "Orange water flowing through the hips",
        Chakra::SolarPlexus => "Yellow sun radiating from the core",
        Chakra::Heart => "Green light expanding from the chest",
        Chakra::Throat => "Blue wave vibrating in the throat",
        Chakra::ThirdEye => "Indigo light between the brows",
        Chakra::Crown => "Violet light opening above the head",
    }
}
