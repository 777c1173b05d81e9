//! Simulation settings and preferences
//!
//! Persisted as JSON next to the binary (or wherever the caller points).

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Particle trail size for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 5,
            QualityPreset::Medium => TOTAL_PARTICLES,
            QualityPreset::High => TOTAL_PARTICLES * 2,
        }
    }
}

impl FromStr for QualityPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(QualityPreset::Low),
            "medium" | "med" => Ok(QualityPreset::Medium),
            "high" => Ok(QualityPreset::High),
            _ => Err(Error::UnknownPreset(s.to_string())),
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Particle trail behind the dot
    pub particles: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Timing ===
    /// Sleep away the rest of each frame's budget
    pub cap_frame_rate: bool,
    /// Frame rate cap
    pub target_fps: u32,
    /// Treat velocity as pixels per second, scaled by frame time
    pub frame_independent: bool,

    // === Motion ===
    /// Velocity change per key press (pixels per tick)
    pub dot_velocity: i32,
    /// Velocity change per key press in frame independent mode (pixels per second)
    pub timed_velocity: i32,
    /// Collide with the round silhouette instead of the bounding box
    pub per_pixel_collision: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            particles: true,

            show_fps: true,

            cap_frame_rate: true,
            target_fps: SCREEN_FPS,
            frame_independent: false,

            dot_velocity: DOT_VEL,
            timed_velocity: DOT_VEL_PER_SEC,
            per_pixel_collision: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle count
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Frame rate to cap at, if capping is enabled
    pub fn frame_cap(&self) -> Option<u32> {
        (self.cap_frame_rate && self.target_fps > 0).then_some(self.target_fps)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
