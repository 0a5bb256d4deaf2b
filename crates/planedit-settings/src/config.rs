//! Editor configuration
//!
//! Preferences are organized into sections:
//! - Display (length unit, decimals shown in point lists)
//! - Transform (text handling, resize defaults)
//! - Points (size of new rooms)
//!
//! Files are JSON or TOML, chosen by extension. Missing keys fall back to
//! their defaults, so a partial file is a valid configuration.

use std::path::{Path, PathBuf};

use planedit_core::{EditError, LengthUnit};
use planedit_editor::builders::resize;
use planedit_editor::{Bounds, FixPoint, NewRoomCommand, PointsModel, ResizeMeasure, Transform};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

/// Serializes a type through its `Display` / `FromStr` pair.
mod as_string {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Unit lengths are shown and entered in
    pub unit: LengthUnit,
    /// Decimals shown for lengths; the unit's own default if unset
    pub decimals: Option<usize>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            unit: LengthUnit::Centimeter,
            decimals: None,
        }
    }
}

impl DisplaySettings {
    pub fn effective_decimals(&self) -> usize {
        self.decimals.unwrap_or_else(|| self.unit.default_decimals())
    }
}

/// Transform settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSettings {
    /// Rotate and mirror label angles with the objects
    pub rotate_text: bool,
    /// Turn labels that would read upside down
    pub adjust_text: bool,
    /// Point kept in place by the resize dialog
    #[serde(with = "as_string")]
    pub fix_point: FixPoint,
    /// How the resize dialog expresses sizes
    #[serde(with = "as_string")]
    pub measure: ResizeMeasure,
    /// Delay before a dialog change is applied to the plan, in milliseconds
    pub apply_delay_ms: u64,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            rotate_text: true,
            adjust_text: true,
            fix_point: FixPoint::default(),
            measure: ResizeMeasure::default(),
            apply_delay_ms: 250,
        }
    }
}

/// Points editing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsSettings {
    /// Side of the square room created from the points editor, in centimeters
    pub new_room_size: f32,
}

impl Default for PointsSettings {
    fn default() -> Self {
        Self {
            new_room_size: NewRoomCommand::default_side(LengthUnit::Centimeter),
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    pub display: DisplaySettings,
    pub transform: TransformSettings,
    pub points: PointsSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("(none)").to_string(),
            )),
        }
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for a user working in `unit`, including the matching
    /// new room size.
    pub fn for_unit(unit: LengthUnit) -> Self {
        Self {
            display: DisplaySettings {
                unit,
                decimals: None,
            },
            points: PointsSettings {
                new_room_size: NewRoomCommand::default_side(unit),
            },
            ..Self::default()
        }
    }

    /// Location of the config file in the platform config directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no config directory on this platform".to_string())
        })?;
        path.push("planedit");
        path.push("config.toml");
        Ok(path)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Loads the file at [`EditorConfig::default_path`], or returns the
    /// defaults if it does not exist yet.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::of(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let size = self.points.new_room_size;
        if !size.is_finite() || size <= 0.0 {
            return Err(SettingsError::invalid(
                "points.new_room_size",
                format!("must be > 0, got {}", size),
            ));
        }

        if self.display.decimals.is_some_and(|d| d > 6) {
            return Err(SettingsError::invalid("display.decimals", "must be at most 6"));
        }

        Ok(())
    }

    /// Overlays the sections of `other` that differ from the defaults.
    pub fn merge(&mut self, other: &EditorConfig) {
        let defaults = EditorConfig::default();
        if other.display != defaults.display {
            self.display = other.display.clone();
        }
        if other.transform != defaults.transform {
            self.transform = other.transform.clone();
        }
        if other.points != defaults.points && other.points.new_room_size > 0.0 {
            self.points = other.points.clone();
        }
    }

    /// A points model showing lengths the way this config asks for.
    pub fn points_model(&self) -> PointsModel {
        let mut model = PointsModel::new(self.display.unit);
        model.set_decimals(self.display.effective_decimals());
        model
    }

    pub fn new_room_command(&self) -> Result<NewRoomCommand, EditError> {
        NewRoomCommand::new(self.points.new_room_size)
    }

    /// The resize matrix for `bounds`, with `width` and `height` expressed
    /// in the configured measure around the configured fix point.
    pub fn resize(&self, bounds: &Bounds, width: f32, height: f32) -> Transform {
        resize(
            bounds,
            self.transform.measure,
            width,
            height,
            self.transform.fix_point,
        )
    }
}
