//! Viewer configuration

use anyhow::{bail, Result};
use orrery_core::{CameraPose, NavigationConfig, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::catalog::ObjectClass;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// Navigable objects, in hotkey order
    #[serde(default, rename = "object")]
    pub objects: Vec<ObjectConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_title() -> String {
    "Orrery".to_string()
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Initial camera placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_camera_position")]
    pub position: [f32; 3],
    #[serde(default)]
    pub look_at: [f32; 3],
}

fn default_camera_position() -> [f32; 3] {
    [0.0, 0.0, 100.0]
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: default_camera_position(),
            look_at: [0.0; 3],
        }
    }
}

impl CameraConfig {
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(Vec3::from_array(self.position), Vec3::from_array(self.look_at))
    }
}

/// One navigable object in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectConfig {
    pub id: String,
    pub name: String,
    pub class: ObjectClass,
    pub position: [f32; 3],
    /// Sphere radius
    #[serde(default = "default_size")]
    pub size: f32,
}

fn default_size() -> f32 {
    5.0
}

impl ObjectConfig {
    fn new(id: &str, name: &str, class: ObjectClass, position: [f32; 3], size: f32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            class,
            position,
            size,
        }
    }
}

/// Built-in scene used when no objects are configured
pub fn demo_objects() -> Vec<ObjectConfig> {
    vec![
        ObjectConfig::new("sol", "Sol", ObjectClass::Star, [0.0, 0.0, 0.0], 12.0),
        ObjectConfig::new("terra", "Terra", ObjectClass::Planet, [60.0, 0.0, -20.0], 4.0),
        ObjectConfig::new("kepler", "Kepler-22b", ObjectClass::Planet, [-90.0, 5.0, 40.0], 6.0),
        ObjectConfig::new("veil", "Veil Nebula", ObjectClass::Nebula, [-120.0, 30.0, -80.0], 20.0),
        ObjectConfig::new("abyss", "Abyss", ObjectClass::BlackHole, [150.0, -20.0, -150.0], 8.0),
        ObjectConfig::new("outpost", "Outpost Meridian", ObjectClass::SpaceStation, [-60.0, 10.0, 90.0], 3.0),
        ObjectConfig::new("far_star", "Distant Star", ObjectClass::Star, [400.0, 50.0, -300.0], 10.0),
    ]
}

impl Config {
    /// Reject object lists the scene cannot represent
    pub fn validate(&self) -> Result<()> {
        self.navigation.validate()?;

        let mut ids = HashSet::new();
        for object in &self.objects {
            if !ids.insert(object.id.as_str()) {
                bail!("Duplicate object id '{}'", object.id);
            }
            if !(object.size.is_finite() && object.size > 0.0) {
                bail!("Object '{}' must have a positive size", object.id);
            }
            if !object.position.iter().all(|c| c.is_finite()) {
                bail!("Object '{}' has a non-finite position", object.id);
            }
        }
        Ok(())
    }

    fn with_demo_objects(mut self) -> Self {
        if self.objects.is_empty() {
            self.objects = demo_objects();
        }
        self
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<Config> {
    let config = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        config
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Config::default()
    };

    let config = config.with_demo_objects();
    config.validate()?;
    Ok(config)
}

/// Save default configuration to file
pub fn save_default_config(path: &Path) -> Result<()> {
    let config = Config::default().with_demo_objects();
    let content = toml::to_string_pretty(&config)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), "Saved default configuration");
    Ok(())
}
