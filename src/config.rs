//! Configuration for the visualizer.
//!
//! Every section has defaults matching the classic layout, so a YAML file
//! only needs the keys it wants to change.

use crate::domain::Thresholds;
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "LIFE_CONFIG";
/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "life.yaml";
/// Accepted frame rate range
pub const MIN_FPS: f64 = 0.01;
pub const MAX_FPS: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_title: String,
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub panel: PanelConfig,
    pub theme: ThemeConfig,
}

/// Grid size and initial fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Side of one cell in pixels
    pub cell_size: f32,
    /// Chance of a cell starting alive on startup and reset
    pub alive_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Target frames (and generations) per second
    pub fps: f64,
    pub overpopulation: u8,
    pub underpopulation: u8,
    pub reproduction: u8,
}

/// Side panel geometry. Horizontal offsets are relative to the panel's left edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub width: f32,
    /// When false only the reset button is shown and thresholds stay fixed
    pub adjustable_rules: bool,
    pub reset_x: f32,
    pub reset_y: f32,
    pub reset_width: f32,
    pub reset_height: f32,
    pub stepper_size: f32,
    pub stepper_x: f32,
    /// Distance between the left edges of the decrement and increment buttons
    pub stepper_gap: f32,
    pub first_rule_y: f32,
    pub rule_spacing: f32,
    /// How far above its buttons a rule label sits
    pub label_rise: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub alive: [u8; 3],
    pub background: [u8; 3],
    pub panel: [u8; 3],
    pub button: [u8; 3],
    pub button_hover: [u8; 3],
    pub text: [u8; 3],
    pub font_size: u16,
    /// Optional TTF font; macroquad's built-in font is used otherwise
    pub font_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Game of Life".to_owned(),
            grid: GridConfig::default(),
            simulation: SimulationConfig::default(),
            panel: PanelConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            cell_size: 10.0,
            alive_probability: 0.5,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let classic = Thresholds::classic();
        Self {
            fps: 10.0,
            overpopulation: classic.overpopulation,
            underpopulation: classic.underpopulation,
            reproduction: classic.reproduction,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 220.0,
            adjustable_rules: true,
            reset_x: 30.0,
            reset_y: 40.0,
            reset_width: 100.0,
            reset_height: 40.0,
            stepper_size: 30.0,
            stepper_x: 20.0,
            stepper_gap: 110.0,
            first_rule_y: 120.0,
            rule_spacing: 80.0,
            label_rise: 30.0,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            alive: [0, 255, 0],
            background: [0, 0, 0],
            panel: [50, 50, 50],
            button: [100, 100, 100],
            button_hover: [150, 150, 150],
            text: [255, 255, 255],
            font_size: 24,
            font_path: None,
        }
    }
}

impl SimulationConfig {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.overpopulation, self.underpopulation, self.reproduction)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&contents).with_context(|| format!("loading config {}", path.display()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// `$LIFE_CONFIG` if set, else `./life.yaml` if present, else defaults
    pub fn load() -> Result<Self> {
        Self::load_from(std::env::var_os(CONFIG_ENV).as_deref().map(Path::new))
    }

    /// Load from an explicit path, falling back to `./life.yaml` and then defaults
    pub fn load_from(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::info!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            log::info!("Loading config from {}", local.display());
            return Self::from_file(local);
        }

        log::info!("Using default configuration");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid.width > 0 && self.grid.height > 0,
            "grid dimensions must be non-zero, got {}x{}",
            self.grid.width,
            self.grid.height
        );
        ensure!(self.grid.cell_size > 0.0, "cell_size must be positive");
        ensure!(
            (0.0..=1.0).contains(&self.grid.alive_probability),
            "alive_probability must be within [0, 1]"
        );
        ensure!(
            (MIN_FPS..=MAX_FPS).contains(&self.simulation.fps),
            "fps must be within [{MIN_FPS}, {MAX_FPS}], got {}",
            self.simulation.fps
        );
        ensure!(
            self.simulation.thresholds().in_range(),
            "thresholds must be within [0, 8], got {:?}",
            self.simulation.thresholds()
        );
        ensure!(
            self.panel.width >= self.panel.stepper_x + self.panel.stepper_gap + self.panel.stepper_size,
            "panel width {} cannot fit the stepper row",
            self.panel.width
        );
        ensure!(self.theme.font_size > 0, "font_size must be positive");
        Ok(())
    }

    /// Width of the cell area in pixels
    pub fn grid_pixel_width(&self) -> f32 {
        self.grid.width as f32 * self.grid.cell_size
    }

    /// Window size in pixels: grid area plus side panel
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.grid_pixel_width() + self.panel.width,
            self.grid.height as f32 * self.grid.cell_size,
        )
    }
}
