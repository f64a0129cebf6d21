// Centralized configuration for simulator defaults

// ====================
// Input Defaults
// ====================
/// Default mass in kilograms, restored by reset.
pub const DEFAULT_MASS: f64 = 1.0;
/// Default height in meters.
pub const DEFAULT_HEIGHT: f64 = 1.0;
/// Default velocity in m/s.
pub const DEFAULT_VELOCITY: f64 = 0.0;
/// Earth's surface gravity in m/s².
pub const DEFAULT_GRAVITY: f64 = 9.81;

// ====================
// Gravity Presets (m/s²)
// ====================
pub const GRAVITY_EARTH: f64 = DEFAULT_GRAVITY;
pub const GRAVITY_MOON: f64 = 1.62;
pub const GRAVITY_MARS: f64 = 3.71;
pub const GRAVITY_JUPITER: f64 = 24.79;

// ====================
// Display
// ====================
/// Number of decimals used for every displayed quantity
pub const DISPLAY_DECIMALS: usize = 2;
/// Message shown next to a field holding a rejected value
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

// ====================
// Chart / History
// ====================
/// Number of energy samples retained for the live chart.
/// Oldest samples are dropped once this is exceeded.
pub const CHART_HISTORY_SAMPLES: usize = 120;
/// Width of the text chart in columns
pub const CHART_WIDTH: usize = 48;
/// Height of the text chart in rows
pub const CHART_HEIGHT: usize = 8;
/// Stable identifier of the chart, printed with every render
pub const CHART_ID: &str = "energy-chart";

// ====================
// Files
// ====================
/// Config file picked up from the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = "energy_sim.toml";
/// Where persisted settings live by default
pub const DEFAULT_SETTINGS_FILE: &str = "energy_sim_settings.json";
/// Snapshot slot used by plain save/load
pub const DEFAULT_SNAPSHOT_SLOT: &str = "default";
