use crate::app::notifier::{Notifier, SketchEvent};
use thiserror::Error;

/// Reasons a dimension update was not applied
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{candidate} is not a whole number of cells between 1 and 64")]
    OutOfRange { candidate: f64 },
    #[error("dimension left at {current}; current value re-announced")]
    NoOp { current: u32 },
}

impl ConfigError {
    /// True for the re-announce outcome, which is not a rejection
    pub fn is_no_op(&self) -> bool {
        matches!(self, ConfigError::NoOp { .. })
    }
}

/// Single authority for the number of cells per board side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    cells_per_side: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GridConfig {
    pub const MIN_CELLS: u32 = 1;
    pub const MAX_CELLS: u32 = 64;
    pub const DEFAULT_CELLS: u32 = 16;

    /// Creates a config at the default dimension without announcing it
    pub fn new() -> Self {
        Self {
            cells_per_side: Self::DEFAULT_CELLS,
        }
    }

    pub fn cells_per_side(&self) -> u32 {
        self.cells_per_side
    }

    /// Startup entry point: applies `default` and announces it
    ///
    /// # Arguments
    /// * `default` - Initial dimension, normally `DEFAULT_CELLS`
    /// * `notifier` - Hub that receives the `DimensionChanged` event
    pub fn initialize(&mut self, default: u32, notifier: &mut Notifier) -> Result<u32, ConfigError> {
        self.set_dimension(f64::from(default), notifier)
    }

    /// Validates and applies a new dimension
    ///
    /// A whole number in `[MIN_CELLS, MAX_CELLS]` replaces the current value
    /// and publishes `DimensionChanged`. Zero re-publishes the current value
    /// and reports `NoOp`. Anything else is rejected silently: the dimension
    /// stays put and nothing is published.
    ///
    /// # Returns
    /// The new dimension, or the reason it was not applied
    pub fn set_dimension(&mut self, candidate: f64, notifier: &mut Notifier) -> Result<u32, ConfigError> {
        if candidate == 0.0 {
            log::debug!("re-announcing dimension {}", self.cells_per_side);
            notifier.publish(&SketchEvent::DimensionChanged {
                cells_per_side: self.cells_per_side,
            });
            return Err(ConfigError::NoOp {
                current: self.cells_per_side,
            });
        }

        let value = Self::validate(candidate)?;
        self.cells_per_side = value;
        log::info!("grid dimension set to {value}x{value}");
        notifier.publish(&SketchEvent::DimensionChanged { cells_per_side: value });
        Ok(value)
    }

    /// Checks a candidate against the bounds without touching any state
    pub fn validate(candidate: f64) -> Result<u32, ConfigError> {
        let in_range = candidate.is_finite()
            && candidate.fract() == 0.0
            && candidate >= f64::from(Self::MIN_CELLS)
            && candidate <= f64::from(Self::MAX_CELLS);

        if in_range {
            Ok(candidate as u32)
        } else {
            Err(ConfigError::OutOfRange { candidate })
        }
    }
}

/// Converts free-text input into a candidate dimension
///
/// Blank input counts as zero (clear the board at its current size).
/// Text that is not a number becomes NaN, which `set_dimension` rejects.
pub fn parse_dimension_input(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
