//! Panel rendering configuration.
//!
//! Configuration is plain YAML (JSON works too, being a YAML subset). Every
//! key is optional:
//!
//! ```yaml
//! limits:
//!   maxPropObjectKeys: 3
//!   maxPropArrayLength: 3
//!   maxPropStringLength: 50
//! border: light        # none | ascii | light | heavy | double | rounded
//! width: 100
//! notice: No propTypes defined!
//! ```

use proptable::{RenderLimits, NO_PROPERTIES_NOTICE};
use serde::{Deserialize, Serialize};

use crate::decorator::BorderStyle;
use crate::error::{RenderError, Result};

/// Default total table width in terminal columns.
pub const DEFAULT_WIDTH: usize = 100;

/// How a props table is rendered to text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Limits for default values. A payload's own `maxProp*` keys win; these
    /// fill in whatever it leaves out.
    pub limits: RenderLimits,
    /// Border drawn around and between cells.
    pub border: BorderStyle,
    /// Total width available for the table.
    pub width: usize,
    /// Text shown when a type has no visible properties.
    pub notice: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            limits: RenderLimits::default(),
            border: BorderStyle::Light,
            width: DEFAULT_WIDTH,
            notice: NO_PROPERTIES_NOTICE.to_string(),
        }
    }
}

impl PanelConfig {
    /// Parses and validates a YAML configuration.
    ///
    /// ```rust
    /// use proptable_render::{BorderStyle, PanelConfig};
    ///
    /// let config = PanelConfig::from_yaml("border: ascii\nwidth: 60").unwrap();
    /// assert_eq!(config.border, BorderStyle::Ascii);
    /// assert_eq!(config.width, 60);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PanelConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(RenderError::InvalidConfig(
                "width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = notice.into();
        self
    }
}
