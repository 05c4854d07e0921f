use anyhow::{Context, Result, bail};
use nestplot::interior::AnchorStrategyConfig;
use nestplot::render::{Color, PageFrame, PageOrientation, RenderTheme};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::io::cli::InputVariant;

/// Bin size of slice layouts, which do not carry one themselves
pub const SLICES_BIN_SIZE: (f64, f64) = (2000.0, 1200.0);

/// Configuration of a rendering run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    /// Algorithm used to anchor labels inside the placed pieces
    pub anchor_strategy: AnchorStrategyConfig,
    pub page: PageConfig,
    pub theme: RenderTheme,
    /// Computes bins on all cores, pages are still written in bin order
    pub parallel: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig::for_variant(InputVariant::Shapes)
    }
}

impl PlotConfig {
    pub fn for_variant(variant: InputVariant) -> Self {
        match variant {
            InputVariant::Shapes => PlotConfig {
                anchor_strategy: AnchorStrategyConfig::erosion(10.0),
                page: PageConfig::default(),
                theme: RenderTheme {
                    bin_stroke: Color::BLUE,
                    ..RenderTheme::default()
                },
                parallel: false,
            },
            InputVariant::Slices => PlotConfig {
                anchor_strategy: AnchorStrategyConfig::pole(1.0),
                page: PageConfig {
                    orientation: PageOrientation::Portrait,
                    margin: 10.0,
                    bin_width: Some(SLICES_BIN_SIZE.0),
                    bin_height: Some(SLICES_BIN_SIZE.1),
                },
                theme: RenderTheme::default(),
                parallel: false,
            },
        }
    }

    /// Config from (partial) JSON, fields absent from `json` keep the defaults of `variant`.
    /// The sections `page` and `theme` are merged field by field, `anchor_strategy` is replaced as a whole.
    pub fn from_json(json: Value, variant: InputVariant) -> Result<Self> {
        let mut merged = serde_json::to_value(PlotConfig::for_variant(variant))?;
        match (&mut merged, json) {
            (Value::Object(defaults), Value::Object(overrides)) => {
                for (key, value) in overrides {
                    match (defaults.get_mut(&key), value) {
                        (Some(Value::Object(section)), Value::Object(fields))
                            if key == "page" || key == "theme" =>
                        {
                            section.extend(fields)
                        }
                        (_, value) => {
                            defaults.insert(key, value);
                        }
                    }
                }
            }
            (_, json) => bail!("config must be a JSON object, got: {json}"),
        }
        serde_json::from_value(merged).context("incorrect config file format")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub orientation: PageOrientation,
    pub margin: f64,
    /// Overrides the bin width of the input
    pub bin_width: Option<f64>,
    /// Overrides the bin height of the input
    pub bin_height: Option<f64>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            orientation: PageOrientation::Landscape,
            margin: 0.0,
            bin_width: None,
            bin_height: None,
        }
    }
}

impl PageConfig {
    /// Frame for bins of `input_size`, unless the configuration overrides it
    pub fn frame(&self, input_size: Option<(f64, f64)>) -> Result<PageFrame> {
        let width = self
            .bin_width
            .or(input_size.map(|(w, _)| w))
            .context("bin width is neither configured nor part of the input")?;
        let height = self
            .bin_height
            .or(input_size.map(|(_, h)| h))
            .context("bin height is neither configured nor part of the input")?;
        PageFrame::new(width, height, self.margin, self.orientation)
    }
}
