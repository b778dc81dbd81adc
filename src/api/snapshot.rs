use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationClock, TickTimer};
use crate::core::{AxisBounds, BarGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;
use crate::render::Renderer;

use super::{ChartTheme, ChartView};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable chart state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub theme: ChartTheme,
    pub axis: Option<AxisBounds>,
    pub clock: AnimationClock,
    pub animating: bool,
    pub bars: Vec<BarGeometry>,
    pub tooltip: TooltipState,
    pub metadata: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl<R: Renderer, T: TickTimer> ChartView<R, T> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let mut metadata = IndexMap::new();
        metadata.insert("title".to_owned(), self.config.title.clone());
        metadata.insert("y_axis_label".to_owned(), self.config.y_axis_label.clone());

        let geometry = self.geometry();
        ChartSnapshot {
            viewport: self.config.viewport,
            theme: self.config.theme,
            axis: geometry.map(|geometry| geometry.axis()),
            clock: self.clock,
            animating: self.is_animating(),
            bars: geometry
                .map(|geometry| geometry.bars().to_vec())
                .unwrap_or_default(),
            tooltip: self.tooltip.state(),
            metadata,
        }
    }
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
