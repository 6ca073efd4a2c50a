// Anchor measurement: turning trigger elements into `AnchorRect`s.
// The terminal host records each row's `[del]` button per frame; cells are
// mapped to device pixels through `CellMetrics`.

use std::collections::HashMap;

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

use crate::error::MissingAnchorError;
use crate::model::prompt::{AnchorRect, PopupPosition};
use crate::placement::POPUP_WIDTH;

/// Anything the controller can take a bounding box from at open time.
pub trait MeasureAnchor {
    fn measure(&self) -> Result<AnchorRect, MissingAnchorError>;
}

impl MeasureAnchor for AnchorRect {
    fn measure(&self) -> Result<AnchorRect, MissingAnchorError> {
        Ok(*self)
    }
}

impl MeasureAnchor for Option<AnchorRect> {
    fn measure(&self) -> Result<AnchorRect, MissingAnchorError> {
        self.ok_or(MissingAnchorError::Absent)
    }
}

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CellMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self { cell_width: 10.0, cell_height: 20.0 }
    }
}

impl CellMetrics {
    /// Replace non-positive or non-finite sizes with the defaults.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let ok = |v: f64| v.is_finite() && v > 0.0;
        Self {
            cell_width: if ok(self.cell_width) { self.cell_width } else { d.cell_width },
            cell_height: if ok(self.cell_height) { self.cell_height } else { d.cell_height },
        }
    }

    pub fn rect_to_anchor(&self, r: Rect) -> AnchorRect {
        let left = f64::from(r.x) * self.cell_width;
        AnchorRect {
            top: f64::from(r.y) * self.cell_height,
            left,
            right: left + f64::from(r.width) * self.cell_width,
            height: f64::from(r.height) * self.cell_height,
        }
    }

    /// Cell column/row of a pixel position. May be negative or past the
    /// frame; the view clamps.
    pub fn position_to_cell(&self, pos: PopupPosition) -> (i32, i32) {
        let x = (pos.left / self.cell_width).round() as i32;
        let y = (pos.top / self.cell_height).round() as i32;
        (x, y)
    }

    pub fn popup_width_cells(&self) -> u16 {
        (POPUP_WIDTH / self.cell_width).ceil().clamp(1.0, f64::from(u16::MAX)) as u16
    }
}

/// Trigger-button rectangles from the most recent frame, keyed by asset id.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    rects: HashMap<u64, Rect>,
}

impl AnchorRegistry {
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn record(&mut self, id: u64, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn rect(&self, id: u64) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<u64> {
        self.rects
            .iter()
            .find(|(_, r)| r.contains((column, row).into()))
            .map(|(id, _)| *id)
    }

    pub fn handle(&self, id: u64, metrics: CellMetrics) -> AnchorHandle<'_> {
        AnchorHandle { registry: self, id, metrics }
    }
}

/// Opaque reference to one trigger button; measured lazily by the controller.
pub struct AnchorHandle<'a> {
    registry: &'a AnchorRegistry,
    id: u64,
    metrics: CellMetrics,
}

impl MeasureAnchor for AnchorHandle<'_> {
    fn measure(&self) -> Result<AnchorRect, MissingAnchorError> {
        let rect = self
            .registry
            .rects
            .get(&self.id)
            .ok_or_else(|| MissingAnchorError::Detached(format!("asset#{}", self.id)))?;
        if rect.width == 0 || rect.height == 0 {
            return Err(MissingAnchorError::Degenerate(format!("asset#{}", self.id)));
        }
        Ok(self.metrics.rect_to_anchor(*rect))
    }
}
