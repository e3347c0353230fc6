//! Cell geometry of the navigation bar.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::ui::theme::{IndicatorStyle, Orientation, StylesheetVariant};

/// Areas occupied by one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSlot {
    pub indicator: Rect,
    pub label: Rect,
}

impl StepSlot {
    /// Pointer target for the step: its indicator and its label.
    pub fn hit_area(&self) -> Rect {
        self.indicator.union(self.label)
    }
}

/// Computed layout for every step in display order plus the connector lines
/// between neighbouring indicators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarGeometry {
    pub slots: Vec<StepSlot>,
    pub connectors: Vec<Rect>,
}

/// Width and height of a single indicator.
pub const fn indicator_size(style: IndicatorStyle) -> (u16, u16) {
    if style.is_large() { (5, 3) } else { (1, 1) }
}

/// Outer height (including borders) the bar needs for `count` steps.
pub fn preferred_height(count: usize, variant: StylesheetVariant) -> u16 {
    let (_, indicator_height) = indicator_size(variant.style);
    let content = match variant.orientation {
        Orientation::Horizontal => indicator_height + 1,
        Orientation::Vertical => {
            let count = u16::try_from(count).unwrap_or(u16::MAX);
            count.saturating_mul(indicator_height + 1).saturating_sub(1)
        }
    };
    content.saturating_add(2)
}

/// Lays out `count` steps inside `inner`.
pub fn compute(inner: Rect, count: usize, variant: StylesheetVariant) -> BarGeometry {
    if count == 0 || inner.is_empty() {
        return BarGeometry::default();
    }
    match variant.orientation {
        Orientation::Horizontal => horizontal(inner, count, variant.style),
        Orientation::Vertical => vertical(inner, count, variant.style),
    }
}

fn horizontal(inner: Rect, count: usize, style: IndicatorStyle) -> BarGeometry {
    let (indicator_width, indicator_height) = indicator_size(style);
    let denominator = u32::try_from(count).unwrap_or(u32::MAX);
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, denominator); count]).split(inner);

    let slots: Vec<StepSlot> = columns
        .iter()
        .map(|column| {
            let width = indicator_width.min(column.width);
            let indicator = Rect {
                x: column.x + (column.width - width) / 2,
                y: inner.y,
                width,
                height: indicator_height,
            }
            .intersection(inner);
            let label = Rect {
                x: column.x,
                y: inner.y + indicator_height,
                width: column.width,
                height: 1,
            }
            .intersection(inner);
            StepSlot { indicator, label }
        })
        .collect();

    let line_y = inner.y + indicator_height / 2;
    let connectors = slots
        .windows(2)
        .filter_map(|pair| {
            let start = pair[0].indicator.right();
            let end = pair[1].indicator.x;
            (end > start).then(|| Rect::new(start, line_y, end - start, 1).intersection(inner))
        })
        .collect();

    BarGeometry { slots, connectors }
}

fn vertical(inner: Rect, count: usize, style: IndicatorStyle) -> BarGeometry {
    let (indicator_width, indicator_height) = indicator_size(style);
    let pitch = indicator_height + 1;
    let label_x = inner.x + indicator_width + 1;

    let mut slots = Vec::with_capacity(count);
    for position in 0..count {
        let offset = u16::try_from(position).unwrap_or(u16::MAX).saturating_mul(pitch);
        let y = inner.y.saturating_add(offset);
        if y >= inner.bottom() {
            break;
        }
        let indicator = Rect::new(inner.x, y, indicator_width, indicator_height).intersection(inner);
        let label = Rect::new(
            label_x,
            y + indicator_height / 2,
            inner.right().saturating_sub(label_x),
            1,
        )
        .intersection(inner);
        slots.push(StepSlot { indicator, label });
    }

    let line_x = inner.x + indicator_width / 2;
    let connectors = slots
        .windows(2)
        .filter_map(|pair| {
            let start = pair[0].indicator.bottom();
            let end = pair[1].indicator.y;
            (end > start).then(|| Rect::new(line_x, start, 1, end - start).intersection(inner))
        })
        .collect();

    BarGeometry { slots, connectors }
}
