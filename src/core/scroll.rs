use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::core::hero_error::HeroError;

/// Anything that can report the current scroll progress in `[0, 1]`.
pub trait ProgressSource: Send + Sync + 'static {
    fn progress(&self) -> f32;
}

/// A progress source pinned to a constant value.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedProgress(pub f32);

impl ProgressSource for FixedProgress {
    fn progress(&self) -> f32 {
        self.0.clamp(0.0, 1.0)
    }
}

/// A point along an element or the viewport, as used in scroll anchors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    /// Fraction of the length: `start` is 0, `center` 0.5, `end` 1.
    Fraction(f32),
    Pixels(f32),
}

impl Edge {
    pub fn resolve(&self, length: f32) -> f32 {
        match self {
            Edge::Fraction(f) => f * length,
            Edge::Pixels(px) => *px,
        }
    }

    fn parse(token: &str) -> Result<Self, HeroError> {
        let parsed = match token {
            "start" => Some(Edge::Fraction(0.0)),
            "center" => Some(Edge::Fraction(0.5)),
            "end" => Some(Edge::Fraction(1.0)),
            _ => {
                if let Some(px) = token.strip_suffix("px") {
                    px.parse::<f32>().ok().map(Edge::Pixels)
                } else if let Some(percent) = token.strip_suffix('%') {
                    percent.parse::<f32>().ok().map(|p| Edge::Fraction(p / 100.0))
                } else {
                    token.parse::<f32>().ok().map(Edge::Fraction)
                }
            }
        };

        match parsed {
            Some(Edge::Fraction(v)) | Some(Edge::Pixels(v)) if !v.is_finite() => {
                Err(HeroError::InvalidOffset(format!("'{}' is not finite", token)))
            }
            Some(edge) => Ok(edge),
            None => Err(HeroError::InvalidOffset(format!("unrecognised edge '{}'", token))),
        }
    }
}

/// Where a point on the tracked container meets a point on the viewport,
/// written as `"<container edge> <viewport edge>"`, e.g. `"end start"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub struct ScrollOffset {
    pub target: Edge,
    pub viewport: Edge,
}

impl ScrollOffset {
    pub const START_START: ScrollOffset = ScrollOffset {
        target: Edge::Fraction(0.0),
        viewport: Edge::Fraction(0.0),
    };
    pub const END_START: ScrollOffset = ScrollOffset {
        target: Edge::Fraction(1.0),
        viewport: Edge::Fraction(0.0),
    };

    pub fn parse(text: &str) -> Result<Self, HeroError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [single] => {
                let edge = Edge::parse(single)?;
                Ok(ScrollOffset { target: edge, viewport: edge })
            }
            [target, viewport] => Ok(ScrollOffset {
                target: Edge::parse(target)?,
                viewport: Edge::parse(viewport)?,
            }),
            _ => Err(HeroError::InvalidOffset(format!("expected one or two edges, got '{}'", text))),
        }
    }

    /// Scroll position at which this anchor is reached.
    pub fn scroll_position(&self, container: &ScrollContainer, viewport_height: f32) -> f32 {
        container.top + self.target.resolve(container.height) - self.viewport.resolve(viewport_height)
    }
}

impl TryFrom<String> for ScrollOffset {
    type Error = HeroError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ScrollOffset::parse(&value)
    }
}

impl From<ScrollOffset> for String {
    fn from(offset: ScrollOffset) -> Self {
        fn edge(e: Edge) -> String {
            match e {
                Edge::Fraction(f) if f == 0.0 => "start".to_string(),
                Edge::Fraction(f) if f == 0.5 => "center".to_string(),
                Edge::Fraction(f) if f == 1.0 => "end".to_string(),
                Edge::Fraction(f) => format!("{}%", f * 100.0),
                Edge::Pixels(px) => format!("{}px", px),
            }
        }
        format!("{} {}", edge(offset.target), edge(offset.viewport))
    }
}

/// Vertical extent of the tracked container, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollContainer {
    pub top: f32,
    pub height: f32,
}

/// Virtual page scroll state. The hero container sits somewhere on a page taller
/// than the viewport; scrolling moves the viewport down the page.
#[derive(Resource, Debug, Clone)]
pub struct ScrollTracker {
    pub container: Option<ScrollContainer>,
    pub offsets: [ScrollOffset; 2],
    pub page_height: f32,
    viewport_height: f32,
    scroll_y: f32,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        ScrollTracker {
            container: None,
            offsets: [ScrollOffset::START_START, ScrollOffset::END_START],
            page_height: 0.0,
            viewport_height: 0.0,
            scroll_y: 0.0,
        }
    }
}

impl ScrollTracker {
    pub fn new(container: ScrollContainer, offsets: [ScrollOffset; 2], page_height: f32, viewport_height: f32) -> Self {
        ScrollTracker {
            container: Some(container),
            offsets,
            page_height,
            viewport_height,
            scroll_y: 0.0,
        }
    }

    /// Tracker with no container laid out yet; reads 0 until the first layout.
    pub fn with_offsets(offsets: [ScrollOffset; 2]) -> Self {
        ScrollTracker { offsets, ..default() }
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn max_scroll(&self) -> f32 {
        (self.page_height - self.viewport_height).max(0.0)
    }

    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = if y.is_finite() { y.clamp(0.0, self.max_scroll()) } else { 0.0 };
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.scroll_y + delta);
    }

    /// Layout change: container and page sizes are expressed in viewport heights,
    /// so they rescale with the window. The scroll fraction is kept.
    ///
    /// Zero or non-finite heights (a minimised window) leave the last layout in place.
    pub fn relayout(&mut self, viewport_height: f32, container_vh: f32, page_vh: f32) {
        if !(viewport_height.is_finite() && viewport_height > 0.0) {
            return;
        }
        let fraction = if self.max_scroll() > 0.0 { self.scroll_y / self.max_scroll() } else { 0.0 };
        self.viewport_height = viewport_height.max(0.0);
        self.page_height = page_vh * self.viewport_height;
        self.container = Some(ScrollContainer { top: 0.0, height: container_vh * self.viewport_height });
        self.scroll_to(fraction * self.max_scroll());
    }
}

impl ProgressSource for ScrollTracker {
    fn progress(&self) -> f32 {
        let Some(container) = &self.container else {
            return 0.0;
        };
        let start = self.offsets[0].scroll_position(container, self.viewport_height);
        let end = self.offsets[1].scroll_position(container, self.viewport_height);

        if end == start {
            return if self.scroll_y < start { 0.0 } else { 1.0 };
        }
        ((self.scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }
}
