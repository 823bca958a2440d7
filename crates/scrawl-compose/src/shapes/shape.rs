// Imports
use super::{ArrowGeometry, Line};
use crate::ext::AabbExt;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The kind of a shape.
///
/// This enumeration doubles as the editor's tool list: dragging out a
/// selection rubber-band creates a shape just like the drawing tools do.
#[derive(
    Eq,
    PartialEq,
    Clone,
    Copy,
    Debug,
    Serialize,
    Deserialize,
    PartialOrd,
    Ord,
    Hash,
    num_derive::FromPrimitive,
    num_derive::ToPrimitive,
)]
#[serde(rename = "shape_kind")]
pub enum ShapeKind {
    #[serde(rename = "rectangle")]
    /// A rectangle.
    Rectangle,
    #[serde(rename = "ellipse")]
    /// An ellipse.
    Ellipse,
    #[serde(rename = "arrow")]
    /// An arrow.
    Arrow,
    #[serde(rename = "text")]
    /// A text box.
    Text,
    #[serde(rename = "selection")]
    /// A selection rubber-band.
    Selection,
}

impl Default for ShapeKind {
    fn default() -> Self {
        Self::Selection
    }
}

impl TryFrom<u32> for ShapeKind {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u32(value).ok_or_else(|| {
            anyhow::anyhow!("ShapeKind try_from::<u32>() for value {} failed", value)
        })
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(Self::Rectangle),
            "ellipse" => Ok(Self::Ellipse),
            "arrow" => Ok(Self::Arrow),
            "text" => Ok(Self::Text),
            "selection" => Ok(Self::Selection),
            s => Err(anyhow::anyhow!(
                "Creating ShapeKind from &str failed, invalid name {s}"
            )),
        }
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Rectangle => write!(f, "rectangle"),
            ShapeKind::Ellipse => write!(f, "ellipse"),
            ShapeKind::Arrow => write!(f, "arrow"),
            ShapeKind::Text => write!(f, "text"),
            ShapeKind::Selection => write!(f, "selection"),
        }
    }
}

impl ShapeKind {
    /// All kinds, in the toolbar order.
    pub fn all() -> [Self; 5] {
        [
            Self::Rectangle,
            Self::Ellipse,
            Self::Arrow,
            Self::Text,
            Self::Selection,
        ]
    }

    /// The label shown for this kind in the toolbar.
    pub fn toolbar_label(self) -> &'static str {
        match self {
            Self::Rectangle => "1 - Rectangle",
            Self::Ellipse => "2 - Ellipse",
            Self::Arrow => "3 - Arrow",
            Self::Text => "4 - Text",
            Self::Selection => "5 - Selection",
        }
    }
}

/// Error returned when hit-testing a shape whose kind has no hit-testable
/// geometry.
///
/// This is a caller contract violation and should be surfaced immediately,
/// never swallowed.
#[derive(Debug, Clone, thiserror::Error)]
#[error("shape kind `{kind}` does not support hit-testing")]
pub struct UnsupportedShapeKind {
    /// The offending kind.
    pub kind: ShapeKind,
}

/// A drawn shape.
///
/// The origin is the corner where drawing started, not necessarily the
/// upper-left one: a shape drawn right-to-left or bottom-to-top stores a
/// negative extent component. The signs must be preserved in storage since
/// they carry directionality (an arrow keeps pointing from its origin towards
/// its tip through any resize); they are only collapsed into an absolute
/// bounding box at query time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename = "shape")]
pub struct Shape {
    #[serde(rename = "kind")]
    /// The kind of the shape.
    pub kind: ShapeKind,
    #[serde(rename = "origin")]
    /// The anchor where drawing started.
    pub origin: na::Vector2<f64>,
    #[serde(rename = "extent")]
    /// The signed extent from the origin to the opposite corner.
    pub extent: na::Vector2<f64>,
    #[serde(rename = "selected")]
    /// Whether the shape is currently selected. Not used by the geometry
    /// queries, selection state is the caller's responsibility.
    pub selected: bool,
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(ShapeKind::default(), na::Vector2::zeros())
    }
}

impl Shape {
    /// The maximum distance from a boundary segment for a point to count as
    /// hitting the shape.
    pub const LINE_HIT_THRESHOLD: f64 = 10.0;

    /// A new shape of the given kind with zero extent, as created when a
    /// drawing drag starts.
    pub fn new(kind: ShapeKind, origin: na::Vector2<f64>) -> Self {
        Self {
            kind,
            origin,
            extent: na::Vector2::zeros(),
            selected: false,
        }
    }

    /// Builder-style extent, any sign.
    pub fn with_extent(mut self, extent: na::Vector2<f64>) -> Self {
        self.extent = extent;
        self
    }

    /// Resize the shape so that its extent reaches the given position, as
    /// done while the user drags.
    pub fn drag_to(&mut self, pos: na::Vector2<f64>) {
        self.extent = pos - self.origin;
    }

    /// The lower of the two absolute x bounds.
    pub fn abs_x1(&self) -> f64 {
        if self.extent[0] >= 0.0 {
            self.origin[0]
        } else {
            self.origin[0] + self.extent[0]
        }
    }

    /// The higher of the two absolute x bounds.
    pub fn abs_x2(&self) -> f64 {
        if self.extent[0] >= 0.0 {
            self.origin[0] + self.extent[0]
        } else {
            self.origin[0]
        }
    }

    /// The lower of the two absolute y bounds.
    pub fn abs_y1(&self) -> f64 {
        if self.extent[1] >= 0.0 {
            self.origin[1]
        } else {
            self.origin[1] + self.extent[1]
        }
    }

    /// The higher of the two absolute y bounds.
    pub fn abs_y2(&self) -> f64 {
        if self.extent[1] >= 0.0 {
            self.origin[1] + self.extent[1]
        } else {
            self.origin[1]
        }
    }

    /// The absolute bounds of the shape.
    pub fn bounds(&self) -> Aabb {
        AabbExt::new_positive(self.origin.into(), (self.origin + self.extent).into())
    }

    /// The four boundary segments of the absolute bounds.
    pub fn outline_lines(&self) -> [Line; 4] {
        let upper_left = na::vector![self.abs_x1(), self.abs_y1()];
        let upper_right = na::vector![self.abs_x2(), self.abs_y1()];
        let lower_left = na::vector![self.abs_x1(), self.abs_y2()];
        let lower_right = na::vector![self.abs_x2(), self.abs_y2()];

        [
            Line::new(upper_left, lower_left),
            Line::new(lower_left, lower_right),
            Line::new(lower_right, upper_right),
            Line::new(upper_right, upper_left),
        ]
    }

    /// The derived arrow geometry for the shape's extent, in shape-local
    /// coordinates.
    pub fn arrow_geometry(&self) -> ArrowGeometry {
        ArrowGeometry::from_extent(self.extent)
    }

    /// Whether the given position hits the shape.
    ///
    /// Rectangles and ellipses are hit along the outline of their absolute
    /// bounds, within [`Self::LINE_HIT_THRESHOLD`] (the ellipse is
    /// intentionally approximated by its bounding rectangle). Arrows are hit
    /// along their shaft and wings, text boxes by containment in their
    /// bounds. A selection rubber-band is not a hit-testable target and
    /// returns [`UnsupportedShapeKind`].
    pub fn hit_test(&self, pos: na::Vector2<f64>) -> Result<bool, UnsupportedShapeKind> {
        match self.kind {
            ShapeKind::Rectangle | ShapeKind::Ellipse => Ok(self
                .outline_lines()
                .iter()
                .any(|line| line.distance_to_point(pos) <= Self::LINE_HIT_THRESHOLD)),
            ShapeKind::Arrow => {
                let local_pos = pos - self.origin;

                Ok(self
                    .arrow_geometry()
                    .segments()
                    .iter()
                    .any(|line| line.distance_to_point(local_pos) <= Self::LINE_HIT_THRESHOLD))
            }
            ShapeKind::Text => Ok(self.bounds().contains_local_point(&pos.into())),
            ShapeKind::Selection => Err(UnsupportedShapeKind { kind: self.kind }),
        }
    }
}
