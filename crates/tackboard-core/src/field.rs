//! Text-field widgets placed on the canvas.

use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for fields.
pub type FieldId = Uuid;

/// Width of a freshly created field.
pub const DEFAULT_FIELD_WIDTH: f64 = 150.0;
/// Height of a freshly created field. Height never changes afterwards.
pub const DEFAULT_FIELD_HEIGHT: f64 = 40.0;
/// Font size used when measuring field content.
pub const DEFAULT_FONT_SIZE: f64 = 17.0;
/// Placeholder content for new fields.
pub const DEFAULT_CONTENT: &str = "Edit me";
/// Border width applied to the selected field.
pub const SELECTION_BORDER_WIDTH: f64 = 2.0;
/// Border color of the selection marker.
pub const SELECTION_BORDER_COLOR: FieldColor = FieldColor::new(0, 0, 255, 255);

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl FieldColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for FieldColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<FieldColor> for Color {
    fn from(color: FieldColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Generate a pseudo-random opaque fill for a new field.
/// Uses a counter + hash approach that works on all platforms including WASM;
/// there is no seeding or reproducibility requirement.
fn random_fill() -> FieldColor {
    use std::sync::atomic::{AtomicU32, Ordering};

    // Global counter ensures distinct fills even without a time source
    static FILL_COUNTER: AtomicU32 = AtomicU32::new(1);

    let counter = FILL_COUNTER.fetch_add(1, Ordering::Relaxed);

    // Mix the counter with constants for better distribution (splitmix32-like)
    let mut x = counter.wrapping_mul(0x9E37_79B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2_AE35);
    x ^= x >> 16;

    FieldColor::new((x >> 16) as u8, (x >> 8) as u8, x as u8, 255)
}

/// Visual style of a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldStyle {
    /// Background fill, assigned pseudo-randomly at creation.
    pub fill: FieldColor,
    /// Border width. Non-zero only while the field carries the selection marker.
    pub border_width: f64,
    /// Border color used for the selection marker.
    pub border_color: FieldColor,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            fill: random_fill(),
            border_width: 0.0,
            border_color: SELECTION_BORDER_COLOR,
        }
    }
}

impl FieldStyle {
    /// Get the fill as a peniko Color.
    pub fn fill(&self) -> Color {
        self.fill.into()
    }

    /// Get the border color as a peniko Color.
    pub fn border(&self) -> Color {
        self.border_color.into()
    }
}

/// A draggable, alignable text field on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub(crate) id: FieldId,
    /// Position (top-left corner) in canvas coordinates.
    pub position: Point,
    /// Live rendered width.
    pub width: f64,
    /// Live rendered height.
    pub height: f64,
    /// Requested width fed to the host layout system. Distinct from the
    /// live width, which only the host layout updates.
    pub width_constraint: f64,
    /// The text content.
    pub content: String,
    /// Font size in points, used for content measurement.
    pub font_size: f64,
    /// Visual style.
    pub style: FieldStyle,
    /// True while the host centering constraint still governs the position.
    /// Cleared by the first drag, alignment, or flow placement.
    #[serde(default)]
    pub(crate) anchored: bool,
}

impl Field {
    /// Create a new field centered in a canvas of the given size.
    pub fn new(canvas: Size) -> Self {
        let mut field = Self {
            id: Uuid::new_v4(),
            position: Point::ZERO,
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            width_constraint: DEFAULT_FIELD_WIDTH,
            content: DEFAULT_CONTENT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            style: FieldStyle::default(),
            anchored: true,
        };
        field.recenter(canvas);
        field
    }

    /// Get the unique identifier.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Get the bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Get the center point.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Move the field so its center lands on `center`.
    pub fn set_center(&mut self, center: Point) {
        self.position = Point::new(center.x - self.width / 2.0, center.y - self.height / 2.0);
    }

    /// Check if a point (in canvas coordinates) hits this field.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let bounds = self.bounds().inflate(tolerance, tolerance);
        bounds.contains(point)
    }

    /// Re-resolve the centering constraint for a canvas of the given size.
    pub(crate) fn recenter(&mut self, canvas: Size) {
        self.position = Point::new(
            (canvas.width - self.width) / 2.0,
            (canvas.height - self.height) / 2.0,
        );
    }

    /// Move the field by an incremental drag delta, keeping its center
    /// inside the canvas. Each axis is clamped independently; the if-chain
    /// form stays total when the field is larger than the canvas.
    pub fn drag_by(&mut self, delta: Vec2, canvas: Size) {
        let mut center = self.center() + delta;

        let min_x = self.width / 2.0;
        let min_y = self.height / 2.0;
        let max_x = canvas.width - self.width / 2.0;
        let max_y = canvas.height - self.height / 2.0;

        if center.x > max_x {
            center.x = max_x;
        } else if center.x < min_x {
            center.x = min_x;
        }

        if center.y > max_y {
            center.y = max_y;
        } else if center.y < min_y {
            center.y = min_y;
        }

        self.set_center(center);
        self.anchored = false;
    }
}
