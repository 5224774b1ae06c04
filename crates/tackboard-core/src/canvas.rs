//! Canvas state and the interactive layout operations.

use crate::align::{aligned_position, Alignment};
use crate::field::{Field, FieldId, SELECTION_BORDER_WIDTH};
use crate::flow::flow_positions;
use crate::measure::{constraint_width, TextMeasurer};
use crate::transition::Transition;
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The bounded region holding all fields.
///
/// Fields are kept in creation order; the selection and input focus are
/// weak associations by id, never stored on the field itself. Every
/// operation is total: commands without a valid target are silent no-ops
/// rather than errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    /// Canvas size, managed by the host layout.
    size: Size,
    /// All fields, keyed by id.
    fields: HashMap<FieldId, Field>,
    /// Creation order of fields (also the z-order, back to front).
    order: Vec<FieldId>,
    /// Currently selected field, if any.
    #[serde(skip)]
    selected: Option<FieldId>,
    /// Field holding text-input focus, if any.
    #[serde(skip)]
    focused: Option<FieldId>,
}

impl Canvas {
    /// Create an empty canvas of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            fields: HashMap::new(),
            order: Vec::new(),
            selected: None,
            focused: None,
        }
    }

    /// Get the canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the canvas and re-resolve the centering constraint for
    /// fields that have not been moved yet.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
        for field in self.fields.values_mut() {
            if field.anchored {
                field.recenter(self.size);
            }
        }
    }

    /// Add a new field, centered in the canvas with a pseudo-random fill
    /// and placeholder content. Always succeeds; no other field is
    /// affected. Returns the new field's id.
    pub fn add_field(&mut self) -> FieldId {
        let field = Field::new(self.size);
        let id = field.id();
        self.order.push(id);
        self.fields.insert(id, field);
        log::debug!("added field {id} ({} total)", self.fields.len());
        id
    }

    /// Remove a field, clearing the selection and focus if they referred
    /// to it.
    pub fn remove_field(&mut self, id: FieldId) -> Option<Field> {
        self.order.retain(|&field_id| field_id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.fields.remove(&id)
    }

    /// Select a field, moving the visual marker to it. A silent no-op for
    /// ids that are not canvas members; reselecting the current selection
    /// only re-applies the marker.
    pub fn select(&mut self, id: FieldId) {
        if !self.fields.contains_key(&id) {
            return;
        }
        if let Some(previous) = self.selected {
            if previous != id {
                if let Some(field) = self.fields.get_mut(&previous) {
                    field.style.border_width = 0.0;
                }
            }
        }
        self.selected = Some(id);
        if let Some(field) = self.fields.get_mut(&id) {
            field.style.border_width = SELECTION_BORDER_WIDTH;
        }
        log::debug!("selected field {id}");
    }

    /// Clear the selection and its visual marker.
    pub fn clear_selection(&mut self) {
        if let Some(id) = self.selected.take() {
            if let Some(field) = self.fields.get_mut(&id) {
                field.style.border_width = 0.0;
            }
        }
    }

    /// Get the currently selected field id.
    pub fn selected(&self) -> Option<FieldId> {
        self.selected
    }

    /// Check if a field is selected.
    pub fn is_selected(&self, id: FieldId) -> bool {
        self.selected == Some(id)
    }

    /// Align the selected field to a canvas edge or center line. The model
    /// position updates immediately; the returned transition is a purely
    /// presentational record for the rendering layer. Silent no-op without
    /// a selection.
    pub fn align_selected(&mut self, alignment: Alignment) -> Option<Transition> {
        let id = self.selected?;
        let field = self.fields.get_mut(&id)?;
        let from = field.position;
        let to = aligned_position(
            alignment,
            from,
            Size::new(field.width, field.height),
            self.size,
        );
        field.position = to;
        field.anchored = false;
        log::debug!("aligned field {id} {alignment:?} -> ({:.1}, {:.1})", to.x, to.y);
        Some(Transition::new(id, from, to))
    }

    /// Apply an incremental drag delta to the selected field, clamping its
    /// center to the canvas per axis. Silent no-op without a selection.
    pub fn drag_selected(&mut self, delta: Vec2) {
        let Some(id) = self.selected else {
            return;
        };
        if let Some(field) = self.fields.get_mut(&id) {
            field.drag_by(delta, self.size);
        }
    }

    /// Repack all fields into a left-to-right, top-to-bottom flow in
    /// creation order. Fields past the bottom overflow keep their prior
    /// positions.
    pub fn order_fields(&mut self) {
        let sizes: Vec<Size> = self
            .order
            .iter()
            .filter_map(|id| self.fields.get(id))
            .map(|field| Size::new(field.width, field.height))
            .collect();
        let placements = flow_positions(&sizes, self.size);
        let placed = placements.len();
        for (index, position) in placements.into_iter().enumerate() {
            let id = self.order[index];
            if let Some(field) = self.fields.get_mut(&id) {
                field.position = position;
                field.anchored = false;
            }
        }
        log::debug!("flow-ordered {placed} of {} fields", self.order.len());
    }

    /// Update a field's content and recompute its width-constraint value
    /// from the measured text width. `host_width` is the width of the host
    /// view the constraint is clamped against.
    pub fn content_changed(
        &mut self,
        id: FieldId,
        text: impl Into<String>,
        measurer: &dyn TextMeasurer,
        host_width: f64,
    ) {
        let Some(field) = self.fields.get_mut(&id) else {
            return;
        };
        field.content = text.into();
        let rendered = measurer.text_width(&field.content, field.font_size);
        field.width_constraint = constraint_width(rendered, host_width);
    }

    /// Give text-input focus to a field. No-op for non-members.
    pub fn focus(&mut self, id: FieldId) {
        if self.fields.contains_key(&id) {
            self.focused = Some(id);
        }
    }

    /// Relinquish text-input focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Get the field holding text-input focus.
    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    /// Find the topmost field containing a point, for pick-gesture routing.
    pub fn field_at(&self, point: Point) -> Option<FieldId> {
        self.order.iter().rev().copied().find(|id| {
            self.fields
                .get(id)
                .is_some_and(|field| field.hit_test(point, 0.0))
        })
    }

    /// Get a field by id.
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(&id)
    }

    /// Get a mutable field by id.
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.get_mut(&id)
    }

    /// Iterate fields in creation order (back to front).
    pub fn fields_ordered(&self) -> impl Iterator<Item = &Field> {
        self.order.iter().filter_map(|id| self.fields.get(id))
    }

    /// Check if the canvas has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Serialize the canvas to JSON. Selection and focus are session state
    /// and are not persisted.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a canvas from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{CharWidthMeasurer, HOST_MARGIN, MIN_FIELD_WIDTH};

    fn canvas() -> Canvas {
        Canvas::new(300.0, 500.0)
    }

    #[test]
    fn test_add_field_is_centered() {
        let mut canvas = canvas();
        let id = canvas.add_field();
        let field = canvas.field(id).unwrap();
        assert_eq!(field.position, Point::new(75.0, 230.0));
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut canvas = canvas();
        let a = canvas.add_field();
        let b = canvas.add_field();

        canvas.select(a);
        assert!(canvas.is_selected(a));
        assert!((canvas.field(a).unwrap().style.border_width - 2.0).abs() < f64::EPSILON);

        canvas.select(b);
        assert!(canvas.is_selected(b));
        assert!(!canvas.is_selected(a));
        assert!((canvas.field(a).unwrap().style.border_width).abs() < f64::EPSILON);
        assert!((canvas.field(b).unwrap().style.border_width - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut canvas = canvas();
        let a = canvas.add_field();
        canvas.select(a);

        canvas.select(uuid::Uuid::new_v4());
        assert!(canvas.is_selected(a));
    }

    #[test]
    fn test_align_without_selection_is_noop() {
        let mut canvas = canvas();
        let id = canvas.add_field();
        let before = canvas.field(id).unwrap().position;

        assert!(canvas.align_selected(Alignment::Left).is_none());
        assert_eq!(canvas.field(id).unwrap().position, before);
    }

    #[test]
    fn test_align_left_then_bottom() {
        let mut canvas = canvas();
        let id = canvas.add_field();
        canvas.select(id);

        let transition = canvas.align_selected(Alignment::Left).unwrap();
        assert_eq!(transition.from, Point::new(75.0, 230.0));
        assert_eq!(transition.to, Point::new(0.0, 230.0));
        assert_eq!(canvas.field(id).unwrap().position, Point::new(0.0, 230.0));

        canvas.align_selected(Alignment::Bottom).unwrap();
        assert_eq!(canvas.field(id).unwrap().position, Point::new(0.0, 460.0));
    }

    #[test]
    fn test_drag_without_selection_is_noop() {
        let mut canvas = canvas();
        let id = canvas.add_field();
        let before = canvas.field(id).unwrap().position;

        canvas.drag_selected(Vec2::new(50.0, 50.0));
        assert_eq!(canvas.field(id).unwrap().position, before);
    }

    #[test]
    fn test_drag_clamps_center() {
        let mut canvas = canvas();
        let id = canvas.add_field();
        canvas.select(id);

        canvas.drag_selected(Vec2::new(1000.0, 0.0));
        let center = canvas.field(id).unwrap().center();
        assert!((center.x - 225.0).abs() < f64::EPSILON);
        assert!((center.y - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_fields_wraps_in_creation_order() {
        let mut canvas = canvas();
        let a = canvas.add_field();
        let b = canvas.add_field();
        let c = canvas.add_field();

        canvas.order_fields();
        assert_eq!(canvas.field(a).unwrap().position, Point::new(10.0, 10.0));
        assert_eq!(canvas.field(b).unwrap().position, Point::new(10.0, 60.0));
        assert_eq!(canvas.field(c).unwrap().position, Point::new(10.0, 110.0));
    }

    #[test]
    fn test_order_fields_is_idempotent() {
        let mut canvas = canvas();
        for _ in 0..4 {
            canvas.add_field();
        }

        canvas.order_fields();
        let first: Vec<Point> = canvas.fields_ordered().map(|f| f.position).collect();
        canvas.order_fields();
        let second: Vec<Point> = canvas.fields_ordered().map(|f| f.position).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overflowing_fields_keep_prior_position() {
        let mut canvas = Canvas::new(300.0, 100.0);
        let mut ids = Vec::new();
        for _ in 0..4 {
            ids.push(canvas.add_field());
        }
        let before_last = canvas.field(ids[3]).unwrap().position;

        canvas.order_fields();
        // Rows land at y=10, 60, 110; the third placement already passes the
        // bottom, so the fourth field is left where it was.
        assert_eq!(canvas.field(ids[2]).unwrap().position, Point::new(10.0, 110.0));
        assert_eq!(canvas.field(ids[3]).unwrap().position, before_last);
    }

    #[test]
    fn test_content_changed_updates_width_constraint() {
        let mut canvas = canvas();
        let id = canvas.add_field();
        let measurer = CharWidthMeasurer;

        canvas.content_changed(id, "x", &measurer, 300.0);
        let narrow = canvas.field(id).unwrap().width_constraint;
        assert!((narrow - MIN_FIELD_WIDTH).abs() < f64::EPSILON);

        canvas.content_changed(id, "a much longer line of text", &measurer, 300.0);
        let wide = canvas.field(id).unwrap().width_constraint;
        assert!(wide > narrow);
        assert!(wide <= 300.0 - HOST_MARGIN);

        canvas.content_changed(
            id,
            "an extremely long line of text that cannot possibly fit the host view",
            &measurer,
            300.0,
        );
        let clamped = canvas.field(id).unwrap().width_constraint;
        assert!((clamped - (300.0 - HOST_MARGIN)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_recenters_untouched_fields_only() {
        let mut canvas = canvas();
        let anchored = canvas.add_field();
        let dragged = canvas.add_field();
        canvas.select(dragged);
        canvas.drag_selected(Vec2::new(20.0, 20.0));
        let dragged_pos = canvas.field(dragged).unwrap().position;

        canvas.set_size(400.0, 600.0);
        assert_eq!(
            canvas.field(anchored).unwrap().position,
            Point::new(125.0, 280.0)
        );
        assert_eq!(canvas.field(dragged).unwrap().position, dragged_pos);
    }

    #[test]
    fn test_remove_field_clears_selection_and_focus() {
        let mut canvas = canvas();
        let id = canvas.add_field();
        canvas.select(id);
        canvas.focus(id);

        assert!(canvas.remove_field(id).is_some());
        assert!(canvas.selected().is_none());
        assert!(canvas.focused().is_none());
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_field_at_returns_topmost() {
        let mut canvas = canvas();
        let bottom = canvas.add_field();
        let top = canvas.add_field();

        // Both are centered, so the later one wins at the shared center
        assert_eq!(canvas.field_at(Point::new(150.0, 250.0)), Some(top));

        canvas.select(top);
        canvas.drag_selected(Vec2::new(-75.0, -210.0));
        assert_eq!(canvas.field_at(Point::new(150.0, 250.0)), Some(bottom));
        assert_eq!(canvas.field_at(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_focus_and_blur() {
        let mut canvas = canvas();
        let id = canvas.add_field();

        canvas.focus(id);
        assert_eq!(canvas.focused(), Some(id));

        canvas.blur();
        assert!(canvas.focused().is_none());
    }

    #[test]
    fn test_json_roundtrip_drops_session_state() {
        let mut canvas = canvas();
        let id = canvas.add_field();
        canvas.select(id);

        let json = canvas.to_json().unwrap();
        let restored = Canvas::from_json(&json).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.field(id).unwrap().position, Point::new(75.0, 230.0));
        assert!(restored.selected().is_none());
    }
}
