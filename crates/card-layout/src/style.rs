//! Card styles (layouts) and their positioned elements

use indexmap::IndexMap;

use crate::deck::FieldValue;
use crate::geometry::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping of style id to layout, one per card side
pub type StyleMap = IndexMap<String, Layout>;

/// A named, ordered collection of elements describing one card face.
/// Later elements are drawn on top of earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Layout {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::null_as_default"))]
    pub elements: Vec<Element>,
}

impl Layout {
    /// A layout with no name and no elements
    pub const fn empty() -> Self {
        Self {
            name: String::new(),
            elements: Vec::new(),
        }
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// Topmost element under a point given in card millimeters
    pub fn hit_test(&self, x_mm: f64, y_mm: f64) -> Option<&Element> {
        self.elements
            .iter()
            .rev()
            .find(|el| el.bounds().contains(x_mm, y_mm))
    }
}

/// A single positioned item on a card face.
///
/// Position and size are millimeters relative to the card's top-left corner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: ElementKind,
}

impl Element {
    pub fn new(id: impl Into<String>, bounds: Rect, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            kind,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
    }

    /// The data field this element is bound to, if any
    pub fn field(&self) -> Option<&str> {
        let field = match &self.kind {
            ElementKind::Text(text) => text.field.as_deref(),
            ElementKind::Image(image) => image.field.as_deref(),
            ElementKind::Shape(_) => None,
        };
        field.filter(|f| !f.is_empty())
    }

    /// The text a text element shows for a card's data.
    ///
    /// A bound field wins over static text, even when the card has no value
    /// for it. Non-text elements return `None`.
    pub fn display_text(&self, data: &IndexMap<String, FieldValue>) -> Option<String> {
        let ElementKind::Text(text) = &self.kind else {
            return None;
        };
        match self.field() {
            Some(field) => Some(data.get(field).map(|v| v.to_string()).unwrap_or_default()),
            None => Some(text.static_text.clone().unwrap_or_default()),
        }
    }

    /// The asset reference an image element shows for a card's data
    pub fn image_source<'a>(&self, data: &'a IndexMap<String, FieldValue>) -> Option<&'a str> {
        if !matches!(self.kind, ElementKind::Image(_)) {
            return None;
        }
        match data.get(self.field()?)? {
            FieldValue::Text(path) if !path.is_empty() => Some(path.as_str()),
            _ => None,
        }
    }
}

/// Kind-specific rendering attributes
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum ElementKind {
    Text(TextAttributes),
    Image(ImageAttributes),
    Shape(ShapeAttributes),
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text(_) => "text",
            ElementKind::Image(_) => "image",
            ElementKind::Shape(_) => "shape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TextAttributes {
    pub field: Option<String>,
    pub static_text: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub color: Option<String>,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ImageAttributes {
    pub field: Option<String>,
    pub object_fit: ImageFit,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ShapeAttributes {
    /// Polygon vertices normalized to the element box (0..1 on both axes)
    pub points: Vec<ShapePoint>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl ShapeAttributes {
    pub fn from_preset(preset: ShapePreset) -> Self {
        Self {
            points: preset.points(),
            ..Default::default()
        }
    }

    /// Vertices in card millimeters for an element box
    pub fn points_in(&self, bounds: &Rect) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (bounds.x + p.x * bounds.width, bounds.y + p.y * bounds.height))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapePoint {
    pub x: f64,
    pub y: f64,
}

impl ShapePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Built-in polygon shapes offered by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePreset {
    Square,
    Triangle,
    Hexagon,
    Star,
}

impl ShapePreset {
    pub const ALL: [ShapePreset; 4] = [
        ShapePreset::Square,
        ShapePreset::Triangle,
        ShapePreset::Hexagon,
        ShapePreset::Star,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapePreset::Square => "square",
            ShapePreset::Triangle => "triangle",
            ShapePreset::Hexagon => "hexagon",
            ShapePreset::Star => "star",
        }
    }

    pub fn points(self) -> Vec<ShapePoint> {
        let raw: &[(f64, f64)] = match self {
            ShapePreset::Square => &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            ShapePreset::Triangle => &[(0.5, 0.0), (1.0, 1.0), (0.0, 1.0)],
            ShapePreset::Hexagon => &[
                (0.5, 0.0),
                (1.0, 0.25),
                (1.0, 0.75),
                (0.5, 1.0),
                (0.0, 0.75),
                (0.0, 0.25),
            ],
            ShapePreset::Star => &[
                (0.5, 0.0),
                (0.618, 0.382),
                (1.0, 0.382),
                (0.691, 0.618),
                (0.809, 1.0),
                (0.5, 0.764),
                (0.191, 1.0),
                (0.309, 0.618),
                (0.0, 0.382),
                (0.382, 0.382),
            ],
        };
        raw.iter().map(|&(x, y)| ShapePoint::new(x, y)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

/// How an image fills its element box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageFit {
    /// Scale to fit inside the box, preserving aspect ratio
    #[default]
    Contain,
    /// Scale to cover the box, cropping overflow
    Cover,
    /// Stretch to the box, ignoring aspect ratio
    Fill,
}

impl ImageFit {
    /// Destination rectangle for an image of the given pixel size drawn into `bounds`.
    ///
    /// For `Cover` the result may extend past `bounds`; the caller clips.
    pub fn place(self, bounds: &Rect, image_width: f64, image_height: f64) -> Rect {
        if image_width <= 0.0 || image_height <= 0.0 {
            return *bounds;
        }
        let sx = bounds.width / image_width;
        let sy = bounds.height / image_height;
        let scale = match self {
            ImageFit::Contain => sx.min(sy),
            ImageFit::Cover => sx.max(sy),
            ImageFit::Fill => return *bounds,
        };
        let w = image_width * scale;
        let h = image_height * scale;
        Rect::new(
            bounds.x + (bounds.width - w) / 2.0,
            bounds.y + (bounds.height - h) / 2.0,
            w,
            h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(id: &str, bounds: Rect) -> Element {
        Element::new(id, bounds, ElementKind::Text(TextAttributes::default()))
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut layout = Layout::new("Front");
        layout.elements.push(text("bottom", Rect::new(0.0, 0.0, 50.0, 50.0)));
        layout.elements.push(text("top", Rect::new(10.0, 10.0, 10.0, 10.0)));

        assert_eq!(layout.hit_test(15.0, 15.0).map(|e| e.id.as_str()), Some("top"));
        assert_eq!(layout.hit_test(40.0, 40.0).map(|e| e.id.as_str()), Some("bottom"));
        assert!(layout.hit_test(60.0, 60.0).is_none());
    }

    #[test]
    fn test_contain_letterboxes() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        let placed = ImageFit::Contain.place(&bounds, 200.0, 200.0);
        assert_eq!(placed, Rect::new(25.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_cover_overflows() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        let placed = ImageFit::Cover.place(&bounds, 200.0, 200.0);
        assert_eq!(placed, Rect::new(0.0, -25.0, 100.0, 100.0));
    }

    #[test]
    fn test_shape_points_scaled_to_bounds() {
        let shape = ShapeAttributes::from_preset(ShapePreset::Triangle);
        let pts = shape.points_in(&Rect::new(10.0, 20.0, 4.0, 8.0));
        assert_eq!(pts, vec![(12.0, 20.0), (14.0, 28.0), (10.0, 28.0)]);
    }

    #[test]
    fn test_display_text_field_wins_over_static() {
        let mut el = text("t", Rect::default());
        if let ElementKind::Text(attrs) = &mut el.kind {
            attrs.static_text = Some("Static".into());
        }
        let mut data = IndexMap::new();
        data.insert("title".to_string(), FieldValue::Text("Goblin".into()));

        assert_eq!(el.display_text(&data).as_deref(), Some("Static"));

        if let ElementKind::Text(attrs) = &mut el.kind {
            attrs.field = Some("title".into());
        }
        assert_eq!(el.display_text(&data).as_deref(), Some("Goblin"));

        if let ElementKind::Text(attrs) = &mut el.kind {
            attrs.field = Some("missing".into());
        }
        assert_eq!(el.display_text(&data).as_deref(), Some(""));
    }
}
