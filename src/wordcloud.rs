use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A piece of text to place, weighted by importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedLabel {
    pub text: String,
    pub weight: f64,
}

impl WeightedLabel {
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// Logical coordinate space the layout must respect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Whether a box of the given size centred at `(x, y)` lies strictly inside the canvas.
    fn contains(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x > width / 2.0
            && x < self.width - width / 2.0
            && y > height / 2.0
            && y < self.height - height / 2.0
    }
}

/// Axis-aligned bounding box of a placed label, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlacementRect {
    pub fn centered(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: x - width / 2.0,
            y: y - height / 2.0,
            width,
            height,
        }
    }

    /// True when the two rects come closer than `padding` on both axes.
    pub fn overlaps(&self, other: &PlacementRect, padding: f64) -> bool {
        self.x < other.x + other.width + padding
            && self.x + self.width + padding > other.x
            && self.y < other.y + other.height + padding
            && self.y + self.height + padding > other.y
    }
}

/// How a label ended up where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Found on the spiral, clear of every earlier spiral placement.
    Spiral,
    /// Attempt budget exhausted; random position, collisions tolerated.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub text: String,
    pub weight: f64,
    /// Centre of the label.
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub rotation_degrees: f64,
    pub placement: Placement,
}

impl PlacedLabel {
    pub fn rect(&self, width_factor: f64) -> PlacementRect {
        let (width, height) = approx_size(&self.text, self.font_size, width_factor);
        PlacementRect::centered(self.x, self.y, width, height)
    }
}

/// Text is measured as `chars * font_size * width_factor` wide and one em tall.
fn approx_size(text: &str, font_size: f64, width_factor: f64) -> (f64, f64) {
    (text.chars().count() as f64 * font_size * width_factor, font_size)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub min_font_size: f64,
    pub max_font_size: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    pub width_factor: f64,
    pub padding: f64,
    pub max_attempts: usize,
    /// Radians advanced per attempt.
    pub angle_step: f64,
    pub initial_radius: f64,
    /// Radius growth per full revolution.
    pub radius_step: f64,
    /// Rotations are drawn from `[-max_rotation, max_rotation)` degrees.
    pub max_rotation: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_font_size: 20.0,
            max_font_size: 72.0,
            min_weight: 2.0,
            max_weight: 9.0,
            width_factor: 0.6,
            padding: 10.0,
            max_attempts: 100,
            angle_step: 0.5,
            initial_radius: 30.0,
            radius_step: 20.0,
            max_rotation: 5.0,
        }
    }
}

impl LayoutConfig {
    /// Maps a weight onto the font range. Out-of-domain weights are clamped, never rejected.
    pub fn font_size(&self, weight: f64) -> f64 {
        let span = self.max_weight - self.min_weight;
        if span <= 0.0 {
            return self.max_font_size;
        }
        // infinities clamp like any other out-of-domain weight
        let weight = if weight.is_nan() {
            self.min_weight
        } else {
            weight.clamp(self.min_weight, self.max_weight)
        };
        self.min_font_size + (weight - self.min_weight) / span * (self.max_font_size - self.min_font_size)
    }

    /// Places every label on the canvas. Total: one output per input, in placement order.
    ///
    /// The heaviest label goes to the centre, the rest walk an expanding spiral until a
    /// collision-free, in-bounds spot turns up. Labels that exhaust `max_attempts` get a
    /// random position instead. Equal weights keep their input order.
    pub fn layout<R: Rng + ?Sized>(
        &self,
        labels: &[WeightedLabel],
        canvas: Canvas,
        rng: &mut R,
    ) -> Vec<PlacedLabel> {
        let mut sorted = labels.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| sort_key(b.weight).total_cmp(&sort_key(a.weight)));

        let (center_x, center_y) = canvas.center();
        let mut used_rects: Vec<PlacementRect> = Vec::with_capacity(sorted.len());
        let mut placed = Vec::with_capacity(sorted.len());

        for (index, label) in sorted.into_iter().enumerate() {
            let font_size = self.font_size(label.weight);
            let (width, height) = approx_size(&label.text, font_size, self.width_factor);

            let spot = if index == 0 {
                // the centre is the only candidate for the first label
                canvas
                    .contains(center_x, center_y, width, height)
                    .then_some((center_x, center_y))
            } else {
                self.spiral_search(canvas, width, height, &used_rects)
            };

            let (x, y, placement) = match spot {
                Some((x, y)) => {
                    used_rects.push(PlacementRect::centered(x, y, width, height));
                    (x, y, Placement::Spiral)
                }
                None => {
                    log::debug!(
                        "word cloud overflow: no spot for {:?} after {} attempts",
                        label.text,
                        self.max_attempts
                    );
                    let x = random_axis(rng, canvas.width, width);
                    let y = random_axis(rng, canvas.height, height);
                    (x, y, Placement::Fallback)
                }
            };

            placed.push(PlacedLabel {
                text: label.text.clone(),
                weight: label.weight,
                x,
                y,
                font_size,
                rotation_degrees: self.rotation(rng),
                placement,
            });
        }

        placed
    }

    fn spiral_search(
        &self,
        canvas: Canvas,
        width: f64,
        height: f64,
        used_rects: &[PlacementRect],
    ) -> Option<(f64, f64)> {
        let (center_x, center_y) = canvas.center();
        let mut radius = self.initial_radius;
        let mut angle = 0.0_f64;

        for _ in 0..self.max_attempts {
            let x = center_x + radius * angle.cos();
            let y = center_y + radius * angle.sin();
            let rect = PlacementRect::centered(x, y, width, height);
            let clear = !used_rects.iter().any(|r| rect.overlaps(r, self.padding));
            if clear && canvas.contains(x, y, width, height) {
                return Some((x, y));
            }

            angle += self.angle_step;
            if angle > TAU {
                angle = 0.0;
                radius += self.radius_step;
            }
        }
        None
    }

    fn rotation<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max_rotation <= 0.0 {
            return 0.0;
        }
        rng.gen_range(-self.max_rotation..self.max_rotation)
    }
}

fn sort_key(weight: f64) -> f64 {
    if weight.is_nan() {
        f64::NEG_INFINITY
    } else {
        // folds -0.0 into +0.0 so total_cmp sees them as equal
        weight + 0.0
    }
}

/// Uniform centre coordinate keeping `size` inside `extent`, or the middle when it can't fit.
fn random_axis<R: Rng + ?Sized>(rng: &mut R, extent: f64, size: f64) -> f64 {
    let low = size / 2.0;
    let high = extent - size / 2.0;
    if low < high {
        rng.gen_range(low..high)
    } else {
        extent / 2.0
    }
}

/// [`LayoutConfig::layout`] with the default configuration.
pub fn layout<R: Rng + ?Sized>(
    labels: &[WeightedLabel],
    canvas: Canvas,
    rng: &mut R,
) -> Vec<PlacedLabel> {
    LayoutConfig::default().layout(labels, canvas, rng)
}
