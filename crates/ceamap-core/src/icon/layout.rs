//! Marker icon geometry.
//!
//! One source image fills the whole square canvas. Two or more are drawn as
//! smaller badges whose centers sit evenly spaced on a circle, starting at
//! the top and going clockwise, over a white disc.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Width and height of every composited icon, in pixels.
pub const CANVAS_SIZE: u32 = 50;

/// Width and height of each badge in a multi-type icon.
pub const BADGE_SIZE: u32 = 30;

/// Distance from the canvas center to each badge center.
pub const ORBIT_RADIUS: f64 = CANVAS_SIZE as f64 / 3.0;

/// Angle of the first badge (straight up).
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// Where one source image lands on the canvas (top-left corner and edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Nothing resolved; the icon is a transparent canvas.
    Empty,
    Single(Placement),
    /// Badges around a white background disc.
    Ring(Vec<Placement>),
}

impl Layout {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::Single(Placement {
                x: 0,
                y: 0,
                size: CANVAS_SIZE,
            }),
            n => Self::Ring((0..n).map(|i| ring_placement(i, n)).collect()),
        }
    }
}

fn ring_placement(index: usize, count: usize) -> Placement {
    let center = f64::from(CANVAS_SIZE) / 2.0;
    let half_badge = f64::from(BADGE_SIZE) / 2.0;
    let angle = START_ANGLE + index as f64 * (TAU / count as f64);

    Placement {
        x: (center + ORBIT_RADIUS * angle.cos() - half_badge).round() as i64,
        y: (center + ORBIT_RADIUS * angle.sin() - half_badge).round() as i64,
        size: BADGE_SIZE,
    }
}

/// Icon anchor: the geometric center of the canvas.
pub fn anchor() -> [i32; 2] {
    let half = (CANVAS_SIZE / 2) as i32;
    [half, half]
}

/// Popup anchor relative to the icon anchor: directly above the icon.
pub fn popup_anchor() -> [i32; 2] {
    [0, -((CANVAS_SIZE / 2) as i32)]
}
