//! Geometry behind the cosmetic card tilt and scroll reveal.

use serde::Serialize;

/// Pointer distance (px) per degree of tilt.
const TILT_DIVISOR: f64 = 20.0;

/// Scale applied while a card is tilted.
const HOVER_SCALE: f64 = 1.03;

/// Fraction of the viewport height an element must scroll above to be revealed.
pub const REVEAL_THRESHOLD: f64 = 0.9;

/// A pointer position relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An element's bounding box relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// 3D tilt for a course card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    /// Flat, unscaled card (pointer left the card).
    pub fn rest() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
        }
    }

    /// CSS `transform` value.
    pub fn css(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

/// Tilt a card toward the pointer. The pointer at the card's center gives no rotation.
pub fn card_tilt(pointer: Point, card: Rect) -> Tilt {
    let x = pointer.x - card.left;
    let y = pointer.y - card.top;
    let center_x = card.width / 2.0;
    let center_y = card.height / 2.0;

    Tilt {
        rotate_x: -((y - center_y) / TILT_DIVISOR),
        rotate_y: (x - center_x) / TILT_DIVISOR,
        scale: HOVER_SCALE,
    }
}

/// Whether an element whose top edge sits at `element_top` should be revealed.
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height * REVEAL_THRESHOLD
}
