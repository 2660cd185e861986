use nalgebra::{vector, Vector2};

use crate::HoverSettings;

const TILT_LIFT: &str = "translateZ(6px)";
const TILT_SHADOW_BASE: (f64, f64) = (8.0, 30.0);
const TILT_SHADOW_COLOR: &str = "rgba(139,92,246,0.15)";
const TILT_SHADOW_INSET: &str = "inset 0 0 0 1px rgba(255,255,255,.03)";

/// Client rectangle of a hovered element.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Bounds {
    /// Left edge in viewport pixels.
    pub left: f64,
    /// Top edge in viewport pixels.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Bounds {
    /// Creates a new [`Bounds`].
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Bounds {
        Bounds {
            left,
            top,
            width,
            height,
        }
    }

    /// Centre of the rectangle.
    pub fn center(&self) -> Vector2<f64> {
        vector![self.left + self.width / 2.0, self.top + self.height / 2.0]
    }

    /// `pointer` in rectangle-relative units, `(0, 0)` top left and `(1, 1)` bottom right.
    ///
    /// A collapsed axis maps to its midpoint.
    pub fn normalize(&self, pointer: Vector2<f64>) -> Vector2<f64> {
        let along = |offset: f64, extent: f64| {
            if extent > 0.0 {
                offset / extent
            } else {
                0.5
            }
        };

        vector![
            along(pointer.x - self.left, self.width),
            along(pointer.y - self.top, self.height)
        ]
    }
}

/// Inline style values an effect wants on its element.
///
/// Empty strings hand the property back to the stylesheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverStyle {
    /// Value for `transform`.
    pub transform: String,
    /// Value for `box-shadow`, if the effect manages it.
    pub box_shadow: Option<String>,
}

/// A pointer-proportional transform, recomputed on movement and reset on exit.
pub trait HoverEffect {
    /// Pointer moved to `pointer` while over an element occupying `bounds`.
    fn on_move(&mut self, bounds: &Bounds, pointer: Vector2<f64>);

    /// Pointer left the element.
    fn on_leave(&mut self);

    /// Styles reflecting the current state.
    fn style(&self) -> HoverStyle;
}

/// Rotation and shadow offsets of a tilted card.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct TiltAngles {
    /// Rotation about the X axis in degrees; positive when the pointer is above centre.
    pub rx: f64,
    /// Rotation about the Y axis in degrees; positive when the pointer is right of centre.
    pub ry: f64,
    /// Horizontal shadow offset.
    pub sx: f64,
    /// Vertical shadow offset.
    pub sy: f64,
}

/// 3D tilt of a card towards the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Tilt {
    settings: HoverSettings,
    angles: Option<TiltAngles>,
}

impl Tilt {
    /// Creates a resting [`Tilt`].
    pub fn new(settings: HoverSettings) -> Tilt {
        Tilt {
            settings,
            angles: None,
        }
    }

    /// Current angles, or `None` while the pointer is away.
    pub fn angles(&self) -> Option<TiltAngles> {
        self.angles
    }
}

impl HoverEffect for Tilt {
    fn on_move(&mut self, bounds: &Bounds, pointer: Vector2<f64>) {
        let relative = bounds.normalize(pointer);
        let degrees = self.settings.tilt_degrees;
        let shadow = self.settings.tilt_shadow;

        self.angles = Some(TiltAngles {
            rx: (0.5 - relative.y) * degrees,
            ry: (relative.x - 0.5) * degrees,
            sx: (relative.x - 0.5) * shadow,
            sy: (relative.y - 0.5) * shadow,
        });
    }

    fn on_leave(&mut self) {
        self.angles = None;
    }

    fn style(&self) -> HoverStyle {
        match self.angles {
            Some(TiltAngles { rx, ry, sx, sy }) => HoverStyle {
                transform: format!(
                    "perspective({}px) rotateX({rx}deg) rotateY({ry}deg) {TILT_LIFT}",
                    self.settings.perspective
                ),
                box_shadow: Some(format!(
                    "0 {}px {}px {TILT_SHADOW_COLOR}, {TILT_SHADOW_INSET}",
                    TILT_SHADOW_BASE.0 + sy,
                    TILT_SHADOW_BASE.1 + sx.abs()
                )),
            },
            None => HoverStyle {
                transform: String::new(),
                box_shadow: Some(String::new()),
            },
        }
    }
}

/// A button drawn part of the way towards the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Magnet {
    strength: f64,
    offset: Vector2<f64>,
}

impl Magnet {
    /// Creates a resting [`Magnet`].
    pub fn new(settings: HoverSettings) -> Magnet {
        Magnet {
            strength: settings.magnet_strength,
            offset: Vector2::zeros(),
        }
    }

    /// Current translation.
    pub fn offset(&self) -> Vector2<f64> {
        self.offset
    }
}

impl HoverEffect for Magnet {
    fn on_move(&mut self, bounds: &Bounds, pointer: Vector2<f64>) {
        self.offset = (pointer - bounds.center()) * self.strength;
    }

    fn on_leave(&mut self) {
        self.offset = Vector2::zeros();
    }

    fn style(&self) -> HoverStyle {
        let transform = if self.offset == Vector2::zeros() {
            String::new()
        } else {
            format!("translate({}px, {}px)", self.offset.x, self.offset.y)
        };

        HoverStyle {
            transform,
            box_shadow: None,
        }
    }
}
