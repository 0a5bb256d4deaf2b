use std::f32::consts::{PI, TAU};
use std::f64::consts::FRAC_PI_2;

use lyon::math::Transform;

use crate::geometry::{map_point, wrap_angle, PlanPoint};

/// Smallest positive subnormal `f32`; shears at or below it count as none.
const MIN_SHEAR: f32 = f32::from_bits(1);

/// Rotation and mirroring derived from the linear part of an affine matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub is_rotation: bool,
    /// Rotation angle in radians, in `[0, 2π)`; 0 without rotation.
    pub rotation_angle: f32,
    pub h_flip: bool,
    pub v_flip: bool,
}

impl Orientation {
    /// Derives the orientation from the four linear matrix components.
    ///
    /// A point maps as `x' = scale_x·x + shear_x·y`, `y' = shear_y·x + scale_y·y`.
    pub fn from_components(scale_x: f32, scale_y: f32, shear_x: f32, shear_y: f32) -> Self {
        let is_rotation = shear_x.abs() > MIN_SHEAR || shear_y.abs() > MIN_SHEAR;
        if !is_rotation {
            return Self {
                is_rotation,
                rotation_angle: 0.0,
                h_flip: scale_x < 0.0,
                v_flip: scale_y < 0.0,
            };
        }

        let angle = (shear_y as f64).atan2(scale_x as f64) as f32;
        let (sin, cos) = (angle as f64).sin_cos();
        let (sin, cos) = (sin as f32, cos as f32);

        let (h_flip, v_flip) = if sin.abs() > cos.abs() {
            (
                (shear_y < 0.0) != (sin < 0.0),
                (shear_x < 0.0) == (sin < 0.0),
            )
        } else {
            (
                (scale_x < 0.0) != (cos < 0.0),
                (scale_y < 0.0) != (cos < 0.0),
            )
        };

        Self {
            is_rotation,
            rotation_angle: wrap_angle(angle),
            h_flip,
            v_flip,
        }
    }

    pub fn from_transform(transform: &Transform) -> Self {
        Self::from_components(transform.m11, transform.m22, transform.m21, transform.m12)
    }
}

/// A matrix together with the text options it is applied with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOptions {
    transform: Transform,
    rotate_text: bool,
    adjust_text: bool,
    orientation: Orientation,
}

impl TransformOptions {
    pub fn new(transform: Transform, rotate_text: bool, adjust_text: bool) -> Self {
        Self {
            transform,
            rotate_text,
            adjust_text,
            orientation: Orientation::from_transform(&transform),
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn rotate_text(&self) -> bool {
        self.rotate_text
    }

    pub fn adjust_text(&self) -> bool {
        self.adjust_text
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_rotation(&self) -> bool {
        self.orientation.is_rotation
    }

    pub fn rotation_angle(&self) -> f32 {
        self.orientation.rotation_angle
    }

    pub fn is_h_flip(&self) -> bool {
        self.orientation.h_flip
    }

    pub fn is_v_flip(&self) -> bool {
        self.orientation.v_flip
    }

    pub fn is_identity(&self) -> bool {
        self.transform == Transform::identity()
    }

    /// True when the X and Y scale factors have opposite signs.
    pub fn is_mirroring(&self) -> bool {
        (self.transform.m11 < 0.0) != (self.transform.m22 < 0.0)
    }

    pub fn map_point(&self, point: PlanPoint) -> PlanPoint {
        map_point(&self.transform, point)
    }

    /// Computes the angle a text with the given angle gets under this
    /// transform.
    ///
    /// With `adjust_text`, text that would end up upside down (pointing
    /// into the left half-plane) is turned by π to stay readable.
    pub fn transform_text_angle(&self, angle: f32) -> f32 {
        let Orientation {
            is_rotation,
            rotation_angle,
            h_flip,
            v_flip,
        } = self.orientation;

        if !self.rotate_text || (h_flip && v_flip && !is_rotation) {
            return angle;
        }

        let mut angle = angle;
        if h_flip {
            angle = TAU - angle;
        }
        if v_flip {
            angle = PI - angle;
            if angle < 0.0 {
                angle += TAU;
            }
        }
        if is_rotation {
            angle += rotation_angle;
            if angle >= TAU {
                angle -= TAU;
            }
        }

        let wide = angle as f64;
        let min = MIN_SHEAR as f64;
        if self.adjust_text && wide > FRAC_PI_2 - min && wide < 3.0 * FRAC_PI_2 + min {
            angle += PI;
            if angle >= TAU {
                angle -= TAU;
            }
        }
        wrap_angle(angle)
    }
}
