use crate::matrix::Matrix;
use druid::Data;

/// Homogeneous transform consumed by the renderer
pub type Mat4 = Matrix<f64, 4>;

/// Accumulated 2D affine transform.
///
/// Each user input nudges one of five accumulators; the matrix is then
/// rebuilt from identity in the fixed order scale, rotate, translate.
/// Rebuilding from the accumulators instead of multiplying onto the
/// previous matrix keeps repeated nudges free of floating-point drift.
#[derive(Clone, Debug, Data)]
pub struct Transform2D {
    scale_x: f64,
    scale_y: f64,
    /// Rotation around the Z axis, in radians, unbounded
    rotation: f64,
    translate_x: f64,
    translate_y: f64,
    // Always equal to scale * rotate * translate of the fields above,
    // so it carries no extra information for change detection.
    #[data(ignore)]
    matrix: Mat4,
}

impl Transform2D {
    pub fn new() -> Self {
        Transform2D {
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            matrix: Mat4::identity(),
        }
    }

    /// Returns every accumulator to neutral and the matrix to identity
    pub fn reset(&mut self) {
        *self = Transform2D::new();
    }

    /// Nudges the horizontal scale factor by `delta`.
    /// The factor may legally reach zero or go negative, collapsing or
    /// mirroring the model.
    pub fn scale_x_by(&mut self, delta: f64) {
        self.scale_x += delta;
        self.recompose();
    }

    /// Nudges the vertical scale factor by `delta`
    pub fn scale_y_by(&mut self, delta: f64) {
        self.scale_y += delta;
        self.recompose();
    }

    /// Accumulates a rotation in radians; wrapping is left to the
    /// periodicity of sine and cosine
    pub fn rotate_by(&mut self, delta_radians: f64) {
        self.rotation += delta_radians;
        self.recompose();
    }

    /// Nudges the horizontal offset by `delta`
    pub fn translate_x_by(&mut self, delta: f64) {
        self.translate_x += delta;
        self.recompose();
    }

    /// Nudges the vertical offset by `delta`
    pub fn translate_y_by(&mut self, delta: f64) {
        self.translate_y += delta;
        self.recompose();
    }

    /// The composed matrix; valid immediately after any mutation
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    pub fn translate_y(&self) -> f64 {
        self.translate_y
    }

    /// Rebuilds the matrix from identity: scale, then rotate, then
    /// translate. Factors still at their neutral value are skipped;
    /// multiplying by identity would change nothing.
    fn recompose(&mut self) {
        let mut m = Mat4::identity();
        if self.scale_x != 1.0 || self.scale_y != 1.0 {
            m = m * Mat4::scale(self.scale_x, self.scale_y);
        }
        if self.rotation != 0.0 {
            m = m * Mat4::rotation_z(self.rotation);
        }
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            m = m * Mat4::translation(self.translate_x, self.translate_y);
        }
        self.matrix = m;
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_3;

    /// The matrix a transform should hold, built directly from final
    /// accumulator values without going through the mutators.
    fn composed(sx: f64, sy: f64, rotation: f64, tx: f64, ty: f64) -> Mat4 {
        Mat4::scale(sx, sy) * Mat4::rotation_z(rotation) * Mat4::translation(tx, ty)
    }

    #[test]
    fn starts_as_identity() {
        assert_eq!(*Transform2D::new().matrix(), Mat4::identity());
    }

    #[test]
    fn reset_discards_all_history() {
        let mut transform = Transform2D::new();
        transform.scale_x_by(0.4);
        transform.rotate_by(1.3);
        transform.translate_y_by(-2.0);
        transform.reset();
        assert_eq!(*transform.matrix(), Mat4::identity());
        assert_eq!(transform.scale_x(), 1.0);
        assert_eq!(transform.rotation(), 0.0);
        assert_eq!(transform.translate_y(), 0.0);
    }

    #[test]
    fn additive_accumulation_of_scale_nudges() {
        let mut twice = Transform2D::new();
        twice.scale_x_by(0.05);
        twice.scale_x_by(0.05);

        let mut once = Transform2D::new();
        once.scale_x_by(0.10);

        assert_eq!(twice.scale_x(), once.scale_x());
        assert_eq!(*twice.matrix(), *once.matrix());
    }

    #[test]
    fn zero_deltas_leave_the_matrix_bit_identical() {
        let mut transform = Transform2D::new();
        transform.scale_y_by(0.3);
        transform.rotate_by(0.7);
        transform.translate_x_by(0.2);
        let before = *transform.matrix();

        transform.rotate_by(0.0);
        transform.scale_x_by(0.0);
        transform.translate_y_by(0.0);
        assert_eq!(*transform.matrix(), before);
    }

    #[test]
    fn rotation_and_translation_do_not_commute() {
        let mut rotate_first = Transform2D::new();
        rotate_first.rotate_by(FRAC_PI_3);
        rotate_first.translate_x_by(0.5);

        let mut translate_first = Transform2D::new();
        translate_first.translate_x_by(0.5);
        translate_first.rotate_by(FRAC_PI_3);

        // Order of the calls must not matter; only the final
        // accumulators do, and those are equal here.
        assert_eq!(*rotate_first.matrix(), *translate_first.matrix());

        // Whereas genuinely reversing the composition order changes
        // the matrix.
        let canonical = Mat4::rotation_z(FRAC_PI_3) * Mat4::translation(0.5, 0.0);
        let reversed = Mat4::translation(0.5, 0.0) * Mat4::rotation_z(FRAC_PI_3);
        assert_ne!(canonical, reversed);
    }

    #[test]
    fn shrink_then_translate_then_reset() {
        let mut transform = Transform2D::new();

        transform.scale_x_by(-0.05);
        assert_eq!(transform.scale_x(), 0.95);
        assert_eq!(transform.matrix()[(0, 0)], 0.95);
        let identity = Mat4::identity();
        for row in 0..4 {
            for column in 0..4 {
                if (row, column) != (0, 0) {
                    assert_eq!(transform.matrix()[(row, column)], identity[(row, column)]);
                }
            }
        }

        // Translation composes after the scale, so the offset lands in
        // the bottom row unscaled.
        transform.translate_x_by(0.1);
        assert_eq!(transform.matrix()[(3, 0)], 0.1);
        assert_eq!(transform.matrix()[(0, 0)], 0.95);
        assert_eq!(
            transform.matrix().transform_point([1.0, 0.0]),
            [0.95 + 0.1, 0.0]
        );

        transform.reset();
        assert_eq!(*transform.matrix(), Mat4::identity());
    }

    #[test]
    fn degenerate_scale_is_allowed() {
        let mut transform = Transform2D::new();
        transform.scale_x_by(-1.0);
        assert_eq!(transform.scale_x(), 0.0);
        assert_eq!(transform.matrix()[(0, 0)], 0.0);

        transform.scale_x_by(-0.5);
        assert_eq!(transform.scale_x(), -0.5);
        assert_eq!(transform.matrix()[(0, 0)], -0.5);
    }

    #[test]
    fn interleaved_mutations_match_direct_composition() {
        let mut transform = Transform2D::new();
        transform.rotate_by(0.25);
        transform.scale_x_by(-0.3);
        transform.translate_y_by(0.6);
        transform.scale_y_by(0.1);
        transform.translate_x_by(-0.2);
        transform.rotate_by(0.5);

        assert_eq!(
            *transform.matrix(),
            composed(0.7, 1.1, 0.75, -0.2, 0.6)
        );
    }

    #[quickcheck_macros::quickcheck]
    fn recomposition_is_drift_free(deltas: Vec<(u8, f64)>) {
        let mut transform = Transform2D::new();
        let (mut sx, mut sy, mut rotation, mut tx, mut ty) = (1.0, 1.0, 0.0, 0.0, 0.0);
        for (which, delta) in deltas {
            if !delta.is_finite() {
                continue;
            }
            match which % 5 {
                0 => {
                    transform.scale_x_by(delta);
                    sx += delta;
                }
                1 => {
                    transform.scale_y_by(delta);
                    sy += delta;
                }
                2 => {
                    transform.rotate_by(delta);
                    rotation += delta;
                }
                3 => {
                    transform.translate_x_by(delta);
                    tx += delta;
                }
                _ => {
                    transform.translate_y_by(delta);
                    ty += delta;
                }
            }
        }

        // Deltas large enough to overflow an accumulator would put NaN
        // into both matrices, which never compare equal.
        if ![sx, sy, rotation, tx, ty].iter().all(|v| v.is_finite()) {
            return;
        }
        assert_eq!(*transform.matrix(), composed(sx, sy, rotation, tx, ty));
    }

    #[quickcheck_macros::quickcheck]
    fn split_nudges_equal_one_big_nudge(half: f64) {
        if !(half + half).is_finite() {
            return;
        }
        let mut split = Transform2D::new();
        split.rotate_by(half);
        split.rotate_by(half);

        let mut whole = Transform2D::new();
        whole.rotate_by(half + half);

        assert_eq!(split.rotation(), whole.rotation());
        assert_eq!(*split.matrix(), *whole.matrix());
    }
}
