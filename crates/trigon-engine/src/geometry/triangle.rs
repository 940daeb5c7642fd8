use super::Vertex;

/// √3 to `f32` precision. `f32::sqrt` is not usable in constants.
pub const SQRT_3: f32 = 1.732_050_8;

pub const TRIANGLE_VERTEX_COUNT: u32 = 3;

/// Equilateral triangle with unit side length, centroid at the origin.
///
/// Lower corners sit a third of the height below the origin, the upper corner
/// two thirds above it.
pub const EQUILATERAL_TRIANGLE: [Vertex; TRIANGLE_VERTEX_COUNT as usize] = [
    Vertex::new(-0.5, -0.5 * SQRT_3 / 3.0, 0.0),    // lower left
    Vertex::new(0.5, -0.5 * SQRT_3 / 3.0, 0.0),     // lower right
    Vertex::new(0.0, 0.5 * SQRT_3 * 2.0 / 3.0, 0.0), // upper
];

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn sqrt_constant_matches_runtime_sqrt() {
        assert!((SQRT_3 - 3.0f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn sides_are_equal_and_unit_length() {
        let [a, b, c] = EQUILATERAL_TRIANGLE;
        for side in [a.distance(b), b.distance(c), c.distance(a)] {
            assert!((side - 1.0).abs() < EPS, "side = {side}");
        }
    }

    #[test]
    fn centroid_is_origin() {
        let sum = EQUILATERAL_TRIANGLE
            .iter()
            .fold([0.0f32; 3], |acc, v| [acc[0] + v.pos[0], acc[1] + v.pos[1], acc[2] + v.pos[2]]);
        for axis in sum {
            assert!((axis / 3.0).abs() < EPS);
        }
    }

    #[test]
    fn fits_in_ndc() {
        for v in EQUILATERAL_TRIANGLE {
            for axis in v.pos {
                assert!((-1.0..=1.0).contains(&axis));
            }
        }
    }

    #[test]
    fn base_is_horizontal_and_apex_on_axis() {
        let [a, b, c] = EQUILATERAL_TRIANGLE;
        assert_eq!(a.pos[1], b.pos[1]);
        assert_eq!(c.pos[0], 0.0);
        assert!(c.pos[1] > a.pos[1]);
    }

    #[test]
    fn nine_floats_in_buffer() {
        let flat: &[f32] = bytemuck::cast_slice(&EQUILATERAL_TRIANGLE);
        assert_eq!(flat.len(), 9);
    }
}
