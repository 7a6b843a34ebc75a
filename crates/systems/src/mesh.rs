use attractor_core::VectorField;
use thiserror::Error;

/// Errors that can occur when sampling a field over a planar mesh.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MeshError {
    #[error("field returned {found} components at ({x}, {y}), expected 2")]
    NotPlanar { x: f64, y: f64, found: usize },
}

/// The derivative of a planar field at one mesh point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Where the field was evaluated.
    pub point: [f64; 2],

    /// The field's value there.
    pub direction: [f64; 2],
}

impl Arrow {
    /// Returns the end of the arrow drawn `scale` times its direction from
    /// its point.
    #[must_use]
    pub fn tip(&self, scale: f64) -> [f64; 2] {
        let [x, y] = self.point;
        let [u, v] = self.direction;
        [x + scale * u, y + scale * v]
    }

    /// Returns the Euclidean length of the direction.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.direction[0].hypot(self.direction[1])
    }
}

/// Evaluates a planar `field` at time `t` on the mesh spanned by `xs` and `ys`.
///
/// Arrows come out row by row: every `x` for the first `y`, then every `x`
/// for the next, the order of a `meshgrid`. Either axis being empty gives an
/// empty field.
///
/// # Errors
///
/// Returns [`MeshError::NotPlanar`] at the first point where the field does
/// not return two components.
pub fn direction_field<F, P>(
    field: &F,
    xs: &[f64],
    ys: &[f64],
    t: f64,
    params: &P,
) -> Result<Vec<Arrow>, MeshError>
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
{
    let mut arrows = Vec::with_capacity(xs.len() * ys.len());
    for &y in ys {
        for &x in xs {
            let derivative = field.derivative(&[x, y], t, params);
            let &[u, v] = derivative.as_slice() else {
                return Err(MeshError::NotPlanar {
                    x,
                    y,
                    found: derivative.len(),
                });
            };
            arrows.push(Arrow {
                point: [x, y],
                direction: [u, v],
            });
        }
    }
    Ok(arrows)
}

/// Evaluates `f` on the mesh spanned by `xs` and `ys`.
///
/// Returns one row per `y`, each holding one value per `x`, ready for
/// contouring level sets such as those of a [`Liapunov`](crate::Liapunov)
/// function.
pub fn scalar_mesh(xs: &[f64], ys: &[f64], f: impl Fn([f64; 2]) -> f64) -> Vec<Vec<f64>> {
    ys.iter()
        .map(|&y| xs.iter().map(|&x| f([x, y])).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use attractor_core::linspace;

    use crate::{Liapunov, Linear2, LotkaVolterra, Lorenz, LorenzParams, Quadratic};

    #[test]
    fn saddle_field_matches_its_matrix() {
        let xs = linspace(-2.0, 2.0, 20);
        let ys = linspace(-2.0, 2.0, 20);

        let arrows = direction_field(&Linear2::saddle(), &xs, &ys, 0.0, &()).expect("planar");

        assert_eq!(arrows.len(), 400);
        for arrow in &arrows {
            let [x, y] = arrow.point;
            assert_eq!(arrow.direction, [2.0 * x, -y]);
        }
    }

    #[test]
    fn arrows_are_ordered_like_a_meshgrid() {
        let arrows =
            direction_field(&LotkaVolterra::default(), &[0.0, 1.0, 2.0], &[-1.0, 3.0], 0.0, &())
                .expect("planar");

        let points: Vec<[f64; 2]> = arrows.iter().map(|a| a.point).collect();
        assert_eq!(
            points,
            [
                [0.0, -1.0],
                [1.0, -1.0],
                [2.0, -1.0],
                [0.0, 3.0],
                [1.0, 3.0],
                [2.0, 3.0]
            ]
        );
        // x(1 − y), y(x − 1) at (2, 3).
        assert_eq!(arrows[5].direction, [-4.0, 3.0]);
    }

    #[test]
    fn equilibria_have_zero_arrows() {
        let arrows = direction_field(&LotkaVolterra::default(), &[0.0, 1.0], &[0.0, 1.0], 0.0, &())
            .expect("planar");

        assert_eq!(arrows[0].magnitude(), 0.0);
        assert_eq!(arrows[3].magnitude(), 0.0);
        assert!(arrows[1].magnitude() > 0.0);
    }

    #[test]
    fn tip_scales_the_direction() {
        let arrow = Arrow {
            point: [1.0, 1.0],
            direction: [3.0, -4.0],
        };

        assert_eq!(arrow.magnitude(), 5.0);
        assert_eq!(arrow.tip(0.5), [2.5, -1.0]);
    }

    #[test]
    fn spatial_fields_are_rejected() {
        let err = direction_field(&Lorenz, &[1.0], &[2.0], 0.0, &LorenzParams::default())
            .unwrap_err();

        assert_eq!(
            err,
            MeshError::NotPlanar {
                x: 1.0,
                y: 2.0,
                found: 0
            }
        );
    }

    #[test]
    fn empty_axes_give_empty_fields() {
        let arrows = direction_field(&Linear2::sink(), &[], &[0.0, 1.0], 0.0, &()).expect("planar");
        assert!(arrows.is_empty());
    }

    #[test]
    fn scalar_mesh_samples_liapunov_levels() {
        let xs = [-1.0, 0.0, 1.0, 2.0];
        let ys = [0.0, 1.0];

        let levels = scalar_mesh(&xs, &ys, |p| Quadratic.value(&p));

        assert_eq!(levels.len(), ys.len());
        assert!(levels.iter().all(|row| row.len() == xs.len()));
        assert_relative_eq!(levels[0][3], 2.0);
        assert_relative_eq!(levels[1][0], 1.0);
        assert_relative_eq!(levels[1][1], 0.5);
    }
}
