use crate::types::LevelPoint;

const Q_MARGIN: f64 = 1e-4;
const HALF_TOL: f64 = 2e-4;
const SLOPE_TOL: f64 = 1e-12;

pub fn contour_points(ta: f64, tb: f64, level: f64, sample_count: usize) -> Vec<LevelPoint> {
    let n = sample_count.max(2);
    let mut points = Vec::new();

    for i in 0..n {
        let q = Q_MARGIN + (1.0 - 2.0 * Q_MARGIN) * i as f64 / (n - 1) as f64;
        let u_light = 2.0 * ta * q;
        let u_shadow = 2.0 * tb * (1.0 - q);

        // Case I: both terms saturated (linear in u, singular at q = 0.5).
        if (q - 0.5).abs() > HALF_TOL {
            let u = (2.0 * level - ta * q * q - 2.0 * q + tb * (1.0 - q) * (1.0 - q))
                / (1.0 - 2.0 * q);
            if (0.0..=1.0).contains(&u) && u >= u_light && u >= u_shadow {
                points.push(LevelPoint { q, p: 1.0 - u });
            }
        }

        // Case II: light saturated, shadow not.
        let disc = tb * ((tb - ta) * q * q - 2.0 * q + 2.0 * level);
        if disc >= 0.0 {
            let root = disc.sqrt();
            for sign in [1.0, -1.0] {
                let u = 2.0 * tb * q + sign * 2.0 * root;
                if (0.0..=1.0).contains(&u) && u >= u_light && u < u_shadow {
                    points.push(LevelPoint { q, p: 1.0 - u });
                }
            }
        }

        // Case III: shadow saturated, light not.
        let disc = ta * ((ta - tb) * (1.0 - q) * (1.0 - q) + 2.0 * q - 2.0 * level);
        if disc >= 0.0 {
            let root = disc.sqrt();
            for sign in [1.0, -1.0] {
                let u = 2.0 * ta * (1.0 - q) + sign * 2.0 * root;
                if (0.0..=1.0).contains(&u) && u < u_light && u >= u_shadow {
                    points.push(LevelPoint { q, p: 1.0 - u });
                }
            }
        }

        // Case IV: neither saturated (degenerate when the slopes coincide).
        if (ta - tb).abs() > SLOPE_TOL {
            let u_sq = 8.0 * (level - q) * ta * tb / (ta - tb);
            if u_sq > 0.0 {
                let u = u_sq.sqrt();
                if u <= 1.0 && u < u_light && u < u_shadow {
                    points.push(LevelPoint { q, p: 1.0 - u });
                }
            }
        }
    }

    points
}
