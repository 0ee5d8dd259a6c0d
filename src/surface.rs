use rayon::prelude::*;

use crate::types::{AbarGrid, LevelPoint, EPS};

pub fn abar(q: f64, p: f64, ta: f64, tb: f64) -> f64 {
    let u = 1.0 - p;

    // Light
    let light = if u >= 2.0 * ta * q {
        0.5 * q * (ta * q + 2.0 - u)
    } else {
        q - u * u / (8.0 * (ta + EPS))
    };

    // Shadow
    let shadow = if u >= 2.0 * tb * (1.0 - q) {
        0.5 * (1.0 - q) * (u - tb * (1.0 - q))
    } else {
        u * u / (8.0 * (tb + EPS))
    };

    light + shadow
}

pub fn abar_grid(q_vals: &[f64], p_vals: &[f64], ta: f64, tb: f64) -> AbarGrid {
    // Rows are independent, no cell reads another.
    let z: Vec<Vec<f64>> = p_vals
        .par_iter()
        .map(|&p| q_vals.iter().map(|&q| abar(q, p, ta, tb)).collect())
        .collect();

    AbarGrid {
        q_vals: q_vals.to_vec(),
        p_vals: p_vals.to_vec(),
        z,
    }
}

pub fn grid_axis(n: usize) -> Vec<f64> {
    let n = n.max(2);
    (0..n)
        .map(|i| 0.001 + 0.998 * i as f64 / (n - 1) as f64)
        .collect()
}

pub fn closest_index(vals: &[f64], target: f64) -> usize {
    let mut min_idx = 0;
    let mut min_diff = f64::INFINITY;
    for (i, &v) in vals.iter().enumerate() {
        let diff = (v - target).abs();
        if diff < min_diff {
            min_idx = i;
            min_diff = diff;
        }
    }
    min_idx
}

pub fn find_label_position(
    grid: &AbarGrid,
    level: f64,
    target_q: f64,
    target_p: f64,
) -> Option<LevelPoint> {
    let (found, best) = scan_crossings(grid, level, target_q, target_p, true);
    if !found {
        return None;
    }
    if best.is_some() {
        return best;
    }
    // Crossings exist but every cell center sat outside the inner box;
    // fall back to the best crossing without the bounds constraint.
    scan_crossings(grid, level, target_q, target_p, false).1
}

fn scan_crossings(
    grid: &AbarGrid,
    level: f64,
    target_q: f64,
    target_p: f64,
    restrict: bool,
) -> (bool, Option<LevelPoint>) {
    const INNER_MIN: f64 = 0.05;
    const INNER_MAX: f64 = 0.95;

    let nq = grid.q_vals.len();
    let np = grid.p_vals.len();

    let mut found = false;
    let mut best = None;
    let mut best_score = f64::INFINITY;

    for i in 0..np.saturating_sub(1) {
        for j in 0..nq.saturating_sub(1) {
            let f00 = grid.z[i][j] - level;
            let f01 = grid.z[i][j + 1] - level;
            let f10 = grid.z[i + 1][j] - level;
            let f11 = grid.z[i + 1][j + 1] - level;

            let min_f = f00.min(f01).min(f10).min(f11);
            let max_f = f00.max(f01).max(f10).max(f11);

            // No sign change, the level curve does not cross this cell.
            if min_f > 0.0 || max_f < 0.0 {
                continue;
            }
            found = true;

            let qc = 0.5 * (grid.q_vals[j] + grid.q_vals[j + 1]);
            let pc = 0.5 * (grid.p_vals[i] + grid.p_vals[i + 1]);

            if restrict && (qc < INNER_MIN || qc > INNER_MAX || pc < INNER_MIN || pc > INNER_MAX)
            {
                continue;
            }

            let dq = qc - target_q;
            let dp = pc - target_p;
            // Near the target, with a mild bias toward higher p.
            let score = dq * dq + dp * dp + 0.02 * (1.0 - pc);

            if score < best_score {
                best_score = score;
                best = Some(LevelPoint { q: qc, p: pc });
            }
        }
    }

    (found, best)
}
