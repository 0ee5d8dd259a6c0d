use shadow_painter::contour::contour_points;
use shadow_painter::surface::abar;

// ── Points lie on the curve ──

#[test]
fn test_points_satisfy_level_equation() {
    let cases: &[(f64, f64, f64)] = &[
        (1.2, 0.35, 0.5),
        (1.2, 0.35, 0.25),
        (1.2, 0.35, 0.75),
        (0.8, 0.1, 0.5),
        (2.5, 0.6, 0.5),
    ];
    for &(ta, tb, level) in cases {
        let points = contour_points(ta, tb, level, 800);
        assert!(
            !points.is_empty(),
            "no points for ta={} tb={} level={}",
            ta, tb, level
        );
        for at in &points {
            let residual = (abar(at.q, at.p, ta, tb) - level).abs();
            assert!(
                residual < 1e-3,
                "off-curve point ({}, {}) for ta={} tb={} level={}: residual {}",
                at.q, at.p, ta, tb, level, residual
            );
        }
    }
}

// ── Output domain ──

#[test]
fn test_points_stay_inside_unit_square() {
    let points = contour_points(1.2, 0.35, 0.5, 400);
    for at in &points {
        assert!(at.q > 0.0 && at.q < 1.0, "q={}", at.q);
        assert!(at.p >= 0.0 && at.p <= 1.0, "p={}", at.p);
    }
}

#[test]
fn test_q_sampling_margin() {
    let points = contour_points(1.2, 0.35, 0.5, 400);
    for at in &points {
        assert!(at.q >= 1e-4 && at.q <= 1.0 - 1e-4, "q={}", at.q);
    }
}

// ── Degenerate branches are silently skipped ──

#[test]
fn test_equal_slopes_skip_shared_branch() {
    // ta == tb removes the closed form for the doubly-unsaturated regime; any
    // point the remaining branches emit must still sit on the curve.
    let points = contour_points(0.5, 0.5, 0.5, 200);
    for at in &points {
        let residual = (abar(at.q, at.p, 0.5, 0.5) - 0.5).abs();
        assert!(residual < 1e-3, "residual {}", residual);
    }
}

#[test]
fn test_level_above_surface_yields_nothing() {
    // Abar never reaches 2.
    assert!(contour_points(1.2, 0.35, 2.0, 400).is_empty());
}

// ── Determinism ──

#[test]
fn test_contour_idempotent() {
    let a = contour_points(1.2, 0.35, 0.5, 300);
    let b = contour_points(1.2, 0.35, 0.5, 300);
    assert_eq!(a, b);
}

// ── Branch coverage ──

#[test]
fn test_curve_spans_both_regimes() {
    // For a steep light ray and shallow shadow ray the 0.5-isoline runs from
    // the doubly-saturated regime near the bottom of the frame up into the
    // doubly-unsaturated regime near the top.
    let points = contour_points(1.2, 0.35, 0.5, 800);
    assert!(points.iter().any(|at| at.p < 0.2), "no low-p points");
    assert!(
        points.iter().any(|at| at.p > 0.7 && at.q > 0.45 && at.q < 0.5),
        "no high-p points near q=level"
    );
}
