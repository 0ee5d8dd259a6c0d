use crate::types::{FillOutline, FrameRays, EPS};

pub fn frame_rays(q: f64, p: f64, ta: f64, tb: f64, sample_count: usize) -> FrameRays {
    let n = sample_count.max(2);
    let u = 1.0 - p;

    // Light segment, 0 -> q
    let mut light = Vec::with_capacity(n);
    for i in 0..n {
        let xi = q * i as f64 / (n - 1) as f64;
        let eta = (ta * (q - xi) + 0.5 * (1.0 + p)).clamp(0.0, 1.0);
        light.push((xi, eta));
    }

    // Shadow segment, q -> xi_max; truncated when the gap closes before x = 1.
    let mut xi_max = 1.0;
    if u < 2.0 * tb * (1.0 - q) {
        xi_max = (q + u / (2.0 * (tb + EPS))).min(1.0);
    }

    let mut shadow = Vec::with_capacity(n);
    for i in 0..n {
        let xi = q + (xi_max - q) * i as f64 / (n - 1) as f64;
        let eta = (tb * (q - xi) + 0.5 * (1.0 - p)).clamp(0.0, 1.0);
        shadow.push((xi, eta));
    }

    FrameRays {
        light,
        shadow,
        junction_upper: (q, 0.5 * (1.0 + p)),
        junction_lower: (q, 0.5 * (1.0 - p)),
        xi_max,
    }
}

pub fn fill_outline(rays: &FrameRays) -> FillOutline {
    if rays.light.is_empty() || rays.shadow.is_empty() {
        return FillOutline {
            shade: Vec::new(),
            lit: Vec::new(),
        };
    }

    // Last light sample still pinned to the top edge; the start of the
    // segment when the ray never clamps.
    let mut depart = 0;
    for (i, &(_, eta)) in rays.light.iter().enumerate() {
        if (1.0 - eta).abs() < 1e-12 {
            depart = i;
        }
    }

    let l0 = rays.light[depart];
    let ln = rays.light[rays.light.len() - 1];
    let s0 = rays.shadow[0];
    let sn = rays.shadow[rays.shadow.len() - 1];

    let mut shade = Vec::new();
    if l0.1 > 0.999_999_9 {
        shade.push((0.0, 1.0));
    }
    shade.extend([l0, ln, s0, sn]);
    if sn.1 > 1e-12 {
        shade.push((1.0, 0.0));
    }
    shade.push((0.0, 0.0));

    let mut lit = vec![l0, ln, s0, sn];
    if sn.0 < 1.0 {
        lit.push((1.0, 0.0));
    }
    lit.push((1.0, 1.0));
    if l0.0 < 1e-12 {
        lit.push((0.0, 1.0));
    }

    FillOutline { shade, lit }
}
