pub const EPS: f64 = 1e-15;

pub const DEFAULT_LEVELS: [f64; 3] = [0.25, 0.5, 0.75];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub utc_offset_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub julian_day: f64,
    pub declination: f64,
    pub equation_of_time: f64,
    pub true_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub elevation: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowAngles {
    pub alpha: f64,
    pub beta: f64,
    pub tan_alpha: f64,
    pub tan_beta: f64,
    pub shadow_length: f64,
    pub rho: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub location: Location,
    pub observer_distance: f64,
    pub eye_height: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        // Fortaleza, fixed UTC-3
        Self {
            location: Location {
                latitude_deg: -3.731862,
                longitude_deg: -38.526669,
                utc_offset_hours: -3.0,
            },
            observer_distance: 3.0,
            eye_height: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbarGrid {
    pub q_vals: Vec<f64>,
    pub p_vals: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelPoint {
    pub q: f64,
    pub p: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameRays {
    pub light: Vec<(f64, f64)>,
    pub shadow: Vec<(f64, f64)>,
    pub junction_upper: (f64, f64),
    pub junction_lower: (f64, f64),
    pub xi_max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FillOutline {
    pub shade: Vec<(f64, f64)>,
    pub lit: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub year: i32,
    pub day: u32,
    pub minute: u32,
    pub pole_height: f64,
    pub month_min: u32,
    pub month_max: u32,
    pub month_step: u32,
    pub hour_min: u32,
    pub hour_max: u32,
    pub hour_step: u32,
    pub p_min: f64,
    pub p_max: f64,
    pub abar_target: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            year: 2026,
            day: 1,
            minute: 0,
            pole_height: 10.0,
            month_min: 1,
            month_max: 12,
            month_step: 1,
            hour_min: 6,
            hour_max: 17,
            hour_step: 1,
            p_min: 0.0,
            p_max: 1.0,
            abar_target: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepCell {
    pub month: u32,
    pub hour: u32,
    pub q: f64,
    pub p: f64,
    pub tan_alpha: f64,
    pub tan_beta: f64,
    pub rays: FrameRays,
    pub outline: FillOutline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExampleResult {
    pub position: SolarPosition,
    pub shadow: Option<ShadowAngles>,
    pub abar_at_selection: Option<f64>,
    pub contour_count: usize,
    pub label: Option<LevelPoint>,
    pub rays: Option<FrameRays>,
}
