pub mod angles;
pub mod contour;
pub mod frame;
pub mod surface;
pub mod sweep;
pub mod types;

pub use angles::{
    deg_to_rad, julian_day, moment_from_datetime, normalize_angle, rad_to_deg, shadow_angles,
    solar_position,
};

pub use contour::contour_points;

pub use frame::{fill_outline, frame_rays};

pub use surface::{abar, abar_grid, closest_index, find_label_position, grid_axis};

pub use sweep::{example_scene, sweep_frames};

pub use types::{
    AbarGrid, CivilMoment, ExampleResult, FillOutline, FrameRays, LevelPoint, Location,
    SceneConfig, ShadowAngles, SolarPosition, SweepCell, SweepConfig, DEFAULT_LEVELS, EPS,
};
