//! Sampled elevation data.

use rand::Rng;
use relief_paths::HeightSampler;

/// A dense lattice of elevation samples over the world ground plane.
///
/// Queries between sample points are bilinearly interpolated; queries
/// outside the covered area clamp to the border samples.
pub struct Heightfield {
    samples: Vec<f32>,
    cols: usize,
    rows: usize,
    sample_spacing: f32,
}

/// Parameters for [`Heightfield::generate`].
#[derive(Debug, Clone)]
pub struct HillConfig {
    /// Sample columns (world X axis).
    pub cols: usize,
    /// Sample rows (world Z axis).
    pub rows: usize,
    /// World distance between adjacent samples.
    pub sample_spacing: f32,
    /// Number of hills deposited on the initially flat surface.
    pub hills: usize,
    /// Hill radius range in world units.
    pub radius: (f32, f32),
    /// Hill peak height range in world units.
    pub height: (f32, f32),
}

impl Default for HillConfig {
    fn default() -> Self {
        Self {
            cols: 64,
            rows: 64,
            sample_spacing: 10.0,
            hills: 40,
            radius: (30.0, 120.0),
            height: (5.0, 40.0),
        }
    }
}

impl Heightfield {
    /// Build a heightfield by evaluating `f` at every sample point.
    pub fn from_fn(
        cols: usize,
        rows: usize,
        sample_spacing: f32,
        f: impl Fn(f32, f32) -> f32,
    ) -> Self {
        let mut samples = Vec::with_capacity(cols * rows);
        for iz in 0..rows {
            for ix in 0..cols {
                samples.push(f(ix as f32 * sample_spacing, iz as f32 * sample_spacing));
            }
        }
        Self {
            samples,
            cols,
            rows,
            sample_spacing,
        }
    }

    /// A uniform heightfield at the given elevation.
    pub fn flat(cols: usize, rows: usize, sample_spacing: f32, elevation: f32) -> Self {
        Self {
            samples: vec![elevation; cols * rows],
            cols,
            rows,
            sample_spacing,
        }
    }

    /// Deposit `cfg.hills` randomly placed smooth hills on a flat
    /// surface. Deterministic for a given `rng` state.
    pub fn generate<R: Rng>(rng: &mut R, cfg: &HillConfig) -> Self {
        let mut field = Self::flat(cfg.cols, cfg.rows, cfg.sample_spacing, 0.0);
        let extent_x = (cfg.cols.saturating_sub(1)) as f32 * cfg.sample_spacing;
        let extent_z = (cfg.rows.saturating_sub(1)) as f32 * cfg.sample_spacing;
        for _ in 0..cfg.hills {
            let cx = rng.random_range(0.0..=extent_x);
            let cz = rng.random_range(0.0..=extent_z);
            let radius = rng.random_range(cfg.radius.0..=cfg.radius.1);
            let height = rng.random_range(cfg.height.0..=cfg.height.1);
            for iz in 0..cfg.rows {
                for ix in 0..cfg.cols {
                    let dx = ix as f32 * cfg.sample_spacing - cx;
                    let dz = iz as f32 * cfg.sample_spacing - cz;
                    let t = 1.0 - (dx * dx + dz * dz) / (radius * radius);
                    if t > 0.0 {
                        field.samples[iz * cfg.cols + ix] += height * t * t;
                    }
                }
            }
        }
        field
    }

    /// Sample columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sample rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// World distance between adjacent samples.
    pub fn sample_spacing(&self) -> f32 {
        self.sample_spacing
    }

    #[inline]
    fn at(&self, ix: usize, iz: usize) -> f32 {
        self.samples[iz * self.cols + ix]
    }

    /// Interpolated elevation at world-plane coordinates `(x, z)`.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let gx = (x / self.sample_spacing).clamp(0.0, (self.cols - 1) as f32);
        let gz = (z / self.sample_spacing).clamp(0.0, (self.rows - 1) as f32);
        let ix = (gx.floor() as usize).min(self.cols.saturating_sub(2));
        let iz = (gz.floor() as usize).min(self.rows.saturating_sub(2));
        if self.cols == 1 || self.rows == 1 {
            // Degenerate lattice: nearest sample.
            return self.at(
                (gx.round() as usize).min(self.cols - 1),
                (gz.round() as usize).min(self.rows - 1),
            );
        }
        let fx = gx - ix as f32;
        let fz = gz - iz as f32;
        let h00 = self.at(ix, iz);
        let h10 = self.at(ix + 1, iz);
        let h01 = self.at(ix, iz + 1);
        let h11 = self.at(ix + 1, iz + 1);
        let bottom = h00 + (h10 - h00) * fx;
        let top = h01 + (h11 - h01) * fx;
        bottom + (top - bottom) * fz
    }
}

impl HeightSampler for Heightfield {
    fn sample(&self, x: f32, z: f32) -> f32 {
        self.height_at(x, z)
    }
}
