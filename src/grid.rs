//! Rectangular cloth meshes built straight into a [`Scene`].

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::scene::{ParticleHandle, Scene};
use crate::vec::Vec2;
use alloc::vec::Vec;

/// Layout of a cloth grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<F: Float> {
    /// Position of the top-left particle.
    pub origin: Vec2<F>,
    pub rows: usize,
    pub cols: usize,
    pub spacing: F,
    /// Anchor particles of the top row.
    pub pin_top: bool,
    /// With `pin_top`, every `pin_stride`-th column of the top row is pinned,
    /// plus the last column.
    pub pin_stride: usize,
}

impl<F: Float> GridConfig<F> {
    /// An unpinned grid.
    pub fn new(origin: Vec2<F>, rows: usize, cols: usize, spacing: F) -> Self {
        GridConfig { origin, rows, cols, spacing, pin_top: false, pin_stride: 4 }
    }

    /// Pin the top row every `stride` columns.
    pub fn with_pinned_top(mut self, stride: usize) -> Self {
        self.pin_top = true;
        self.pin_stride = stride;
        self
    }

    fn validate(&self) -> Result<(), PhysicsError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PhysicsError::InvalidGridDimensions { rows: self.rows, cols: self.cols });
        }
        if !self.spacing.is_finite() || self.spacing <= F::zero() {
            return Err(PhysicsError::InvalidSpacing);
        }
        if self.pin_top && self.pin_stride == 0 {
            return Err(PhysicsError::InvalidPinStride);
        }
        Ok(())
    }

    fn is_anchor(&self, row: usize, col: usize) -> bool {
        self.pin_top && row == 0 && (col % self.pin_stride == 0 || col == self.cols - 1)
    }
}

/// Add a `rows x cols` mesh to `scene`.
///
/// Particle `(row, col)` is placed at `origin + (col, row) * spacing` and is
/// returned at index `row * cols + col`. Neighbours along each row and each
/// column are linked; there is no diagonal bracing, so the mesh shears freely.
pub fn build_grid<F: Float>(
    scene: &mut Scene<F>,
    config: &GridConfig<F>,
) -> Result<Vec<ParticleHandle>, PhysicsError> {
    config.validate()?;
    let GridConfig { origin, rows, cols, spacing, .. } = *config;

    let mut handles = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let x = origin.x + F::from_f32(col as f32) * spacing;
            let y = origin.y + F::from_f32(row as f32) * spacing;
            let mut particle = Particle::new(Vec2::new(x, y));
            particle.pinned = config.is_anchor(row, col);
            handles.push(scene.insert_particle(particle));
        }
    }

    // Horizontal
    for row in 0..rows {
        for col in 0..(cols - 1) {
            let a = handles[row * cols + col];
            let b = handles[row * cols + col + 1];
            scene.add_constraint(a, b)?;
        }
    }

    // Vertical
    for row in 0..(rows - 1) {
        for col in 0..cols {
            let a = handles[row * cols + col];
            let b = handles[(row + 1) * cols + col];
            scene.add_constraint(a, b)?;
        }
    }

    tracing::debug!(rows, cols, "grid built");
    Ok(handles)
}
