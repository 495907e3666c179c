//! ParticleGrid - one particle per block of the canvas, row-major
//!
//! Built wholesale from a bitmap; membership never changes afterwards.
//! Any resize or new image goes through `build` again and the previous
//! generation (including in-flight disturbance) is dropped.

use crate::core::math::Vec2;
use crate::domain::bitmap::Bitmap;
use crate::domain::layout::CanvasSize;
use crate::systems::logo_mask::LogoMask;
use crate::systems::particle::Particle;

#[derive(Clone, Debug, Default)]
pub struct ParticleGrid {
    canvas: CanvasSize,
    block_size: u32,
    columns: u32,
    rows: u32,
    generation: u32,
    pub(crate) particles: Vec<Particle>,
}

impl ParticleGrid {
    /// Sample `bitmap` (stretched over `canvas`) at each block's center and
    /// create one particle per block, classifying it with `mask`.
    pub fn build(
        bitmap: &Bitmap,
        canvas: CanvasSize,
        block_size: u32,
        mask: &LogoMask,
        generation: u32,
    ) -> Self {
        let block_size = block_size.max(1);
        let columns = blocks_along(canvas.width, block_size);
        let rows = blocks_along(canvas.height, block_size);
        let half = block_size / 2;
        let (w, h) = (canvas.width as f32, canvas.height as f32);

        let mut particles = Vec::with_capacity(columns as usize * rows as usize);
        for row in 0..rows {
            let y = row.saturating_mul(block_size);
            let sample_y = y.saturating_add(half).min(canvas.height.saturating_sub(1));
            for col in 0..columns {
                let x = col.saturating_mul(block_size);
                let sample_x = x.saturating_add(half).min(canvas.width.saturating_sub(1));

                let color = bitmap.sample_stretched(sample_x, sample_y, canvas.width, canvas.height);
                let anchored = mask.is_anchored(x as f32, y as f32, w, h);
                particles.push(Particle::new(
                    Vec2::new(x as f32, y as f32),
                    color,
                    block_size,
                    anchored,
                ));
            }
        }

        Self {
            canvas,
            block_size,
            columns,
            rows,
            generation,
            particles,
        }
    }

    pub fn canvas(&self) -> CanvasSize { self.canvas }

    pub fn block_size(&self) -> u32 { self.block_size }

    pub fn columns(&self) -> u32 { self.columns }

    pub fn rows(&self) -> u32 { self.rows }

    pub fn generation(&self) -> u32 { self.generation }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Row-major, read-only; only the simulation moves particles
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Particle for block (col, row)
    pub fn get(&self, col: u32, row: u32) -> Option<&Particle> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.particles.get((row * self.columns + col) as usize)
    }

    pub fn anchored_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_anchored()).count()
    }

    pub fn disturbed_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_disturbed()).count()
    }

    /// Put every particle back at its origin, at rest
    pub fn reset(&mut self) {
        for p in self.particles.iter_mut() {
            p.reset();
        }
    }
}

/// Blocks needed to cover `extent` pixels (last one may be partial)
fn blocks_along(extent: u32, block_size: u32) -> u32 {
    extent.div_ceil(block_size)
}
