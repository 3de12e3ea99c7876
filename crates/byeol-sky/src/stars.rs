//! The ambient star population.

use byeol_core::{Rgba, Viewport, fade};
use rand::Rng;

use crate::chars::{LINK_CHARS, STAR_CHARS, ramp};
use crate::raster::CellGrid;

/// Pixels of viewport width per spawned star.
const STAR_SPACING_PX: u32 = 10;

/// Largest star radius handed out at spawn.
const MAX_RADIUS: f32 = 2.0;

/// Tint shared by every star; only the alpha varies.
const STAR_TINT: (u8, u8, u8) = (174, 194, 224);

/// Tint of the pointer links.
const LINK_TINT: (u8, u8, u8) = (0, 198, 255);

/// Pointer distance, in pixels, beyond which no link is drawn.
pub const LINK_RADIUS_PX: f32 = 150.0;

/// One drifting background star.
#[derive(Debug, Clone)]
pub struct Star {
    /// Current x position in pixels.
    pub x: f32,
    /// Current y position in pixels.
    pub y: f32,
    /// Per-tick x displacement.
    pub vx: f32,
    /// Per-tick y displacement.
    pub vy: f32,
    /// Radius in pixels, in [0, 2).
    pub radius: f32,
    /// Fixed tint with a randomized alpha.
    pub color: Rgba,
}

impl Star {
    /// Spawn a star uniformly over the viewport.
    pub fn spawn(viewport: &Viewport, rng: &mut impl Rng) -> Self {
        let alpha = rng.gen_range(0.3..0.8);
        Self {
            x: rng.gen_range(0.0..viewport.width_f().max(1.0)),
            y: rng.gen_range(0.0..viewport.height_f().max(1.0)),
            vx: rng.gen_range(-0.1..0.1),
            vy: rng.gen_range(-0.1..0.1),
            radius: rng.gen_range(0.0..MAX_RADIUS),
            color: Rgba::new(STAR_TINT.0, STAR_TINT.1, STAR_TINT.2, alpha),
        }
    }

    /// Advance one tick, wrapping back into the viewport.
    ///
    /// Wraparound keeps both coordinates within [0, dimension) rather than
    /// reflecting at the edges.
    pub fn update(&mut self, viewport: &Viewport) {
        self.x = (self.x + self.vx).rem_euclid(viewport.width_f().max(1.0));
        self.y = (self.y + self.vy).rem_euclid(viewport.height_f().max(1.0));
    }

    /// Plot the star into the frame grid.
    pub fn draw(&self, grid: &mut CellGrid) {
        let ch = ramp(STAR_CHARS, self.radius / MAX_RADIUS);
        grid.plot_px(self.x, self.y, ch, self.color.to_color());
    }

    /// Stroke a link toward the pointer when it is close enough.
    ///
    /// The link fades linearly with distance: fully opaque on top of the
    /// pointer, invisible at [`LINK_RADIUS_PX`].
    pub fn draw_link(&self, grid: &mut CellGrid, px: f32, py: f32) {
        let dist = ((self.x - px).powi(2) + (self.y - py).powi(2)).sqrt();
        if dist >= LINK_RADIUS_PX {
            return;
        }
        let alpha = link_alpha(dist);
        let ch = ramp(LINK_CHARS, alpha);
        let color = fade(LINK_TINT.0, LINK_TINT.1, LINK_TINT.2, alpha);
        grid.stroke_px((self.x, self.y), (px, py), |_| (ch, color));
    }
}

/// Opacity of a pointer link at the given distance.
pub fn link_alpha(dist: f32) -> f32 {
    (1.0 - dist / LINK_RADIUS_PX).max(0.0)
}

/// The full set of ambient stars.
#[derive(Debug, Default)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Number of stars for a viewport: one per ten pixels of width.
    pub fn star_count(viewport: &Viewport) -> usize {
        (viewport.width / STAR_SPACING_PX) as usize
    }

    /// Populate a field sized to the viewport.
    pub fn new(viewport: &Viewport, rng: &mut impl Rng) -> Self {
        Self::spawn(Self::star_count(viewport), viewport, rng)
    }

    /// Populate a field with an explicit star count.
    pub fn spawn(count: usize, viewport: &Viewport, rng: &mut impl Rng) -> Self {
        Self {
            stars: (0..count).map(|_| Star::spawn(viewport, rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Star> {
        self.stars.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_star_count_follows_viewport_width() {
        let viewport = Viewport::new(1000, 800);
        assert_eq!(StarField::star_count(&viewport), 100);

        let mut rng = SmallRng::seed_from_u64(1);
        let field = StarField::new(&viewport, &mut rng);
        assert_eq!(field.len(), 100);
    }

    #[test]
    fn test_spawn_parameters_are_in_range() {
        let viewport = Viewport::new(1000, 800);
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..500 {
            let star = Star::spawn(&viewport, &mut rng);
            assert!(star.x >= 0.0 && star.x < 1000.0);
            assert!(star.y >= 0.0 && star.y < 800.0);
            assert!(star.vx >= -0.1 && star.vx < 0.1);
            assert!(star.vy >= -0.1 && star.vy < 0.1);
            assert!(star.radius >= 0.0 && star.radius < 2.0);
            assert!(star.color.a >= 0.3 && star.color.a < 0.8);
        }
    }

    #[test]
    fn test_update_keeps_stars_inside_viewport() {
        let viewport = Viewport::new(100, 50);
        let mut rng = SmallRng::seed_from_u64(3);
        let mut field = StarField::new(&viewport, &mut rng);
        for _ in 0..10_000 {
            for star in field.iter_mut() {
                star.update(&viewport);
                assert!(star.x >= 0.0 && star.x < 100.0);
                assert!(star.y >= 0.0 && star.y < 50.0);
            }
        }
    }

    #[test]
    fn test_update_wraps_to_opposite_edge() {
        let viewport = Viewport::new(100, 50);
        let mut star = Star {
            x: 0.05,
            y: 49.95,
            vx: -0.1,
            vy: 0.1,
            radius: 1.0,
            color: Rgba::new(174, 194, 224, 0.5),
        };
        star.update(&viewport);
        assert!(star.x > 99.0, "left exit wraps to the right edge");
        assert!(star.y < 1.0, "bottom exit wraps to the top edge");
    }

    #[test]
    fn test_link_alpha_fades_with_distance() {
        assert_eq!(link_alpha(0.0), 1.0);
        assert_eq!(link_alpha(150.0), 0.0);
        assert_eq!(link_alpha(300.0), 0.0);

        let mut prev = link_alpha(0.0);
        for step in 1..=15 {
            let alpha = link_alpha(step as f32 * 10.0);
            assert!(alpha < prev, "alpha must decrease monotonically");
            prev = alpha;
        }
    }

    #[test]
    fn test_link_drawn_at_full_opacity_on_pointer() {
        let mut grid = CellGrid::new(80, 24);
        let star = Star {
            x: 500.0,
            y: 200.0,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
            color: Rgba::new(174, 194, 224, 0.5),
        };
        // Pointer exactly on the star: distance 0, alpha 1.
        star.draw_link(&mut grid, 500.0, 200.0);
        let (ch, color) = grid.cell(62, 12).expect("link cell plotted");
        assert_eq!(ch, '•');
        assert_eq!(color, ratatui::style::Color::Rgb(0, 198, 255));
    }

    #[test]
    fn test_no_link_beyond_radius() {
        let mut grid = CellGrid::new(80, 24);
        let star = Star {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
            color: Rgba::new(174, 194, 224, 0.5),
        };
        star.draw_link(&mut grid, 150.0, 0.0);
        assert!((0..80).all(|col| (0..24).all(|row| grid.cell(col, row).is_none())));
    }
}
