//! The meteor streak pool.

use byeol_core::{Viewport, fade};
use rand::Rng;

use crate::chars::{METEOR_BOLD_CHARS, METEOR_FAINT_CHARS, ramp};
use crate::raster::CellGrid;

/// Number of meteors kept in the pool.
pub const METEOR_COUNT: usize = 5;

/// Per-tick probability of launching an idle meteor.
pub const LAUNCH_CHANCE: f64 = 0.01;

/// A single meteor streak.
///
/// Meteors alternate between two states: parked Inactive above the
/// upper-right corner with randomized parameters, and Active, flying along
/// a 45 degree down-left diagonal until they leave the viewport.
#[derive(Debug, Clone)]
pub struct Meteor {
    /// Head x position in pixels.
    pub x: f32,
    /// Head y position in pixels.
    pub y: f32,
    /// Trail length in pixels.
    pub trail_len: f32,
    /// Per-tick displacement along each axis.
    pub speed: f32,
    /// Stroke width in pixels.
    pub stroke_width: f32,
    /// Whether the meteor is currently flying.
    pub active: bool,
}

impl Meteor {
    /// Randomize a meteor into its parked, inactive state.
    ///
    /// The spawn region extends past the right edge and above the top edge
    /// so an activated meteor streaks in from off screen.
    pub fn reset(viewport: &Viewport, rng: &mut impl Rng) -> Self {
        let w = viewport.width_f().max(1.0);
        let h = viewport.height_f().max(1.0);
        Self {
            x: rng.gen_range(0.5 * w..1.5 * w),
            y: rng.gen_range(-0.5 * h..0.0),
            trail_len: rng.gen_range(10.0..90.0),
            speed: rng.gen_range(6.0..16.0),
            stroke_width: rng.gen_range(0.5..1.5),
            active: false,
        }
    }

    /// Switch a parked meteor to its flying state.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Advance one tick; once fully off screen, re-randomize and park.
    pub fn update(&mut self, viewport: &Viewport, rng: &mut impl Rng) {
        if !self.active {
            return;
        }
        self.x -= self.speed;
        self.y += self.speed;
        if self.x < -self.trail_len || self.y > viewport.height_f() + self.trail_len {
            *self = Self::reset(viewport, rng);
        }
    }

    /// Stroke the streak with a head-to-tail fade.
    pub fn draw(&self, grid: &mut CellGrid) {
        if !self.active {
            return;
        }
        let head = (self.x, self.y);
        let tail = (self.x + self.trail_len, self.y - self.trail_len);
        let chars = if self.stroke_width < 1.0 {
            METEOR_FAINT_CHARS
        } else {
            METEOR_BOLD_CHARS
        };
        grid.stroke_px(head, tail, |t| {
            let alpha = 1.0 - t;
            (ramp(chars, alpha), fade(255, 255, 255, alpha))
        });
    }
}

/// Fixed-size pool of meteors launched at random intervals.
#[derive(Debug, Default)]
pub struct MeteorPool {
    meteors: Vec<Meteor>,
}

impl MeteorPool {
    /// Create a pool of [`METEOR_COUNT`] parked meteors.
    pub fn new(viewport: &Viewport, rng: &mut impl Rng) -> Self {
        Self {
            meteors: (0..METEOR_COUNT)
                .map(|_| Meteor::reset(viewport, rng))
                .collect(),
        }
    }

    /// Advance every meteor one tick.
    pub fn update(&mut self, viewport: &Viewport, rng: &mut impl Rng) {
        for meteor in &mut self.meteors {
            meteor.update(viewport, rng);
        }
    }

    /// Draw every flying meteor.
    pub fn draw(&self, grid: &mut CellGrid) {
        for meteor in &self.meteors {
            meteor.draw(grid);
        }
    }

    /// Roll the launch trigger.
    ///
    /// When the roll succeeds, the first parked meteor in stable order is
    /// activated; a fully airborne pool drops the trigger silently. Returns
    /// whether a meteor was actually activated.
    pub fn try_launch(&mut self, rng: &mut impl Rng) -> bool {
        if !rng.gen_bool(LAUNCH_CHANCE) {
            return false;
        }
        match self.meteors.iter_mut().find(|m| !m.active) {
            Some(meteor) => {
                meteor.activate();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Meteor> {
        self.meteors.iter()
    }

    pub fn len(&self) -> usize {
        self.meteors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meteors.is_empty()
    }
}
