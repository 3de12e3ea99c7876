//! Frame-by-frame orchestration of the sky.

use byeol_core::{Pointer, Viewport};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::{Frame, widgets::Paragraph};

use crate::meteors::MeteorPool;
use crate::raster::{CELL_HEIGHT_PX, CELL_WIDTH_PX, CellGrid};
use crate::stars::StarField;

/// Owns both animated populations and the per-frame update order.
#[derive(Debug)]
pub struct SkyState {
    /// Pixel dimensions derived from the frame area.
    viewport: Viewport,
    /// Ambient drifting stars.
    stars: StarField,
    /// Meteor streak pool.
    meteors: MeteorPool,
    /// Random source for spawning and the launch trigger.
    rng: SmallRng,
}

impl SkyState {
    /// Create an empty sky; the populations spawn on the first frame.
    ///
    /// A fixed seed reproduces the same sky every run.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            viewport: Viewport::default(),
            stars: StarField::default(),
            meteors: MeteorPool::default(),
            rng,
        }
    }

    /// Advance the simulation one tick and render it into the frame.
    pub fn render(&mut self, frame: &mut Frame, pointer: &Pointer) {
        let area = frame.area();
        let width = (area.width as f32 * CELL_WIDTH_PX) as u32;
        let height = (area.height as f32 * CELL_HEIGHT_PX) as u32;

        // Respawn the populations when the surface changes size.
        if (width, height) != (self.viewport.width, self.viewport.height)
            || self.meteors.is_empty()
        {
            self.viewport.resize(width, height);
            self.stars = StarField::new(&self.viewport, &mut self.rng);
            self.meteors = MeteorPool::new(&self.viewport, &mut self.rng);
        }

        let mut grid = CellGrid::new(area.width, area.height);

        for star in self.stars.iter_mut() {
            star.update(&self.viewport);
            star.draw(&mut grid);
            if let Some((px, py)) = pointer.pos() {
                star.draw_link(&mut grid, px, py);
            }
        }

        self.meteors.update(&self.viewport, &mut self.rng);
        self.meteors.draw(&mut grid);
        self.meteors.try_launch(&mut self.rng);

        frame.render_widget(Paragraph::new(grid.into_lines()), area);
    }

    /// The current star population.
    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    /// The current meteor pool.
    pub fn meteors(&self) -> &MeteorPool {
        &self.meteors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meteors::METEOR_COUNT;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_first_frame_spawns_populations() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut sky = SkyState::new(Some(7));
        let pointer = Pointer::new();

        terminal.draw(|frame| sky.render(frame, &pointer)).unwrap();

        // 80 cells at 8 px each is 640 px of width, one star per 10 px.
        assert_eq!(sky.stars().len(), 64);
        assert_eq!(sky.meteors().len(), METEOR_COUNT);
    }

    #[test]
    fn test_resize_respawns_populations() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut sky = SkyState::new(Some(8));
        let pointer = Pointer::new();
        terminal.draw(|frame| sky.render(frame, &pointer)).unwrap();
        assert_eq!(sky.stars().len(), 64);

        terminal.backend_mut().resize(120, 30);
        terminal.draw(|frame| sky.render(frame, &pointer)).unwrap();
        assert_eq!(sky.stars().len(), 96);
    }

    #[test]
    fn test_render_with_pointer_present_is_stable() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let mut sky = SkyState::new(Some(9));
        let mut pointer = Pointer::new();
        pointer.set(160.0, 96.0);

        // Many ticks with the pointer parked mid-screen; nothing panics and
        // the populations keep their sizes.
        for _ in 0..1000 {
            terminal.draw(|frame| sky.render(frame, &pointer)).unwrap();
        }
        assert_eq!(sky.stars().len(), 32);
        assert_eq!(sky.meteors().len(), METEOR_COUNT);
    }
}
