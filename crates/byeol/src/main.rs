use std::io;
use std::time::{Duration, Instant};

use byeol_core::Pointer;
use byeol_sky::{CELL_HEIGHT_PX, CELL_WIDTH_PX, SkyState};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

mod config;
mod typewriter;

use config::Config;
use typewriter::Typewriter;

/// Target delay between animation ticks (~60 Hz).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = App::new(config).run(terminal);
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The animated sky.
    sky: SkyState,
    /// Last known pointer position.
    pointer: Pointer,
    /// Greeting reveal effect.
    typewriter: Typewriter,
    /// When the animation started.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            sky: SkyState::new(config.seed),
            pointer: Pointer::new(),
            typewriter: Typewriter::new(config.message),
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.started = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders one animation frame plus the text overlays.
    fn render(&mut self, frame: &mut Frame) {
        self.sky.render(frame, &self.pointer);

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Sky above the greeting
            Constraint::Length(1), // Greeting
            Constraint::Fill(1),   // Sky below the greeting
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let visible = self.typewriter.visible_at(elapsed_ms);
        if !visible.is_empty() {
            let mut text = String::from(visible);
            if !self.typewriter.done_at(elapsed_ms) {
                text.push('▌');
            }
            let greeting = Paragraph::new(text)
                .style(Style::new().fg(Color::Rgb(220, 230, 245)))
                .alignment(Alignment::Center);
            frame.render_widget(greeting, chunks[1]);
        }

        let help = Line::from(vec!["q".bold().cyan(), " quit".dark_gray()]).centered();
        frame.render_widget(help, chunks[3]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Drains pending events until the frame deadline to keep a steady tick.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let deadline = Instant::now() + FRAME_INTERVAL;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                return Ok(());
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                // The closest terminal analog of the pointer leaving.
                Event::FocusLost => self.pointer.clear(),
                // Dimensions are re-read from the frame area every draw.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Tracks the pointer in viewport pixel coordinates.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let x = (mouse.column as f32 + 0.5) * CELL_WIDTH_PX;
                let y = (mouse.row as f32 + 0.5) * CELL_HEIGHT_PX;
                self.pointer.set(x, y);
            }
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
