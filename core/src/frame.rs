use crate::{
    config::{Config, Palette},
    grid,
    input::Command,
    params::Params,
    sampler,
    surface::Surface,
};
use coord_2d::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Owns the parameter state and draws one complete frame per call to `tick`. Once terminated it
/// stays terminated.
pub struct FrameLoop {
    params: Params,
    palette: Palette,
    state: LoopState,
}

impl FrameLoop {
    pub fn new(config: &Config, viewport: Size) -> Self {
        Self {
            params: Params::new(config, viewport),
            palette: config.palette,
            state: LoopState::Running,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.state = LoopState::Terminated,
            command => command.apply(&mut self.params),
        }
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.set_draw_color(self.palette.background);
        surface.clear();
        grid::render_grid(surface, &self.params, &self.palette);
        surface.set_draw_color(self.palette.wave);
        sampler::render_wave(surface, &self.params);
        surface.present();
    }

    /// Applies all pending commands and then draws and presents a frame. The frame is drawn
    /// even if one of the commands terminated the loop.
    pub fn tick<S, I>(&mut self, commands: I, surface: &mut S) -> LoopState
    where
        S: Surface,
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.handle_command(command);
        }
        self.render(surface);
        self.state
    }
}
