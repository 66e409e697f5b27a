use crate::{input::command_from_event, surface::CanvasSurface};
use anyhow::anyhow;
use fourier_plt_core::{Command, Config, FrameLoop, LoopState};
use sdl2::EventPump;

pub struct WindowBuilder {
    config: Option<Config>,
    title: Option<String>,
    width_px: Option<u32>,
    height_px: Option<u32>,
    vsync: Option<bool>,
    maximized: Option<bool>,
}

impl WindowBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            title: None,
            width_px: None,
            height_px: None,
            vsync: None,
            maximized: None,
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn width_px(mut self, width_px: u32) -> Self {
        self.width_px = Some(width_px);
        self
    }

    pub fn height_px(mut self, height_px: u32) -> Self {
        self.height_px = Some(height_px);
        self
    }

    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = Some(vsync);
        self
    }

    pub fn maximized(mut self, maximized: bool) -> Self {
        self.maximized = Some(maximized);
        self
    }

    pub fn build(self) -> Window {
        let mut config = self.config.unwrap_or_default();
        if let Some(title) = self.title {
            config.title = title;
        }
        if let Some(width_px) = self.width_px {
            config.width_px = width_px;
        }
        if let Some(height_px) = self.height_px {
            config.height_px = height_px;
        }
        if let Some(vsync) = self.vsync {
            config.vsync = vsync;
        }
        Window {
            config,
            maximized: self.maximized.unwrap_or(true),
        }
    }
}

impl Default for WindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Description of the plot window. Nothing is created until `run` is called.
#[derive(Clone, Debug)]
pub struct Window {
    config: Config,
    maximized: bool,
}

struct WindowRunning {
    surface: CanvasSurface,
    event_pump: EventPump,
    frame_loop: FrameLoop,
}

impl WindowRunning {
    fn poll_commands(&mut self) -> Vec<Command> {
        let commands = self
            .event_pump
            .poll_iter()
            .filter_map(|event| command_from_event(&event))
            .collect::<Vec<_>>();
        for command in &commands {
            if let Command::Resize(size) = command {
                self.surface.set_logical_size(*size);
            }
        }
        commands
    }

    fn tick(&mut self) -> LoopState {
        let commands = self.poll_commands();
        self.frame_loop.tick(commands, &mut self.surface)
    }
}

impl Window {
    pub fn builder() -> WindowBuilder {
        WindowBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn open(&self) -> anyhow::Result<WindowRunning> {
        let sdl_context = sdl2::init().map_err(|e| {
            anyhow!("SDL could not initialize! SDL_Error: {e}")
        })?;
        let video_subsystem = sdl_context.video().map_err(|e| {
            anyhow!("SDL could not initialize! SDL_Error: {e}")
        })?;
        let window = video_subsystem
            .window(
                self.config.title.as_str(),
                self.config.width_px,
                self.config.height_px,
            )
            .position_centered()
            .opengl()
            .resizable()
            .build()
            .map_err(|e| {
                anyhow!("Window could not be created! SDL_Error: {e}")
            })?;
        let mut canvas_builder = window.into_canvas().accelerated();
        if self.config.vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| {
            anyhow!("Renderer could not be created! SDL_Error: {e}")
        })?;
        let mut surface = CanvasSurface::new(canvas);
        if self.maximized {
            surface.maximize();
        }
        // The requested size was only a placeholder. Use whatever the window ended up as.
        let viewport = surface.window_size();
        surface.set_logical_size(viewport);
        log::info!(
            "Opened \"{}\" with viewport {}x{}",
            self.config.title,
            viewport.width(),
            viewport.height()
        );
        let event_pump = sdl_context.event_pump().map_err(|e| {
            anyhow!("Event pump could not be created! SDL_Error: {e}")
        })?;
        Ok(WindowRunning {
            surface,
            event_pump,
            frame_loop: FrameLoop::new(&self.config, viewport),
        })
    }

    /// Opens the window and redraws the plot until the window is closed. Returns an error if any
    /// part of SDL could not be set up.
    pub fn run(&self) -> anyhow::Result<()> {
        let mut window_running = self.open()?;
        while window_running.tick() == LoopState::Running {}
        log::info!("Window closed");
        Ok(())
    }
}
