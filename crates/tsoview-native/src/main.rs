mod keys;
mod render;
mod viewer;

use clap::Parser;
use keys::Command;
use render::Renderer;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tso_config::{Configs, ProjectionMode, Settings, ViewModes, SETTINGS_FILE_NAME};
use tsoview::{App, Viewer, ViewerEvent};
use viewer::FrameViewer;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Fullscreen, WindowBuilder};

// Idle time between update/render ticks
const TICK_INTERVAL: Duration = Duration::from_millis(16);

const SNAPSHOT_FILE_NAME: &str = "scene.toml";

#[derive(Parser, Debug)]
#[command(name = "tsoview", about = "Figure viewer with render-parameter panels")]
struct Args {
    /// Settings file (defaults to config.toml next to the executable)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Figure, pose or scene files to load at startup
    files: Vec<PathBuf>,
}

fn default_settings_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(SETTINGS_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let settings_path = args.config.clone().unwrap_or_else(default_settings_path);
    let settings = Settings::load(&settings_path).unwrap_or_else(|e| {
        log::warn!("[settings] {e}; using defaults");
        Settings::default()
    });

    let event_loop = EventLoop::new()?;
    let [width, height] = settings.client_size;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("TSOView")
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
            .with_fullscreen((!settings.windowed).then_some(Fullscreen::Borderless(None)))
            .build(&event_loop)?,
    );

    let renderer = pollster::block_on(Renderer::new(
        Arc::clone(&window),
        settings.screen_color_rgba(),
    ))?;
    log::info!(
        "[viewer] depth map {}, normal map {}",
        settings.depth_map_format,
        settings.normal_map_format
    );

    let configs = Configs::from_settings(&settings);
    let modes = Rc::new(ViewModes::new(
        settings.render_mode(),
        ProjectionMode::default(),
    ));
    let viewer = Rc::new(FrameViewer::new(
        renderer,
        configs.clone(),
        modes,
        settings.hoho_alpha,
        PathBuf::from(SNAPSHOT_FILE_NAME),
    ));
    let app = App::new(Rc::clone(&viewer) as Rc<dyn Viewer>, configs, &settings);
    if let Err(e) = app.open(&args.files) {
        log::error!("[app] {e:#}");
    }

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => viewer.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::KeyboardInput { event: key, .. },
            ..
        } if key.state == ElementState::Pressed => {
            if let Some(command) = key_name(&key.logical_key).and_then(keys::command_for_key) {
                run_command(&app, &viewer, command, elwt);
            }
        }
        Event::AboutToWait => {
            app.tick();
            elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + TICK_INTERVAL));
        }
        _ => {}
    })?;
    Ok(())
}

fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(s) => Some(s.as_str()),
        Key::Named(named) => match named {
            NamedKey::ArrowUp => Some("ArrowUp"),
            NamedKey::ArrowDown => Some("ArrowDown"),
            NamedKey::ArrowLeft => Some("ArrowLeft"),
            NamedKey::ArrowRight => Some("ArrowRight"),
            NamedKey::F12 => Some("F12"),
            NamedKey::Tab => Some("Tab"),
            NamedKey::Escape => Some("Escape"),
            _ => None,
        },
        _ => None,
    }
}

fn run_command(
    app: &App,
    viewer: &FrameViewer,
    command: Command,
    elwt: &EventLoopWindowTarget<()>,
) {
    let panel = app.config_panel();
    match command {
        Command::Render(mode) => {
            panel.render.select(mode);
        }
        Command::Projection(mode) => {
            panel.projection.select(mode);
        }
        Command::Fovy(delta) => {
            panel.fovy.step(delta);
            log::info!("[panel] fovy {}°", panel.fovy.value());
        }
        Command::Roll(delta) => {
            panel.roll.step(delta);
            log::info!("[panel] roll {}°", panel.roll.value());
        }
        Command::Morph(which, delta) => {
            if let Some(slider) = app.figure_panel().slider(which) {
                slider.step(delta);
                log::info!("[panel] {} {:.2}", which.name(), slider.value());
            }
        }
        Command::Capture => {
            if let Err(e) = app.capture() {
                log::error!("[capture] {e:#}");
            }
        }
        Command::ToggleRecording => {
            app.toggle_recording();
        }
        Command::SaveScene => {
            if let Err(e) = app.save_scene() {
                log::error!("[scene] {e:#}");
            }
        }
        Command::ShowConfigPanel => {
            viewer.request_panel(ViewerEvent::ConfigPanelRequested);
            log::info!("[panel] config: {}", panel.summary());
        }
        Command::ShowFigurePanel => {
            viewer.request_panel(ViewerEvent::FigurePanelRequested);
            let figure = app.figure_panel();
            log::info!(
                "[panel] figure: files={:?} ratios={:?}",
                figure.files(),
                figure.ratios().values()
            );
        }
        Command::NextFigure => {
            let count = viewer.figure_count();
            if count > 0 {
                let next = viewer.active_index().map_or(0, |i| (i + 1) % count);
                viewer.select_figure(next);
            }
        }
        Command::Quit => elwt.exit(),
    }
}
