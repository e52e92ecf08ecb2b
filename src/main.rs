use anyhow::Result;
use log::{error, info, warn};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, ControlScheme, InputManager};
use engine::renderer::{Camera, Renderer};
use game::characters::HEROES;
use game::level::{SceneManager, LEVELS};
use game::Session;

fn fit_camera(camera: &mut Camera, session: &Session) {
    let bounds = session.layout().bounds();
    camera.fit(bounds.center, bounds.size);
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Twin Temple...");

    let mut session = Session::new(SceneManager::new(&LEVELS)?, &HEROES);
    if let Some(level) = std::env::args().nth(1) {
        session.coordinator_mut().load_scene(level);
        session.apply_pending_requests();
    }

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(session.title())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 768))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    fit_camera(renderer.camera_mut(), &session);

    let schemes: Vec<ControlScheme> = HEROES.iter().map(|hero| hero.controls).collect();
    let mut input = InputManager::new(&schemes);
    let mut game_loop = GameLoop::new();
    let mut title = session.title();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                renderer.resize(physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset_all();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.global().just_pressed(Action::Quit) {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                    return;
                }

                let timing = game_loop.begin_frame();
                if session.update(&input, timing) {
                    fit_camera(renderer.camera_mut(), &session);
                }
                input.update();

                let next_title = session.title();
                if next_title != title {
                    window.set_title(&next_title);
                    title = next_title;
                }

                match renderer.render(&session.draw_list()) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("GPU out of memory, shutting down");
                        elwt.exit();
                    }
                    Err(err) => warn!("Dropped frame: {}", err),
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::LoopExiting => {
                info!(
                    "Ran {} frames, {} physics steps",
                    game_loop.frame_count(),
                    game_loop.update_count()
                );
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
