// src/main.rs

pub mod app;
pub mod ui;
pub mod rendering_lib;

use std::sync::Arc;

use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopWindowTarget, EventLoop},
    window::WindowBuilder,
};
use app::{AppError, EventResponse, SnowflakeApp};
use koch_snowflake::config::ViewerConfig;

pub async fn run(viewer: ViewerConfig) -> Result<(), AppError> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(viewer.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(viewer.window_width, viewer.window_height))
            .build(&event_loop)?,
    );

    let mut app_state = SnowflakeApp::new(window.clone(), &viewer).await?;
    log::info!("Window created: {}x{}", viewer.window_width, viewer.window_height);

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                match app_state.handle_window_event(event, &window) {
                    EventResponse::Exit => {
                        log::info!("Escape pressed, exiting");
                        target.exit();
                    }
                    EventResponse::Consumed => {}
                    EventResponse::Ignored => match event {
                        WindowEvent::CloseRequested => {
                            target.exit();
                        }
                        WindowEvent::Resized(physical_size) => {
                            app_state.resize(*physical_size);
                        }
                        _ => {}
                    },
                }
            }
            Event::AboutToWait => {
                match app_state.render(&window) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("Surface lost or outdated, reconfiguring");
                        app_state.resize(app_state.get_size());
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("WGPU Out Of Memory! Exiting.");
                        target.exit();
                    }
                    Err(e) => log::warn!("Surface error: {:?}", e),
                }

                if !target.exiting() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(ViewerConfig::default()).await?;
    Ok(())
}
