mod camera;
mod game;
mod geom;
mod gfx;
mod input;
mod map;
mod mesh;
mod player;
mod portal;
mod render;
mod shot;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use camera::Camera;
use game::Game;
use gfx::Gfx;
use input::{Key, KeyState, MouseButton, MouseDelta};
use log::{error, info, warn};

use winit::event::DeviceEvent;
use winit::window::CursorGrabMode;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

/// Größter Zeitschritt pro Frame; längere Hänger werden abgeschnitten,
/// damit der Spieler nicht durch Wände tunnelt.
const MAX_FRAME_DT: f32 = 0.05;

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::Space => Some(Key::Space),
        _ => None,
    }
}

fn map_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new().context("create event loop")?;

    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Portal Demo")
            .build(&event_loop)
            .context("create window")?,
    );
    let window_for_loop = window.clone();

    let mut gfx = pollster::block_on(Gfx::new(window))?;
    let camera = Camera::new();

    let mut game = Game::new();
    let mut keys = KeyState::default();
    let mut mouse = MouseDelta::default();
    let mut mouse_locked = false;
    let mut last_frame = Instant::now();

    info!("WASD bewegen, Space springen, Maus links/rechts schießen, Mitte löscht, Esc fängt Maus");

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        let p = game.player().position;
                        info!(
                            "exit after {} frames at ({:.2}, {:.2}, {:.2})",
                            game.frame(),
                            p.x,
                            p.y,
                            p.z
                        );
                        elwt.exit();
                    }

                    WindowEvent::Resized(size) => gfx.resize(size),

                    WindowEvent::KeyboardInput { event, .. } => {
                        let down = event.state == ElementState::Pressed;

                        match event.physical_key {
                            PhysicalKey::Code(KeyCode::Escape) if down && !event.repeat => {
                                mouse_locked = !mouse_locked;
                                let mode = if mouse_locked {
                                    CursorGrabMode::Locked
                                } else {
                                    CursorGrabMode::None
                                };
                                // Locked gibt es nicht überall, dann Confined
                                if window_for_loop.set_cursor_grab(mode).is_err() && mouse_locked {
                                    if let Err(e) =
                                        window_for_loop.set_cursor_grab(CursorGrabMode::Confined)
                                    {
                                        warn!("cursor grab failed: {e}");
                                    }
                                }
                                window_for_loop.set_cursor_visible(!mouse_locked);
                            }
                            PhysicalKey::Code(code) => {
                                if let Some(key) = map_key(code) {
                                    keys.set(key, down);
                                }
                            }
                            _ => {}
                        }
                    }

                    WindowEvent::MouseInput { state, button, .. } => {
                        if state == ElementState::Pressed {
                            game.mouse_pressed(map_button(button));
                        }
                    }

                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        let dt = (now - last_frame).as_secs_f32().min(MAX_FRAME_DT);
                        last_frame = now;

                        let (dx, dy) = mouse.take();
                        if dt > 0.0 {
                            game.update(dt, &keys, dx, dy);
                        }

                        let view_proj = camera.view_proj(
                            &game.view_transform(),
                            gfx.size.width,
                            gfx.size.height,
                        );
                        gfx.set_view_proj(view_proj);

                        let scene = game.build_scene();
                        gfx.set_mesh(&scene.verts, &scene.inds);

                        match gfx.render() {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                gfx.reconfigure()
                            }
                            Err(wgpu::SurfaceError::Timeout) => warn!("surface timeout"),
                            Err(e) => {
                                error!("render failed: {e}");
                                elwt.exit();
                            }
                        }
                    }

                    _ => {}
                },

                Event::DeviceEvent {
                    event: DeviceEvent::MouseMotion { delta },
                    ..
                } => {
                    if mouse_locked {
                        mouse.accumulate(delta.0 as f32, delta.1 as f32);
                    }
                }

                Event::AboutToWait => window_for_loop.request_redraw(),

                _ => {}
            }
        })
        .context("run event loop")?;

    Ok(())
}
