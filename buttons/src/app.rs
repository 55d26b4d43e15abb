use glutin::context::PossiblyCurrentContext;

use rand_xoshiro::Xoshiro256StarStar;

use thiserror::Error;

use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;

use gl_wrapper::geometry::{GBError, Geometry};
use gl_wrapper::program::{PBError, Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::window::{create_gl_window, GlWindow, WindowError, WindowSettings};

use demos_common::buttons::{self, AnimationState, ButtonKeys, StateUpdater, TriangleShapes};
use demos_common::color::color_rng;
use demos_common::geometry::triangle;
use demos_common::target::{upload, GlFrame};

use crate::args::Args;

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    program: Program,
    shapes: TriangleShapes<Geometry>,
    updater: StateUpdater<Xoshiro256StarStar>,
}

impl App {
    pub fn new(args: &Args) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();

        let (gl_window, gl_context) = create_gl_window(
            &event_loop,
            &WindowSettings {
                title: "Two Shapes with Controls",
                width: args.width,
                height: args.height,
                gl_version: (3, 3),
            },
        )?;

        let program = ProgramBuilder::new(
            include_str!("gl_shaders/offset.glsl"),
            include_str!("gl_shaders/solid.glsl"),
        )
        .build()?;

        // triangle 1 sits nearer the viewer than triangle 2
        let shapes = TriangleShapes {
            shape_a: upload(triangle(-0.5))?,
            shape_b: upload(triangle(0.5))?,
        };

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            program,
            shapes,
            updater: StateUpdater::new(color_rng(args.seed)),
        })
    }

    pub fn run(self) -> ! {
        let Self {
            event_loop,
            gl_context,
            gl_window,
            program,
            shapes,
            mut updater,
        } = self;

        let mut gl_renderer = GlRenderer::new();
        gl_renderer.set_depth_test(true);

        let mut state = AnimationState::default();
        let mut keys = ButtonKeys::default();

        event_loop.run(move |event, _window_target, control_flow| {
            control_flow.set_poll();
            match event {
                Event::MainEventsCleared => {
                    for change in updater.update(&mut state, keys) {
                        log::info!("{change}");
                    }

                    gl_window.window.request_redraw();
                }
                Event::RedrawRequested(_) => {
                    let mut frame = GlFrame {
                        renderer: &mut gl_renderer,
                        program: &program,
                    };
                    buttons::render(&state, &shapes, &mut frame);

                    if let Err(e) = gl_window.present(&gl_context) {
                        log::error!("Could not present frame: {e}");
                        control_flow.set_exit_with_code(-1);
                    }
                }
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        gl_window.resize(&gl_context, size.width, size.height);
                        gl_renderer.resize(size.width, size.height);
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        let down = input.state == ElementState::Pressed;

                        match input.virtual_keycode {
                            Some(VirtualKeyCode::Key1) => keys.toggle_blend = down,
                            Some(VirtualKeyCode::Key2) => keys.randomize_color = down,
                            Some(VirtualKeyCode::Key3) => keys.bounce_x = down,
                            Some(VirtualKeyCode::Key4) => keys.bounce_z = down,
                            Some(VirtualKeyCode::Space) => keys.wireframe = down,
                            _ => {}
                        }
                    }
                    WindowEvent::CloseRequested => control_flow.set_exit(),
                    _ => (),
                },
                _ => (),
            }
        })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Window(#[from] WindowError),
    #[error(transparent)]
    Program(#[from] PBError),
    #[error("Could not upload geometry: {0}")]
    Geometry(#[from] GBError),
}
