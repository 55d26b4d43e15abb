use glutin::context::PossiblyCurrentContext;

use thiserror::Error;

use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;

use gl_wrapper::geometry::{GBError, Geometry};
use gl_wrapper::program::{PBError, Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::window::{create_gl_window, GlWindow, WindowError, WindowSettings};

use demos_common::clock::{
    self, ClockAngles, ClockShapes, LocalClock, TimeSource, FACE_RADIUS, HOUR_HAND, MARKER_INNER,
    MARKER_OUTER, MINUTE_HAND, SECOND_HAND,
};
use demos_common::geometry::{circle, hand, markers};
use demos_common::target::{upload, GlFrame};

use crate::args::Args;

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    program: Program,
    shapes: ClockShapes<Geometry>,
    time_source: LocalClock,
}

impl App {
    pub fn new(args: &Args, time_source: LocalClock) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();

        let (gl_window, gl_context) = create_gl_window(
            &event_loop,
            &WindowSettings {
                title: "Analog Clock",
                width: args.width,
                height: args.height,
                gl_version: (3, 3),
            },
        )?;

        let program = ProgramBuilder::new(
            include_str!("gl_shaders/rotate.glsl"),
            include_str!("gl_shaders/solid.glsl"),
        )
        .build()?;

        let shapes = ClockShapes {
            face: upload(circle(args.segments, FACE_RADIUS))?,
            markers: upload(markers(MARKER_INNER, MARKER_OUTER))?,
            second_hand: upload(hand(SECOND_HAND.half_width, SECOND_HAND.length))?,
            minute_hand: upload(hand(MINUTE_HAND.half_width, MINUTE_HAND.length))?,
            hour_hand: upload(hand(HOUR_HAND.half_width, HOUR_HAND.length))?,
        };

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            program,
            shapes,
            time_source,
        })
    }

    pub fn run(self) -> ! {
        let Self {
            event_loop,
            gl_context,
            gl_window,
            program,
            shapes,
            time_source,
        } = self;

        let mut gl_renderer = GlRenderer::new();

        event_loop.run(move |event, _window_target, control_flow| {
            control_flow.set_poll();
            match event {
                Event::MainEventsCleared => gl_window.window.request_redraw(),
                Event::RedrawRequested(_) => {
                    let angles = ClockAngles::from_reading(time_source.now());

                    let mut frame = GlFrame {
                        renderer: &mut gl_renderer,
                        program: &program,
                    };
                    clock::render(&angles, &shapes, &mut frame);

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
                        if input.virtual_keycode == Some(VirtualKeyCode::Escape)
                            && input.state == ElementState::Pressed
                        {
                            control_flow.set_exit();
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
