use std::ffi::CString;
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

pub struct WindowSettings<'a> {
    pub title: &'a str,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL core profile version.
    pub gl_version: (u8, u8),
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, WindowError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let (width, height) = non_zero_size(width, height)?;

        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new()
            .build(raw_window_handle, width, height);

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }

    /// Zero sized requests (minimized windows) are ignored.
    pub fn resize(&self, context: &PossiblyCurrentContext, width: u32, height: u32) {
        if let Ok((width, height)) = non_zero_size(width, height) {
            self.surface.resize(context, width, height);
        }
    }

    pub fn present(&self, context: &PossiblyCurrentContext) -> Result<(), WindowError> {
        self.surface.swap_buffers(context)?;
        Ok(())
    }
}

fn non_zero_size(width: u32, height: u32) -> Result<(NonZeroU32, NonZeroU32), WindowError> {
    match (NonZeroU32::new(width), NonZeroU32::new(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(WindowError::ZeroSize(width, height)),
    }
}

/// Config with the largest depth buffer, the first one on ties.
fn deepest<C>(configs: impl Iterator<Item = C>, depth: impl Fn(&C) -> u8) -> Option<C> {
    configs.reduce(|best, c| if depth(&c) > depth(&best) { c } else { best })
}

/// Opens a window with a current GL context and loads the GL function pointers.
pub fn create_gl_window(
    event_loop: &EventLoop<()>,
    settings: &WindowSettings,
) -> Result<(GlWindow, PossiblyCurrentContext), WindowError> {
    let window_builder = WindowBuilder::new()
        .with_inner_size(Size::Physical(PhysicalSize::new(
            settings.width,
            settings.height,
        )))
        .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
        .with_title(settings.title);
    let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
    let template = ConfigTemplateBuilder::new()
        .with_alpha_size(8)
        .with_depth_size(24);

    let (window, gl_config) = display_builder
        .build(event_loop, template, |configs| {
            // glutin-winit needs a config back. An empty list only happens when the
            // driver accepts the template yet reports no configs for it.
            deepest(configs, |c| c.depth_size())
                .expect("display offered no config matching the template")
        })
        .map_err(|e| WindowError::Display(e.to_string()))?;

    let window = window.ok_or(WindowError::NoWindow)?;
    let gl_display = gl_config.display();

    let (major, minor) = settings.gl_version;
    let context_attr = ContextAttributesBuilder::new()
        .with_profile(GlProfile::Core)
        .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
        .build(Some(window.raw_window_handle()));

    let gl_window = GlWindow::new(window, &gl_config)?;

    let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
        .make_current(&gl_window.surface)?;

    gl::load_with(|s| match CString::new(s) {
        Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()).cast(),
        Err(_) => std::ptr::null(),
    });

    Ok((gl_window, gl_context))
}

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("Failed to create window: {0}")]
    Display(String),
    #[error("Display builder returned no window")]
    NoWindow,
    #[error("Window has zero size ({0}x{1})")]
    ZeroSize(u32, u32),
    #[error("OpenGL error: {0}")]
    Gl(#[from] glutin::error::Error),
}
