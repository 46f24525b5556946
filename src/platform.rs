use sdl2::{self, Sdl, VideoSubsystem};
use sdl2::video::{Window, GLContext, GLProfile, SwapInterval};
use gl;
use v::Extent2;

/// The OS window and its OpenGL context. Exactly one of these exists, and
/// every draw call in the program targets it. All of it lives on the main
/// thread; no other thread ever touches GPU state.
pub struct Platform {
    pub sdl: Sdl,
    pub video: VideoSubsystem,
    pub window: Window,
    _gl_context: GLContext,
    window_size: Extent2<u32>,
}

impl Platform {
    pub fn new(name: &str, w: u32, h: u32) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;
        {
            let gl_attr = video.gl_attr();
            gl_attr.set_context_profile(GLProfile::Core);
            gl_attr.set_context_version(3, 3);
            gl_attr.set_context_flags().forward_compatible().debug().set();
        }

        let window = video.window(name, w, h)
            .position_centered()
            .resizable()
            .opengl()
            .build()
            .map_err(|e| format!("Failed to create window: {}", e))?;

        let gl_context = window.gl_create_context()
            .map_err(|e| format!("Failed to create GL context: {}", e))?;
        window.gl_set_context_to_current()
            .map_err(|e| format!("Failed to make GL context current: {}", e))?;

        gl::load_with(|s| video.gl_get_proc_address(s) as _);
        if !gl::ClearColor::is_loaded() || !gl::GetString::is_loaded() {
            return Err("Failed to load OpenGL function pointers".to_owned());
        }
        video.gl_set_swap_interval(SwapInterval::LateSwapTearing);

        let window_size = Extent2::new(w, h);

        Ok(Self { sdl, video, window, _gl_context: gl_context, window_size })
    }

    pub fn window_size(&self) -> Extent2<u32> {
        self.window_size
    }
    /// The drawable surface changed size; the viewport tracks it exactly,
    /// with no clamping and no aspect correction.
    pub fn on_window_size_changed(&mut self, size: Extent2<u32>) {
        self.window_size = size;
        unsafe {
            gl::Viewport(0, 0, size.w as _, size.h as _);
        }
    }
    pub fn present(&self) {
        self.window.gl_swap_window();
    }
}
