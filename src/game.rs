use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{KeyboardState, Scancode};

use gl;
use gx::{self, Gx, GLResource};
use grx::QuadProgram;
use mesh::QuadMesh;
use platform::Platform;
use shader::ShaderSource;
use v::{Extent2, Rgba};

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;
pub const SHADER_PATH: &'static str = "Shaders/basic.shader";

pub struct Game {
    pub should_quit: bool,
    pub frame: u64,
    // Field order matters: GL objects must drop before the GL context in `platform`.
    quad: QuadMesh,
    quad_program: QuadProgram,
    pub platform: Platform,
}

impl Game {
    pub fn new() -> Result<Self, String> {
        let platform = Platform::new("BioSim", SCREEN_WIDTH, SCREEN_HEIGHT)?;
        let gx = unsafe {
            Gx::new(&platform.video)
        };

        let sources = ShaderSource::load(SHADER_PATH);
        let quad_program = QuadProgram::from_shader_source(&sources)?;
        quad_program.use_program();

        let quad = QuadMesh::new_centered_quad(&quad_program, 0.5);

        gx.label(gx::ObjType::Program, quad_program.gl_id(), b"Quad Program");
        gx.label(gx::ObjType::VertexArray, quad.vao().gl_id(), b"Quad VAO");
        gx.label(gx::ObjType::Buffer, quad.vbo().gl_id(), b"Quad VBO");
        gx.label(gx::ObjType::Buffer, quad.ibo().gl_id(), b"Quad IBO");

        Ok(Self {
            should_quit: false,
            frame: 0,
            quad, quad_program, platform,
        })
    }
    pub fn handle_sdl2_event(&mut self, event: &Event) {
        match *event {
            Event::Quit {..} => {
                self.should_quit = true;
            },
            Event::Window { win_event, .. } => match win_event {
                WindowEvent::Resized(w, h) | WindowEvent::SizeChanged(w, h) => {
                    self.platform.on_window_size_changed(Extent2::new(w as _, h as _));
                },
                _ => (),
            },
            _ => (),
        }
    }
    /// Level-triggered on purpose: holding escape re-flags closure every
    /// frame, which is harmless.
    pub fn process_input(&mut self, keyboard: &KeyboardState) {
        if keyboard.is_scancode_pressed(Scancode::Escape) {
            self.should_quit = true;
        }
    }
    pub fn render_clear(&self) {
        let c = Rgba::new(0.23, 0.35, 0.24, 1.);
        unsafe {
            gl::ClearColor(c.r, c.g, c.b, c.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
    pub fn render(&mut self) {
        self.frame += 1;
        self.quad_program.use_program();
        self.quad.draw();
    }
    pub fn present(&self) {
        self.platform.present();
    }
}
