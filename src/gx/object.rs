use std::ptr;
use std::mem;

use gl;
use gl::types::*;

use super::buffer::BufferUsage;

pub trait GLResource {
    fn gl_id(&self) -> GLuint;
}

macro_rules! gl_resource {
    ($Type:ident) => {
        #[derive(Debug, Hash, PartialEq, Eq)]
        pub struct $Type(GLuint);

        impl GLResource for $Type {
            fn gl_id(&self) -> GLuint {
                self.0
            }
        }
    };
}

gl_resource!{VertexShader}
gl_resource!{FragmentShader}
gl_resource!{Program}
gl_resource!{Vao}
gl_resource!{Vbo}
gl_resource!{Ibo}

impl VertexShader {
    /// Compiles a vertex shader, handing back the GL info log on failure.
    pub fn from_source(src: &str) -> Result<Self, String> {
        compile_shader(gl::VERTEX_SHADER, src).map(VertexShader)
    }
}

impl FragmentShader {
    /// Compiles a fragment shader, handing back the GL info log on failure.
    pub fn from_source(src: &str) -> Result<Self, String> {
        compile_shader(gl::FRAGMENT_SHADER, src).map(FragmentShader)
    }
}

impl Drop for VertexShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.0);
        }
    }
}

impl Drop for FragmentShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.0);
        }
    }
}

fn compile_shader(shader_type: GLenum, src: &str) -> Result<GLuint, String> {
    unsafe {
        let id = gl::CreateShader(shader_type);
        let src_ptr = src.as_ptr() as *const GLchar;
        let src_len = src.len() as GLint;
        gl::ShaderSource(id, 1, &src_ptr, &src_len);
        gl::CompileShader(id);

        let mut status = gl::FALSE as GLint;
        gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status);
        if status == gl::TRUE as GLint {
            return Ok(id);
        }
        let log = shader_info_log(id);
        gl::DeleteShader(id);
        Err(log)
    }
}

unsafe fn shader_info_log(id: GLuint) -> String {
    let mut len: GLint = 0;
    gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
    if len <= 0 {
        return String::new();
    }
    let mut buf = vec![0_u8; len as usize];
    gl::GetShaderInfoLog(id, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
    buf.pop(); // drop the trailing NUL
    String::from_utf8_lossy(&buf).into_owned()
}

impl Program {
    /// Links a vertex and a fragment shader, handing back the GL info log
    /// on failure. The shader objects may be dropped once this succeeds.
    pub fn from_vert_frag(vs: &VertexShader, fs: &FragmentShader) -> Result<Self, String> {
        unsafe {
            let id = gl::CreateProgram();
            gl::AttachShader(id, vs.gl_id());
            gl::AttachShader(id, fs.gl_id());
            gl::LinkProgram(id);

            let mut status = gl::FALSE as GLint;
            gl::GetProgramiv(id, gl::LINK_STATUS, &mut status);
            if status == gl::TRUE as GLint {
                return Ok(Program(id));
            }
            let log = program_info_log(id);
            gl::DeleteProgram(id);
            Err(log)
        }
    }
    pub fn use_program(&self) {
        unsafe {
            gl::UseProgram(self.0);
        }
    }
    /// `name` must be NUL-terminated (e.g. `b"a_position\0"`).
    pub fn attrib_location(&self, name: &[u8]) -> Option<GLint> {
        debug_assert_eq!(name.last(), Some(&0));
        let loc = unsafe {
            gl::GetAttribLocation(self.0, name.as_ptr() as *const GLchar)
        };
        if loc == -1 {
            None
        } else {
            Some(loc)
        }
    }
}

unsafe fn program_info_log(id: GLuint) -> String {
    let mut len: GLint = 0;
    gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
    if len <= 0 {
        return String::new();
    }
    let mut buf = vec![0_u8; len as usize];
    gl::GetProgramInfoLog(id, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
    buf.pop();
    String::from_utf8_lossy(&buf).into_owned()
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.0);
        }
    }
}

impl Vao {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }
        Vao(id)
    }
    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.0);
        }
    }
    pub fn unbind() {
        unsafe {
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for Vao {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.0);
        }
    }
}

impl Vbo {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }
        Vbo(id)
    }
    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.0);
        }
    }
    pub fn set_data<T>(&self, data: &[T], usage: BufferUsage) {
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (data.len() * mem::size_of::<T>()) as GLsizeiptr,
                data.as_ptr() as *const _,
                usage as _
            );
        }
    }
}

impl Drop for Vbo {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.0);
        }
    }
}

impl Ibo {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }
        Ibo(id)
    }
    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.0);
        }
    }
    pub fn set_data<T>(&self, data: &[T], usage: BufferUsage) {
        unsafe {
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                (data.len() * mem::size_of::<T>()) as GLsizeiptr,
                data.as_ptr() as *const _,
                usage as _
            );
        }
    }
}

impl Drop for Ibo {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.0);
        }
    }
}
