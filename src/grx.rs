use gl::types::*;
use gx;
use gx::GLResource;
use shader::ShaderSource;
use v::Vec3;

/// The one shader program this program ever binds: position in, constant
/// color out, sources loaded from a `.shader` file at startup.
#[derive(Debug, Hash, PartialEq, Eq)]
pub struct QuadProgram {
    program: gx::Program,
    a_position: GLuint,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadVertex {
    pub position: Vec3<f32>,
}
assert_eq_size!(quad_vertex_size; QuadVertex, [f32; 3]);

impl QuadProgram {
    pub fn a_position(&self) -> GLuint {
        self.a_position
    }
    pub fn from_shader_source(src: &ShaderSource) -> Result<Self, String> {
        let vs = gx::VertexShader::from_source(&src.vertex)
            .map_err(|s| format!("Failed to compile vertex shader:\n{}", s))?;
        let fs = gx::FragmentShader::from_source(&src.fragment)
            .map_err(|s| format!("Failed to compile fragment shader:\n{}", s))?;
        let program = gx::Program::from_vert_frag(&vs, &fs)
            .map_err(|s| format!("Failed to link GL program:\n{}", s))?;
        // vs and fs are dropped here; the linked program no longer needs them.

        let a_position = match program.attrib_location(b"a_position\0") {
            Some(loc) => loc as GLuint,
            None => return Err("Shader program has no `a_position` attribute".to_owned()),
        };

        Ok(Self { program, a_position })
    }
    pub fn gl_id(&self) -> GLuint {
        self.program.gl_id()
    }
    pub fn use_program(&self) {
        self.program.use_program();
    }
}
