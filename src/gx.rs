use std::fmt::{self, Formatter, Debug};
use std::ffi::CStr;
use std::ptr;
use std::str;
use std::slice;
use std::os::raw::c_void;

use sdl2::VideoSubsystem;
use gl;
use gl::types::*;

pub mod buffer;
pub mod object;

pub use self::buffer::BufferUsage;
pub use self::object::*;

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[repr(u32)]
pub enum ObjType {
    Buffer      = gl::BUFFER,
    Shader      = gl::SHADER,
    Program     = gl::PROGRAM,
    VertexArray = gl::VERTEX_ARRAY,
}

fn gl_object_label_dummy(_ns: ObjType, _id: GLuint, _label: &[u8]) {}
fn gl_object_label_actual(ns: ObjType, id: GLuint, label: &[u8]) {
    unsafe {
        gl::ObjectLabel(ns as _, id, label.len() as _, label.as_ptr() as _);
    }
}

/// Per-context GL capabilities, resolved once right after the context is
/// made current. Object labeling degrades to a no-op when the context has
/// no debug support.
pub struct Gx {
    label_fn: fn(ObjType, GLuint, &[u8]),
    gl_major: u32,
    gl_minor: u32,
}

impl Debug for Gx {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Gx")
            .field("gl_major", &self.gl_major)
            .field("gl_minor", &self.gl_minor)
            .finish()
    }
}

impl Gx {
    pub fn label(&self, ns: ObjType, id: GLuint, label: &[u8]) {
        (self.label_fn)(ns, id, label)
    }
    pub unsafe fn new(video: &VideoSubsystem) -> Self {
        let mut ctxflags: GLint = 0;
        let mut ctxpmask: GLint = 0;
        let mut double_buffer: GLboolean = 0;
        gl::GetIntegerv(gl::CONTEXT_FLAGS, &mut ctxflags);
        gl::GetIntegerv(gl::CONTEXT_PROFILE_MASK, &mut ctxpmask);
        gl::GetBooleanv(gl::DOUBLEBUFFER, &mut double_buffer);

        let ctxflags = ctxflags as GLuint;
        let ctxpmask = ctxpmask as GLuint;

        let gl_version   = CStr::from_ptr(gl::GetString(gl::VERSION) as _).to_string_lossy();
        let gl_renderer  = CStr::from_ptr(gl::GetString(gl::RENDERER) as _).to_string_lossy();
        let gl_vendor    = CStr::from_ptr(gl::GetString(gl::VENDOR) as _).to_string_lossy();
        let glsl_version = CStr::from_ptr(gl::GetString(gl::SHADING_LANGUAGE_VERSION) as _).to_string_lossy();

        let gl_major = gl_version.chars().nth(0).unwrap() as u32 - '0' as u32;
        let gl_minor = gl_version.chars().nth(2).unwrap() as u32 - '0' as u32;

        info!(
"--- Active OpenGL context settings ---
    Version          : {} (parsed: {}.{})
    Renderer         : {}
    Vendor           : {}
    GLSL version     : {}
    Profile flags    : {} (bits: 0b{:08b})
    Context flags    : {}{}{}(bits: 0b{:08b})
    Double buffering : {}",
            gl_version, gl_major, gl_minor, gl_renderer, gl_vendor, glsl_version,
            if ctxpmask & gl::CONTEXT_CORE_PROFILE_BIT != 0 {
                "core"
            } else if ctxpmask & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT != 0 {
                "compatibility"
            } else { "" },
            ctxpmask,
            if ctxflags & gl::CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT != 0 { "forward_compatible " } else {""},
            if ctxflags & gl::CONTEXT_FLAG_DEBUG_BIT != 0 { "debug " } else {""},
            if ctxflags & gl::CONTEXT_FLAG_ROBUST_ACCESS_BIT != 0 { "robust_access " } else {""},
            ctxflags,
            double_buffer,
        );

        let can_debug = gl_major > 4
            || (gl_major == 4 && gl_minor >= 3)
            || video.gl_extension_supported("GL_KHR_debug");

        let mut label_fn: fn(ObjType, GLuint, &[u8]) = gl_object_label_dummy;
        if can_debug {
            gl::Enable(gl::DEBUG_OUTPUT);
            gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
            gl::DebugMessageCallback(gl_dbg_msg_callback, ptr::null_mut());
            gl::DebugMessageControl(
                gl::DONT_CARE, gl::DONT_CARE, gl::DONT_CARE,
                0, ptr::null_mut(), gl::TRUE
            );
            label_fn = gl_object_label_actual;
        }
        Self { label_fn, gl_major, gl_minor }
    }
}

extern "system" fn gl_dbg_msg_callback(
    source: GLenum, ty: GLenum, id: GLuint, severity: GLenum,
    length: GLsizei, message: *const GLchar, _user_param: *mut c_void,
) {
    let src = match source {
        gl::DEBUG_SOURCE_API => "API",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "Window system",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "Shader compiler",
        gl::DEBUG_SOURCE_THIRD_PARTY => "3rd party",
        gl::DEBUG_SOURCE_APPLICATION => "Application",
        gl::DEBUG_SOURCE_OTHER => "Other",
        _ => "",
    };
    let t = match ty {
        gl::DEBUG_TYPE_ERROR => "Error",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated behaviour",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined behaviour",
        gl::DEBUG_TYPE_PERFORMANCE => "Performance",
        gl::DEBUG_TYPE_PORTABILITY => "Portability",
        gl::DEBUG_TYPE_MARKER => "Command stream annotation",
        gl::DEBUG_TYPE_OTHER => "Other",
        _ => "",
    };
    let message = unsafe {
        slice::from_raw_parts(message as *const u8, length as _)
    };
    let message = str::from_utf8(message).unwrap_or("<message is not valid UTF-8>");
    match severity {
        gl::DEBUG_SEVERITY_HIGH => {
            error!("OpenGL debug message ({}, {}, {:X}):\n{}", t, src, id, message);
        },
        gl::DEBUG_SEVERITY_MEDIUM => {
            warn!("OpenGL debug message ({}, {}, {:X}):\n{}", t, src, id, message);
        },
        _ => {
            debug!("OpenGL debug message ({}, {}, {:X}):\n{}", t, src, id, message);
        },
    }
}
