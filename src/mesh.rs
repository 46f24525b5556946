use std::ptr;
use std::mem::size_of;

use gl;
use gl::types::*;
use gx;
use grx;
use v::Vec3;

/// Two triangles sharing the 1-3 diagonal.
pub const QUAD_INDICES: [GLuint; 6] = [
    0, 1, 3,
    1, 2, 3,
];

pub fn centered_quad_vertices(s: f32) -> [grx::QuadVertex; 4] {
    [
        grx::QuadVertex { position: Vec3::new( s,  s, 0.) },
        grx::QuadVertex { position: Vec3::new( s, -s, 0.) },
        grx::QuadVertex { position: Vec3::new(-s, -s, 0.) },
        grx::QuadVertex { position: Vec3::new(-s,  s, 0.) },
    ]
}

#[derive(Debug)]
pub struct QuadMesh {
    pub vertices: Vec<grx::QuadVertex>,
    pub indices: Vec<GLuint>,
    vao: gx::Vao,
    vbo: gx::Vbo,
    ibo: gx::Ibo,
}

impl QuadMesh {
    /// Uploads an axis-aligned quad spanning ±s in X and Y at Z=0. The
    /// VAO records the IBO binding and the single position attribute.
    pub fn new_centered_quad(prog: &grx::QuadProgram, s: f32) -> Self {
        let vertices = centered_quad_vertices(s).to_vec();
        let indices = QUAD_INDICES.to_vec();

        let vao = gx::Vao::new();
        let vbo = gx::Vbo::new();
        let ibo = gx::Ibo::new();
        vao.bind();
        vbo.bind();
        vbo.set_data(&vertices, gx::BufferUsage::StaticDraw);
        ibo.bind();
        ibo.set_data(&indices, gx::BufferUsage::StaticDraw);
        unsafe {
            gl::EnableVertexAttribArray(prog.a_position());
            gl::VertexAttribPointer(
                prog.a_position(), 3, gl::FLOAT,
                gl::FALSE as _, size_of::<grx::QuadVertex>() as _,
                ptr::null()
            );
        }
        gx::Vao::unbind();

        Self { vertices, indices, vao, vbo, ibo }
    }

    pub fn vao(&self) -> &gx::Vao {
        &self.vao
    }
    pub fn vbo(&self) -> &gx::Vbo {
        &self.vbo
    }
    pub fn ibo(&self) -> &gx::Ibo {
        &self.ibo
    }

    pub fn draw(&self) {
        self.vao.bind();
        self.ibo.bind();
        unsafe {
            gl::DrawElements(gl::TRIANGLES, self.indices.len() as GLsizei, gl::UNSIGNED_INT, ptr::null());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_indices_cover_all_four_corners() {
        let mut seen = [false; 4];
        for &i in QUAD_INDICES.iter() {
            seen[i as usize] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn quad_triangles_share_the_1_3_diagonal() {
        let (t0, t1) = (&QUAD_INDICES[..3], &QUAD_INDICES[3..]);
        for &i in &[1, 3] {
            assert!(t0.contains(&i));
            assert!(t1.contains(&i));
        }
    }

    #[test]
    fn centered_quad_spans_half_extent() {
        for v in centered_quad_vertices(0.5).iter() {
            let p = v.position;
            assert_eq!(p.x.abs(), 0.5);
            assert_eq!(p.y.abs(), 0.5);
            assert_eq!(p.z, 0.);
        }
    }
}
