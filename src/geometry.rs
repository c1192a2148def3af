//! The one triangle this scene draws, and its upload to the GPU.
use crate::{
    gl_wrappers::{VertexArray, VertexBuffer},
    render_vec::{to_byte_slice, GlAttribute, GlLayout, GlType, RenderVec},
};

/// A vertex with nothing but a position.
#[derive(Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Vertex {
    pub pos: glm::Vec3,
}

static VERTEX_ATTRIBS: [GlAttribute; 1] = [
    // location 0: position
    GlAttribute::new(GlType::Float, 3),
];

// SAFETY:
// one attribute of 3 Floats, and `pos` is a contiguous [f32; 3].
unsafe impl GlLayout for Vertex {
    fn attributes() -> &'static [GlAttribute] {
        &VERTEX_ATTRIBS
    }
    fn as_gl_bytes(&self) -> &[u8] {
        to_byte_slice(self.pos.as_slice())
    }
}

/// Three vertices in normalized device coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle(pub [Vertex; 3]);

impl Triangle {
    /// Top-center, bottom-right, bottom-left.
    pub fn simple() -> Self {
        Self([
            // Up
            Vertex {
                pos: glm::vec3(0.0, 0.5, 0.0),
            },
            // Right
            Vertex {
                pos: glm::vec3(0.5, -0.5, 0.0),
            },
            // Left
            Vertex {
                pos: glm::vec3(-0.5, -0.5, 0.0),
            },
        ])
    }

    pub fn to_render_vec(&self) -> RenderVec<Vertex> {
        let mut ret = RenderVec::new();
        ret.extend_from_slice(&self.0);
        ret
    }
}

/// Geometry living on the GPU: a static buffer plus the array describing it.
///
/// `vertex_count` counts vertices, not floats.
#[derive(Debug)]
pub struct Mesh {
    vbo: VertexBuffer,
    vao: VertexArray,
}

impl Mesh {
    /// Upload `triangle` with static-draw usage and describe it as attribute 0.
    ///
    /// Leaves the vertex array bound. A GL context must be current.
    pub fn upload(triangle: &Triangle) -> Self {
        let vbo = VertexBuffer::new_static(&triangle.to_render_vec());
        let vao = VertexArray::new();
        vao.describe::<Vertex>();
        Self { vbo, vao }
    }

    pub fn bind(&self) {
        self.vao.bind();
    }
    /// Number of vertices to pass to a draw call.
    pub fn vertex_count(&self) -> i32 {
        self.vbo.len()
    }
    /// Number of floats stored in the buffer.
    pub fn float_count(&self) -> usize {
        self.vbo.len() as usize * Vertex::stride() / size_of::<f32>()
    }
    pub fn vbo(&self) -> &VertexBuffer {
        &self.vbo
    }
    pub fn vao(&self) -> &VertexArray {
        &self.vao
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(v: &RenderVec<Vertex>) -> Vec<f32> {
        v.as_bytes()
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes(c.try_into().unwrap()))
            .collect()
    }

    #[test]
    fn triangle_floats_in_order() {
        let staged = Triangle::simple().to_render_vec();
        assert_eq!(
            floats(&staged),
            [0.0, 0.5, 0.0, 0.5, -0.5, 0.0, -0.5, -0.5, 0.0]
        );
    }

    #[test]
    fn triangle_is_three_vertices_nine_floats() {
        let staged = Triangle::simple().to_render_vec();
        assert_eq!(staged.gl_len(), 3);
        assert_eq!(staged.gl_byte_size() as usize, 9 * size_of::<f32>());
    }

    #[test]
    fn vertex_layout_is_tightly_packed_position() {
        assert_eq!(
            Vertex::attributes(),
            &[GlAttribute {
                gl_type: GlType::Float,
                components: 3
            }]
        );
        assert_eq!(Vertex::stride(), 3 * size_of::<f32>());
    }
}
