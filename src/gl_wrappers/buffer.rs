//! Exports [`VertexBuffer`] and [`VertexArray`].
use std::ptr::null;

use crate::render_vec::{GlLayout, RenderVec};

/// An `ARRAY_BUFFER` filled once with `STATIC_DRAW` usage.
#[derive(Debug)]
pub struct VertexBuffer {
    id: gl::types::GLuint,
    /// Number of vertices uploaded.
    len: i32,
}

impl VertexBuffer {
    /// Create a buffer, bind it to `ARRAY_BUFFER` and upload `data`.
    ///
    /// The buffer stays bound afterwards.
    pub fn new_static<T: GlLayout>(data: &RenderVec<T>) -> Self {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                data.gl_byte_size(),
                data.gl_data(),
                gl::STATIC_DRAW,
            );
        }
        log::debug!("vbo {id}: {} bytes", data.gl_byte_size());
        Self {
            id,
            len: data.gl_len(),
        }
    }
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
    /// Number of vertices this buffer holds.
    pub fn len(&self) -> i32 {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) }
    }
}

/// A vertex array object describing how a [`VertexBuffer`] is read.
#[derive(Debug)]
pub struct VertexArray {
    id: gl::types::GLuint,
}

impl VertexArray {
    /// Create a vertex array and bind it.
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
            gl::BindVertexArray(id);
        }
        log::debug!("vao {id}");
        Self { id }
    }

    /// Point attributes at the currently bound `ARRAY_BUFFER`, one attribute per
    /// entry of `T`'s attribute layout, starting at location 0, and enable them.
    ///
    /// This array must be bound.
    pub fn describe<T: GlLayout>(&self) {
        let stride: i32 = T::stride().try_into().unwrap();
        let mut offset = 0usize;
        for (location, attrib) in T::attributes().iter().enumerate() {
            let location = location as gl::types::GLuint;
            unsafe {
                gl::VertexAttribPointer(
                    location,
                    attrib.components,
                    attrib.gl_type.gl_enum(),
                    gl::FALSE,
                    stride,
                    if offset == 0 {
                        null()
                    } else {
                        offset as *const _
                    },
                );
                gl::EnableVertexAttribArray(location);
            }
            offset += attrib.byte_size();
        }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) }
    }
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Default for VertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.id) }
    }
}
