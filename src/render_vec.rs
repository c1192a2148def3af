//! CPU-side staging for interleaved vertex data.
use std::{ffi::c_void, marker::PhantomData};

/// A scalar type OpenGL can read out of a vertex buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlType {
    Float,  // f32
    Double, // f64
}

impl GlType {
    pub const fn get_size(&self) -> usize {
        match *self {
            GlType::Double => std::mem::size_of::<f64>(),
            GlType::Float => std::mem::size_of::<f32>(),
        }
    }
    pub const fn gl_enum(&self) -> gl::types::GLenum {
        match *self {
            GlType::Double => gl::DOUBLE,
            GlType::Float => gl::FLOAT,
        }
    }
}

/// One vertex attribute: `components` scalars of `gl_type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlAttribute {
    pub gl_type: GlType,
    pub components: i32,
}

impl GlAttribute {
    pub const fn new(gl_type: GlType, components: i32) -> Self {
        Self {
            gl_type,
            components,
        }
    }
    pub const fn byte_size(&self) -> usize {
        self.gl_type.get_size() * self.components as usize
    }
}

/// A type that can be laid out as one vertex in a vertex buffer.
///
/// # Safety
/// You must ensure that `as_gl_bytes` and `attributes` match each other in terms of byte layout.
/// If `attributes()` returns one attribute of 3 Floats, `as_gl_bytes` must return the bytes of 3 f32s.
pub unsafe trait GlLayout {
    /// The attributes, in location order, that the bytes of one vertex map to.
    fn attributes() -> &'static [GlAttribute];

    /// Returns a byte slice for use in OpenGL rendering.
    fn as_gl_bytes(&self) -> &[u8];

    /// Bytes between consecutive vertices. Attributes are tightly packed.
    fn stride() -> usize {
        Self::attributes().iter().map(GlAttribute::byte_size).sum()
    }
}

/// Remap a slice of T to a slice of bytes.
pub fn to_byte_slice<T: Copy>(slice: &[T]) -> &[u8] {
    // SAFETY: any initialized `Copy` data may be viewed as bytes for the same length.
    unsafe { std::slice::from_raw_parts(slice.as_ptr().cast(), std::mem::size_of_val(slice)) }
}

/// A growable buffer of vertices already in their GPU byte layout.
#[derive(Clone, Debug)]
pub struct RenderVec<LayoutT: GlLayout> {
    inner: Vec<u8>,
    stride: usize,
    _phantom: PhantomData<LayoutT>,
}

impl<LayoutT: GlLayout> RenderVec<LayoutT> {
    pub fn new() -> Self {
        Self {
            inner: vec![],
            stride: LayoutT::stride(),
            _phantom: PhantomData,
        }
    }
    pub fn push(&mut self, value: &LayoutT) {
        self.inner.extend_from_slice(value.as_gl_bytes());
    }
    pub fn extend_from_slice(&mut self, slice: &[LayoutT]) {
        self.inner.reserve(slice.len() * self.stride);
        for value in slice {
            self.inner.extend_from_slice(value.as_gl_bytes());
        }
    }
    pub fn stride(&self) -> usize {
        self.stride
    }
    pub fn gl_byte_size(&self) -> isize {
        self.inner.len().try_into().unwrap()
    }
    /// Number of whole vertices stored.
    pub fn gl_len(&self) -> i32 {
        (self.inner.len() / self.stride).try_into().unwrap()
    }
    pub fn gl_data(&self) -> *const c_void {
        self.inner.as_ptr().cast()
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }
}

impl<LayoutT: GlLayout> Default for RenderVec<LayoutT> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PosColor([f32; 6]);

    static POS_COLOR_ATTRIBS: [GlAttribute; 2] = [
        GlAttribute::new(GlType::Float, 3),
        GlAttribute::new(GlType::Float, 3),
    ];

    unsafe impl GlLayout for PosColor {
        fn attributes() -> &'static [GlAttribute] {
            &POS_COLOR_ATTRIBS
        }
        fn as_gl_bytes(&self) -> &[u8] {
            to_byte_slice(&self.0)
        }
    }

    #[test]
    fn stride_sums_attributes() {
        assert_eq!(PosColor::stride(), 24);
        assert_eq!(GlAttribute::new(GlType::Double, 2).byte_size(), 16);
    }

    #[test]
    fn len_counts_vertices_not_scalars() {
        let mut v = RenderVec::new();
        v.push(&PosColor([0.0; 6]));
        v.extend_from_slice(&[PosColor([1.0; 6]), PosColor([2.0; 6])]);
        assert_eq!(v.gl_len(), 3);
        assert_eq!(v.gl_byte_size(), 72);
        assert_eq!(v.stride(), 24);
    }

    #[test]
    fn bytes_are_native_f32() {
        let mut v = RenderVec::new();
        v.push(&PosColor([0.5, -0.5, 0.0, 1.0, 0.0, 0.25]));
        let first = f32::from_ne_bytes(v.as_bytes()[4..8].try_into().unwrap());
        assert_eq!(first, -0.5);
    }
}
