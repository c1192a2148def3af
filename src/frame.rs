//! What one frame draws, as plain data.
//!
//! Nothing here touches OpenGL; [`Render`](crate::render::Render) walks these
//! values and issues the calls.

/// Background the framebuffer is cleared to.
pub const CLEAR_COLOR: [f32; 4] = [0.7, 0.0, 0.5, 1.0];

/// Draw calls issued per frame.
pub const DRAWS_PER_FRAME: usize = 3;

/// Whether the frame loop keeps going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    Running,
    Closing,
}

impl FrameState {
    /// State after polling events. Closing is terminal.
    pub fn after_events(self, close_requested: bool) -> Self {
        match self {
            FrameState::Running if !close_requested => FrameState::Running,
            _ => FrameState::Closing,
        }
    }
}

/// One `glDrawArrays(GL_TRIANGLES, first, count)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    /// Set the `offset` uniform to this first. `None` leaves whatever was last set,
    /// which is zero before the first update.
    pub offset: Option<glm::Vec2>,
    pub first: i32,
    pub count: i32,
}

/// Offset for the `num`th shifted copy of the triangle.
pub fn offset_for(num: u8) -> glm::Vec2 {
    let num = f32::from(num);
    glm::vec2(0.1 * num, 0.2 * num)
}

/// The draws for one frame: the triangle at the last-set offset, then at
/// `offset_for(1)` and `offset_for(2)`.
///
/// Offsets are recomputed every frame, never accumulated.
pub fn frame_draw_calls(vertex_count: i32) -> [DrawCall; DRAWS_PER_FRAME] {
    let draw = |offset| DrawCall {
        offset,
        first: 0,
        count: vertex_count,
    };
    [draw(None), draw(Some(offset_for(1))), draw(Some(offset_for(2)))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_draws_of_three_vertices() {
        let calls = frame_draw_calls(3);
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|c| c.first == 0 && c.count == 3));
    }

    #[test]
    fn offsets_in_order() {
        let offsets: Vec<_> = frame_draw_calls(3).iter().map(|c| c.offset).collect();
        assert_eq!(
            offsets,
            [None, Some(glm::vec2(0.1, 0.2)), Some(glm::vec2(0.2, 0.4))]
        );
    }

    #[test]
    fn frames_are_identical() {
        let first = frame_draw_calls(3);
        let second = frame_draw_calls(3);
        for (a, b) in first.iter().zip(second.iter()) {
            let bits = |c: &DrawCall| c.offset.map(|o| (o.x.to_bits(), o.y.to_bits()));
            assert_eq!(bits(a), bits(b));
        }
    }

    #[test]
    fn close_request_ends_loop() {
        assert_eq!(FrameState::Running.after_events(false), FrameState::Running);
        assert_eq!(FrameState::Running.after_events(true), FrameState::Closing);
        assert_eq!(FrameState::Closing.after_events(false), FrameState::Closing);
    }

    #[test]
    fn clear_color_is_opaque_magenta() {
        assert_eq!(CLEAR_COLOR, [0.7, 0.0, 0.5, 1.0]);
    }
}
