//! Checks against a real driver. Needs a display and GL 3.3, so run with
//! `cargo test -- --ignored`.
//!
//! SDL may only be initialized from one thread, so everything runs in one test.
use hello_triangle::{
    config::WindowConfig,
    frame::DRAWS_PER_FRAME,
    gl_wrappers::{check_gl_error, ShaderType},
    render::Render,
    shaders::{compile_and_link, FRAG_SHADER_SOURCE, VERT_SHADER_SOURCE},
    texture::CHECKERBOARD,
    window::AppWindow,
    SetupError,
};

fn attrib_i(index: u32, pname: gl::types::GLenum) -> i32 {
    let mut value = 0;
    unsafe { gl::GetVertexAttribiv(index, pname, &mut value) };
    value
}

fn tex_param_i(pname: gl::types::GLenum) -> i32 {
    let mut value = 0;
    unsafe { gl::GetTexParameteriv(gl::TEXTURE_2D, pname, &mut value) };
    value
}

fn check_program_builds() {
    let program = compile_and_link(VERT_SHADER_SOURCE, FRAG_SHADER_SOURCE)
        .expect("scene shaders should link");
    assert_ne!(program.id(), 0);
    assert!(program.get_uniform_location("offset").is_some());
    assert!(program.get_uniform_location("tex").is_some());
}

fn check_bad_fragment_shader_fails() {
    let bad = c"#version 330 core\nout vec4 FragColor;\nvoid main() { FragColor = ; }\n";
    match compile_and_link(VERT_SHADER_SOURCE, bad) {
        Err(SetupError::ShaderCompile { stage, log }) => {
            assert_eq!(stage, ShaderType::Fragment);
            assert!(!log.is_empty());
        }
        Err(other) => panic!("wrong error: {other}"),
        Ok(_) => panic!("invalid shader linked"),
    }
}

fn check_geometry(render: &Render) {
    let mesh = render.mesh();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.float_count(), 9);

    let mut floats = [0f32; 9];
    unsafe {
        gl::BindBuffer(gl::ARRAY_BUFFER, mesh.vbo().id());
        gl::GetBufferSubData(
            gl::ARRAY_BUFFER,
            0,
            size_of_val(&floats) as isize,
            floats.as_mut_ptr().cast(),
        );
    }
    assert_eq!(floats, [0.0, 0.5, 0.0, 0.5, -0.5, 0.0, -0.5, -0.5, 0.0]);

    mesh.bind();
    assert_eq!(attrib_i(0, gl::VERTEX_ATTRIB_ARRAY_ENABLED), 1);
    assert_eq!(attrib_i(0, gl::VERTEX_ATTRIB_ARRAY_SIZE), 3);
    assert_eq!(attrib_i(0, gl::VERTEX_ATTRIB_ARRAY_TYPE), gl::FLOAT as i32);
    assert_eq!(
        attrib_i(0, gl::VERTEX_ATTRIB_ARRAY_STRIDE),
        3 * size_of::<f32>() as i32
    );
}

fn check_texture(render: &Render) {
    assert_eq!(render.texture().size(), (2, 2));
    let mut texels = [[0f32; 3]; 4];
    unsafe {
        gl::ActiveTexture(gl::TEXTURE0);
        gl::BindTexture(gl::TEXTURE_2D, render.texture().id());
        gl::PixelStorei(gl::PACK_ALIGNMENT, 1);
        gl::GetTexImage(
            gl::TEXTURE_2D,
            0,
            gl::RGB,
            gl::FLOAT,
            texels.as_mut_ptr().cast(),
        );
    }
    assert_eq!(texels, CHECKERBOARD);
    assert_eq!(tex_param_i(gl::TEXTURE_MIN_FILTER), gl::NEAREST as i32);
    assert_eq!(tex_param_i(gl::TEXTURE_MAG_FILTER), gl::NEAREST as i32);
    assert_eq!(tex_param_i(gl::TEXTURE_WRAP_S), gl::REPEAT as i32);
    assert_eq!(tex_param_i(gl::TEXTURE_WRAP_T), gl::REPEAT as i32);
}

#[test]
#[ignore = "needs a display and an OpenGL 3.3 driver"]
fn scene_against_real_context() {
    let app_window = AppWindow::init(&WindowConfig::default()).expect("window");
    assert!(app_window.gl_ctx().is_current());
    assert_eq!(app_window.window().size(), (640, 480));

    check_program_builds();
    check_bad_fragment_shader_fails();

    let mut render = Render::init().expect("scene setup");
    check_geometry(&render);
    check_texture(&render);

    for _ in 0..2 {
        render.render_frame();
        app_window.swap();
    }
    assert_eq!(check_gl_error("in test frames"), 0);
    assert_eq!(DRAWS_PER_FRAME, 3);

    drop(render);
    drop(app_window);
}
