//! Built-in shaders, used when `Options` doesn't override them.

/// Passes the `position` attribute straight through as clip-space coordinates.
pub const DEFAULT_VERTEX_SHADER: &str = r#"
    attribute vec2 position;

    void main()
    {
        gl_Position = vec4(position, 0.0, 1.0);
    }
"#;

/// An animated color field driven by `iTime`.
pub const DEFAULT_FRAGMENT_SHADER: &str = r#"
    precision mediump float;

    uniform float iTime;
    uniform vec2 iResolution;

    void main()
    {
        vec2 uv = gl_FragCoord.xy / iResolution.xy;
        gl_FragColor = vec4(.5 + .5 * cos(iTime + uv.xyx + vec3(0., 2., 4.)), 1.);
    }
"#;
