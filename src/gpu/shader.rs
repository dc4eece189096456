use bytemuck::{Pod, Zeroable};

pub const SURFACE_SHADER: &str = include_str!("surface.wgsl");
pub const AXES_SHADER: &str = include_str!("axes.wgsl");

/// Translucent blue of the top.
pub const SURFACE_COLOR: [f32; 4] = [0.12, 0.32, 0.92, 0.8];

/// Direction towards the light, in world space.
pub const LIGHT_DIR: [f32; 4] = [0.4, -0.3, 1.0, 0.0];

/// Uniforms shared by both pipelines. Layout matches `Uniforms` in the WGSL.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub surface_color: [f32; 4],
    pub light_dir: [f32; 4],
}

/// One vertex of the axis box.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates WGSL code using naga.
    fn validate_wgsl(code: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(code)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(())
    }

    #[test]
    fn test_surface_shader_validates() {
        validate_wgsl(SURFACE_SHADER).unwrap();
    }

    #[test]
    fn test_axes_shader_validates() {
        validate_wgsl(AXES_SHADER).unwrap();
    }

    #[test]
    fn test_uniform_layout() {
        // mat4x4 + two vec4 in std140.
        assert_eq!(std::mem::size_of::<Uniforms>(), 96);
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    }
}
