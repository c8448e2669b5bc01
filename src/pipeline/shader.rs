use anyhow::{Result, bail};

/// Compiles one WGSL shader module.
///
/// wgpu reports invalid shader source through the device error callback
/// rather than a return value; a validation error scope turns that back into
/// a `Result` carrying the compiler diagnostic. Compilation failure is
/// terminal for the caller.
pub fn compile(device: &wgpu::Device, label: &str, source: &str) -> Result<wgpu::ShaderModule> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    if let Some(err) = pollster::block_on(error_scope.pop()) {
        bail!("shader {label:?} failed to compile: {err}");
    }

    Ok(module)
}
