use bytemuck::{Pod, Zeroable};

/// Per-instance data for a sphere particle (nucleon or electron).
/// Read by the TypeScript scene as a flat f32 view.
/// 8 floats = 32 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-instance data for a translucent shell boundary sphere.
/// 12 floats = 48 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ShellInstance {
    pub radius: f32,
    pub axis_x: f32,
    pub axis_y: f32,
    pub axis_z: f32,
    /// Euler rotation about X, then Y.
    pub rot_x: f32,
    pub rot_y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl ShellInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Growable buffer of instances, rebuilt every frame.
#[derive(Debug, Clone)]
pub struct InstanceBuffer<T: Pod> {
    instances: Vec<T>,
}

impl<T: Pod> InstanceBuffer<T> {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: T) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &[T] {
        &self.instances
    }

    /// The whole buffer as a flat f32 slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl<T: Pod> Default for InstanceBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
