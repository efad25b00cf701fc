use crate::components::style::{ParticleStyle, SceneStyle};
use crate::layout::nucleus::NucleonPlacement;
use crate::layout::orbit::{ElectronPlacement, ShellSphere};
use crate::renderer::instance::{InstanceBuffer, ParticleInstance, ShellInstance};

fn particle_instance(position: glam::Vec3, style: &ParticleStyle) -> ParticleInstance {
    ParticleInstance {
        x: position.x,
        y: position.y,
        z: position.z,
        radius: style.radius,
        r: style.color.r,
        g: style.color.g,
        b: style.color.b,
        emissive: style.emissive,
    }
}

/// Build the nucleon instance buffer, styling each nucleon by kind.
pub fn build_nucleon_buffer(
    placements: &[NucleonPlacement],
    style: &SceneStyle,
    buffer: &mut InstanceBuffer<ParticleInstance>,
) {
    buffer.clear();
    for nucleon in placements {
        buffer.push(particle_instance(nucleon.position, style.for_kind(nucleon.kind)));
    }
}

/// Build the electron instance buffer.
pub fn build_electron_buffer(
    placements: &[ElectronPlacement],
    style: &SceneStyle,
    buffer: &mut InstanceBuffer<ParticleInstance>,
) {
    buffer.clear();
    for electron in placements {
        buffer.push(particle_instance(electron.position, &style.electron));
    }
}

/// Build the shell boundary buffer.
pub fn build_shell_buffer(
    spheres: &[ShellSphere],
    style: &SceneStyle,
    buffer: &mut InstanceBuffer<ShellInstance>,
) {
    buffer.clear();
    for sphere in spheres {
        buffer.push(ShellInstance {
            radius: sphere.radius,
            axis_x: sphere.axis.x,
            axis_y: sphere.axis.y,
            axis_z: sphere.axis.z,
            rot_x: sphere.rotation.x,
            rot_y: sphere.rotation.y,
            r: style.shell_color.r,
            g: style.shell_color.g,
            b: style.shell_color.b,
            opacity: style.shell_opacity,
            _pad0: 0.0,
            _pad1: 0.0,
        });
    }
}
