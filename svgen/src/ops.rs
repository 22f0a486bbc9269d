//! Manifest-to-source assembly, kept apart from the command layer so it can
//! be exercised without touching the filesystem.

use eyre::Result;
use svgen_manifest::{Manifest, PortDirection, PortSpec};
use svgen_sv::{HeaderInfo, Module, Port, SvFile};

/// A fully rendered module, ready to print or write.
pub struct RenderedModule {
    /// Module name, also the output file stem.
    pub name: String,
    /// Complete file content including the header banner.
    pub content: String,
}

/// Assemble the manifest's module into rendered source text.
///
/// The creation `date` is passed in so output is deterministic for a given
/// manifest.
pub fn build_source(manifest: &Manifest, date: &str) -> Result<RenderedModule> {
    let mut module = Module::new(&manifest.module.name);
    for spec in &manifest.ports {
        module = module.port(build_port(spec)?);
    }
    for parameter in &manifest.parameters {
        module = module.parameter(&parameter.name, &parameter.value);
    }
    for pkg in &manifest.imports {
        module = module.import_pkg(pkg);
    }

    let mut sv = SvFile::new();
    if !manifest.body.is_empty() {
        sv.push(manifest.body.clone());
    }
    sv.wrap_module(&module);

    let name = manifest.module.name.clone();
    let info = HeaderInfo::new(
        &name,
        manifest.module.project.as_deref().unwrap_or("svgen"),
        &manifest.module.description,
        format!("{name}.sv"),
        date,
    );

    Ok(RenderedModule {
        content: sv.render(Some(&info)),
        name,
    })
}

fn build_port(spec: &PortSpec) -> Result<Port> {
    let port = match (spec.direction, &spec.msb, &spec.lsb) {
        (PortDirection::Input, Some(msb), Some(lsb)) => Port::input_vec(&spec.name, msb, lsb),
        (PortDirection::Input, ..) => Port::input(&spec.name),
        (PortDirection::Output, Some(msb), Some(lsb)) => Port::output_vec(&spec.name, msb, lsb),
        (PortDirection::Output, ..) => Port::output(&spec.name),
    }?;
    Ok(match &spec.ty {
        Some(ty) => port.with_type(ty),
        None => port,
    })
}
