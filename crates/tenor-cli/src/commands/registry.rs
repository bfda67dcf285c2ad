//! Registry command implementation.
//!
//! Lists the names accepted for calendars, day counts, interpolation
//! methods and bootstrap traits, or resolves a single name.

use std::fmt::Display;

use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};

use tenor_core::registry::{calendar_registry, day_count_registry, ObjectRegistry};
use tenor_curves::{BootstrapTrait, InterpolationMethod};

/// Arguments for the registry command.
#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// Which registry to show
    #[arg(value_enum)]
    pub kind: RegistryKind,

    /// Resolve a single name instead of listing the registry
    #[arg(long)]
    pub lookup: Option<String>,
}

/// Registry choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegistryKind {
    /// Business day calendars
    Calendars,
    /// Day count conventions
    DayCounts,
    /// Interpolation methods
    Interpolations,
    /// Bootstrap traits
    Traits,
}

fn interpolation_registry() -> ObjectRegistry<InterpolationMethod> {
    let mut registry = ObjectRegistry::new("interpolation");
    for method in InterpolationMethod::all() {
        registry.register(method.to_string(), *method);
    }
    registry
}

fn trait_registry() -> ObjectRegistry<BootstrapTrait> {
    let mut registry = ObjectRegistry::new("bootstrap trait");
    for tr in BootstrapTrait::all() {
        registry.register(tr.to_string(), *tr);
    }
    registry
}

/// Execute the registry command.
pub fn execute(args: RegistryArgs) -> Result<()> {
    let lookup = args.lookup.as_deref();
    match args.kind {
        RegistryKind::Calendars => show(&calendar_registry(), lookup),
        RegistryKind::DayCounts => show(&day_count_registry(), lookup),
        RegistryKind::Interpolations => show(&interpolation_registry(), lookup),
        RegistryKind::Traits => show(&trait_registry(), lookup),
    }
}

fn show<T: Display>(registry: &ObjectRegistry<T>, lookup: Option<&str>) -> Result<()> {
    match lookup {
        Some(name) => {
            let object = registry
                .from_name(name)
                .map_err(|e| anyhow!("{e}\n\n{}", registry.help()))?;
            println!("{name}: {object}");
        }
        None => println!("{}", registry.help()),
    }
    Ok(())
}
