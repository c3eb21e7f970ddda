mod convert;
mod export;
mod info;

use std::path::PathBuf;

use beztri_core::BezierScene;
use beztri_io::{import_scene_with_options, ImportOptions};
use clap::{builder::styling, Parser};
use color_eyre::eyre::Error;

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Blue.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Beztri command line interface
///
/// `beztri` inspects `.bezier` scene files, rewrites them in canonical form
/// and exports tessellated Wavefront OBJ meshes.
#[derive(Debug, Parser)]
#[command(version = clap::crate_version!(), styles = STYLES)]
pub enum Args {
    Info(crate::info::Args),
    Convert(crate::convert::Args),
    Export(crate::export::Args),
}

impl Args {
    pub fn run(self) -> Result<(), Error> {
        match self {
            Self::Info(args) => args.run()?,
            Self::Convert(args) => args.run()?,
            Self::Export(args) => args.run()?,
        }

        Ok(())
    }
}

/// Arguments shared by every subcommand that reads a scene.
#[derive(Debug, clap::Args)]
pub struct SceneArgs {
    /// Path of the `.bezier` scene to read
    scene: PathBuf,

    /// Skip malformed lines instead of aborting the import
    #[arg(long)]
    skip_malformed: bool,
}

impl SceneArgs {
    pub fn import(&self) -> Result<BezierScene, Error> {
        let mut options = ImportOptions::new();
        if self.skip_malformed {
            options = options.skip_malformed();
        }
        let scene = import_scene_with_options(&self.scene, &options)?;
        Ok(scene)
    }
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.run()?;

    Ok(())
}
