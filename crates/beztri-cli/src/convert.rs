use std::path::PathBuf;

use color_eyre::eyre::Error;

use crate::SceneArgs;

/// Rewrite a scene in canonical form, interior points explicit.
#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output path
    #[arg(short, long)]
    output: PathBuf,
}

impl Args {
    pub fn run(self) -> Result<(), Error> {
        let scene = self.scene.import()?;
        beztri_io::export_scene(&self.output, &scene)?;

        println!(
            "wrote {} ({} patches, {} control points)",
            self.output.display(),
            scene.patch_count(),
            scene.vertex_buffer().len()
        );

        Ok(())
    }
}
