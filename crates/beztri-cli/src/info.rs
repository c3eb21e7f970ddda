use beztri_core::SceneStats;
use color_eyre::eyre::Error;
use glam::Mat4;
use serde::Serialize;

use crate::SceneArgs;

/// Import a scene and print a summary.
#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    scene: SceneArgs,

    /// Emit the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(flatten)]
    stats: SceneStats,
    scale: f32,
    model_matrix: Mat4,
}

impl Args {
    pub fn run(self) -> Result<(), Error> {
        let scene = self.scene.import()?;
        let stats = scene.stats();

        if self.json {
            let report = Report {
                stats,
                scale: stats.bounds.normalizing_scale(),
                model_matrix: scene.model_matrix(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("patches:  {}", stats.patch_count);
        println!("vertices: {}", stats.vertex_count);
        println!("indices:  {}", stats.index_count);
        if stats.bounds.is_valid() {
            println!("bounds:   {} to {}", stats.bounds.min, stats.bounds.max);
            println!("center:   {}", stats.bounds.center());
            println!("scale:    {}", stats.bounds.normalizing_scale());
        } else {
            println!("bounds:   (empty)");
        }
        println!("matrix:   {}", scene.model_matrix());

        Ok(())
    }
}
