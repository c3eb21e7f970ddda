use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use beztri_mesh::{tessellate_scene, Mesh, TessellationOptions};
use color_eyre::eyre::Error;

use crate::SceneArgs;

/// Tessellate a scene and write a Wavefront OBJ mesh.
#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output path
    #[arg(short, long)]
    output: PathBuf,

    /// Subdivisions per patch edge
    #[arg(long, default_value = "8")]
    level: u32,

    /// Bake the normalizing model matrix into the mesh
    #[arg(long)]
    apply_transform: bool,
}

impl Args {
    pub fn run(self) -> Result<(), Error> {
        let scene = self.scene.import()?;
        let options = TessellationOptions::with_level(self.level);
        let mut mesh = tessellate_scene(&scene, &options);
        if self.apply_transform {
            mesh.transform(scene.model_matrix());
        }

        let file = File::create(&self.output)?;
        let mut writer = BufWriter::new(file);
        write_obj(&mut writer, &mesh)?;
        writer.flush()?;

        println!(
            "wrote {} ({} vertices, {} triangles)",
            self.output.display(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(())
    }
}

fn write_obj(writer: &mut impl Write, mesh: &Mesh) -> Result<(), std::io::Error> {
    writeln!(writer, "# beztri export")?;
    writeln!(writer, "o scene")?;

    for p in &mesh.vertices {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in &mesh.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    // OBJ indices are one-based.
    for tri in mesh.indices.chunks_exact(3) {
        let a = tri[0] + 1;
        let b = tri[1] + 1;
        let c = tri[2] + 1;
        writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }

    Ok(())
}
