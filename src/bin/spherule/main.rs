//! Spherule CLI - primitive mesh generation tool.
//!
//! Usage: spherule <COMMAND> [OPTIONS]
//!
//! Run `spherule --help` for available commands.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};

use spherule::buffers::{MeshBuffers, MAX_INDEXABLE_VERTICES};
use spherule::io;
use spherule::mesh::TriMesh;
use spherule::primitives::{icosahedron, Icosphere, MobiusTube, UvSphere};

#[derive(Parser)]
#[command(name = "spherule")]
#[command(author, version, about = "Primitive mesh generation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a primitive and save it to a mesh file
    Gen {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Output mesh file (.obj or .ply)
        output: PathBuf,
    },

    /// Generate a primitive and display its statistics
    Info {
        #[command(flatten)]
        shape: ShapeArgs,
    },
}

#[derive(Args)]
struct ShapeArgs {
    /// Primitive to generate
    #[arg(short, long, value_enum, default_value = "icosphere")]
    primitive: Primitive,

    /// Subdivision depth (icosphere)
    #[arg(short = 'd', long, default_value = "3")]
    subdivisions: u32,

    /// Latitude bands / rings around the centerline (uv-sphere, mobius-tube)
    #[arg(long, default_value = "32")]
    slices: usize,

    /// Vertices per ring (uv-sphere, mobius-tube)
    #[arg(long, default_value = "32")]
    segments: usize,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Primitive {
    /// Subdivided icosahedron projected onto the unit sphere
    Icosphere,
    /// The 12-vertex, 20-face base solid
    Icosahedron,
    /// Latitude/longitude sphere
    UvSphere,
    /// Tube with a half-twisted cross section
    MobiusTube,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Gen { shape, output } => cmd_gen(&shape, &output)?,
        Commands::Info { shape } => cmd_info(&shape)?,
    }

    Ok(())
}

fn build_shape(shape: &ShapeArgs) -> Result<TriMesh, Box<dyn std::error::Error>> {
    let mesh = match shape.primitive {
        Primitive::Icosphere => Icosphere::new(shape.subdivisions).build()?,
        Primitive::Icosahedron => icosahedron()?,
        Primitive::UvSphere => UvSphere::new(shape.slices, shape.segments)?.build()?,
        Primitive::MobiusTube => MobiusTube::new(shape.slices, shape.segments)?.build()?,
    };
    Ok(mesh)
}

fn cmd_gen(shape: &ShapeArgs, output: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mesh = build_shape(shape)?;
    let elapsed = start.elapsed();

    println!("Generated: {} vertices, {} faces ({:.2?})",
        mesh.num_vertices(), mesh.num_faces(), elapsed);

    io::save(&mesh, output)?;
    println!("Saved: {}", output.display());

    Ok(())
}

fn cmd_info(shape: &ShapeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = build_shape(shape)?;

    println!("Vertices: {}", mesh.num_vertices());
    println!("Faces: {}", mesh.num_faces());
    println!("Surface area: {:.6}", mesh.surface_area());
    println!("Euler characteristic: {}", mesh.euler_characteristic());

    if let Some((min, max)) = mesh.bounding_box() {
        println!("Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z);
    }

    if mesh.is_closed_manifold() {
        println!("Topology: Closed manifold");
    } else {
        println!("Topology: Open or non-manifold");
    }

    if mesh.num_vertices() <= MAX_INDEXABLE_VERTICES {
        let buffers = MeshBuffers::from_mesh(&mesh)?;
        println!(
            "GPU buffers: {} bytes positions, {} bytes indices (u16)",
            buffers.position_bytes().len(),
            buffers.index_bytes().len()
        );
    } else {
        println!("GPU buffers: exceeds 16-bit index range ({} vertices)", mesh.num_vertices());
    }

    Ok(())
}
