//! pad-export - Padforge asset export tool
//!
//! Converts OBJ triangle meshes to the fixed-point PCObj binaries consumed
//! by the ClassPad renderer: one big-endian file for the calculator and a
//! little-endian mirror for the host.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pad_common::{MESH_EXT_CALC, MESH_EXT_HOST};
use std::path::PathBuf;

// Use modules from library
use pad_export::mesh;

#[derive(Parser)]
#[command(name = "pad-export")]
#[command(about = "Padforge asset export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an OBJ mesh to the PCObj output pair
    Mesh {
        /// Input OBJ file
        input: PathBuf,

        /// Calculator (big-endian) output file
        #[arg(long)]
        calc: Option<PathBuf>,

        /// Host (little-endian) output file
        #[arg(long)]
        host: Option<PathBuf>,
    },

    /// Parse an OBJ mesh and report its record counts
    Info {
        /// Input OBJ file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mesh { input, calc, host } => {
            let calc = calc.unwrap_or_else(|| input.with_extension(MESH_EXT_CALC));
            let host = host.unwrap_or_else(|| input.with_extension(MESH_EXT_HOST));
            tracing::info!("Converting {:?} -> {:?} + {:?}", input, calc, host);
            mesh::convert_obj(&input, &calc, &host)?;
            tracing::info!("Done!");
        }

        Commands::Info { input } => {
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read OBJ: {:?}", input))?;
            let mesh = mesh::parse_obj(&source)?;
            println!("vertices:  {}", mesh.vertices.len());
            println!("faces:     {}", mesh.faces.len());
            println!("uv faces:  {}", mesh.uv_faces.len());
            println!("uv coords: {}", mesh.uv_coords.len());
            println!("uv mapped: {}", mesh.has_uvs());
        }
    }

    Ok(())
}
