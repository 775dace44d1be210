use anyhow::{Context, Result};
use clap::Parser;
use hydrocarbon::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Describe and draw straight-chain hydrocarbons from their IUPAC names.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Names to process. Without any, names are read interactively.
    names: Vec<String>,

    /// Directory the drawings are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Also write a Graphviz DOT file for each molecule
    #[arg(long)]
    dot: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    if !args.names.is_empty() {
        for name in &args.names {
            process(name, &args.out_dir, args.dot)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nenter a organic chemical name or type exit: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let name = line?;
        let name = name.trim();
        if name == "exit" {
            break;
        }
        process(name, &args.out_dir, args.dot)?;
    }
    Ok(())
}

/// Describes and draws one molecule. Invalid names are reported and
/// skipped; anything else that goes wrong is fatal.
fn process(name: &str, out_dir: &Path, dot: bool) -> Result<()> {
    let molecule = match Molecule::from_iupac(name) {
        Ok(molecule) => molecule,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{name} is an invalid chemical name");
            return Ok(());
        }
    };

    println!("{}", molecule.describe());

    let svg_path = out_dir.join(format!("{name}.svg"));
    molecule
        .render_to(&svg_path)
        .with_context(|| format!("Failed to draw {name}"))?;
    println!("SVG file saved as {}", svg_path.display());

    if dot {
        let dot_path = out_dir.join(format!("{name}.dot"));
        let graph = molecule.to_graph()?;
        std::fs::write(&dot_path, generate_dot(&graph))
            .with_context(|| format!("Failed to write {}", dot_path.display()))?;
        println!("DOT file saved as {}", dot_path.display());
    }
    Ok(())
}
