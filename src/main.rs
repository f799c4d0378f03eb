use clap::{Parser, Subcommand};
use cubedeck::canonical;
use cubedeck::cursor::StepCursor;
use cubedeck::error::CdResult;
use cubedeck::facelet;
use cubedeck::model::FaceletCube;
use cubedeck::notation::{self, Algorithm};
use cubedeck::solver::SolverClient;
use cubedeck::validation;
use std::process;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the external solving service.
    #[arg(global = true, long, default_value = "http://127.0.0.1:8000")]
    url: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random scramble.
    Scramble {
        #[arg(long, default_value_t = 20)]
        length: usize,
    },
    /// Reverse-and-invert a move sequence.
    Reverse { alg: String },
    /// Run the full solvability report on a cube string.
    Validate {
        facelets: String,
        /// Repair a mis-oriented scan first: reorder faces by centers,
        /// then search whole-cube rotations.
        #[arg(long, default_value_t = false)]
        fix_orientation: bool,
    },
    /// Ask the solving service for a solution.
    Solve {
        /// A 54-char facelet string or a move sequence to scramble with.
        state: String,
        /// Relabel the solution from solver coordinates to in-hand
        /// coordinates.
        #[arg(long, default_value_t = false)]
        hand_remap: bool,
    },
    /// Solve, then print every step of the walk-through.
    Walk { state: String },
}

/// Accept either a facelet string or a move sequence.
fn resolve_state(text: &str) -> CdResult<FaceletCube> {
    let normalized = facelet::normalize(text);
    if normalized.len() == facelet::FACELET_COUNT && text.split_whitespace().count() <= 1 {
        return FaceletCube::from_facelets(&normalized);
    }
    let alg = Algorithm::parse(text)?;
    let mut cube = FaceletCube::solved();
    cube.apply(&alg);
    Ok(cube)
}

async fn run(cli: Cli) -> CdResult<()> {
    match cli.command {
        Commands::Scramble { length } => {
            println!("{}", notation::random_scramble(length));
        }
        Commands::Reverse { alg } => {
            println!("{}", notation::reverse_algorithm(&alg)?);
        }
        Commands::Validate {
            facelets,
            fix_orientation,
        } => {
            let mut normalized = facelet::normalize(&facelets);
            println!("Normalized: {} ({} facelets)", normalized, normalized.len());

            if fix_orientation && !canonical::has_canonical_centers(&normalized) {
                let mut cube = FaceletCube::from_facelets(&normalized)?;
                match canonical::canonicalize(&mut cube) {
                    Ok(rotation) => {
                        normalized = cube.to_facelets();
                        println!("Reoriented ({}): {}", rotation, normalized);
                    }
                    Err(_) => {
                        // Rotation search failed; the scan may have
                        // delivered the face groups out of order.
                        normalized = canonical::reorder_faces_by_centers(&normalized)?;
                        println!("Reordered faces: {}", normalized);
                    }
                }
            }

            validation::ensure_solvable(&normalized)?;
            println!("✅ Cube is solvable.");
        }
        Commands::Solve { state, hand_remap } => {
            let cube = resolve_state(&state)?;
            let snapshot = cube.to_facelets();
            validation::ensure_solvable(&snapshot)?;

            let client = SolverClient::new(cli.url);
            let solution = client.solve(&snapshot).await?;
            println!("Solution ({} moves): {}", solution.len(), solution);
            if hand_remap {
                println!("In-hand:  {}", solution.hand_remapped());
            }
        }
        Commands::Walk { state } => {
            let cube = resolve_state(&state)?;
            let snapshot = cube.to_facelets();
            validation::ensure_solvable(&snapshot)?;

            let client = SolverClient::new(cli.url);
            let solution = client.solve(&snapshot).await?;
            println!("Solution: {}", solution);

            let mut cursor = StepCursor::new(solution);
            let mut walker = cube;
            println!("{}  {}", cursor.label(), walker.to_facelets());
            while let Some(m) = cursor.advance() {
                walker.apply_move(m);
                println!("{}  {} (played {})", cursor.label(), walker.to_facelets(), m);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        process::exit(1);
    }
}
