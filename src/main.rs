use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tree_ecdh::{
    generate_participants, inspect_participant_file, reduce_participant_file, shared_hex,
    CurveKind,
};

#[derive(Parser)]
#[command(name = "tree-ecdh")]
#[command(about = "CLI for tree-structured ECDH group secrets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ephemeral keypairs for a group of participants
    Generate {
        #[arg(short, long, default_value = "4")]
        participants: usize,
        /// Curve backend. curve25519 (~128-bit security) is weaker than p521 (~256-bit)
        #[arg(short, long, value_enum, default_value_t = CurveKind::P521)]
        curve: CurveKind,
        #[arg(short, long, default_value = "./results/participants.json")]
        output: PathBuf,
    },
    /// Reduce a participant file to its group secret
    Reduce {
        #[arg(short, long, default_value = "./results/participants.json")]
        input: PathBuf,
    },
    /// Derive the pairwise secret of one private key and one peer public key
    Shared {
        /// Curve backend. curve25519 (~128-bit security) is weaker than p521 (~256-bit)
        #[arg(short, long, value_enum, default_value_t = CurveKind::P521)]
        curve: CurveKind,
        /// Hex encoded private scalar
        #[arg(long)]
        private: String,
        /// Hex encoded peer public key
        #[arg(long)]
        peer: String,
    },
    /// Show the curve, size and public keys of a participant file
    Inspect {
        #[arg(short, long, default_value = "./results/participants.json")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { participants, curve, output } => {
            generate_participants(participants, curve, &output).map(|_| {
                format!(
                    "Generated {participants} {curve} participants. Keys saved to {}",
                    output.display()
                )
            })
        }
        Commands::Reduce { input } => reduce_participant_file(&input),
        Commands::Shared { curve, private, peer } => shared_hex(curve, &private, &peer),
        Commands::Inspect { input } => inspect_participant_file(&input).map(|s| s.to_string()),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("** Error ** \n {err}");
            std::process::exit(1);
        }
    }
}
