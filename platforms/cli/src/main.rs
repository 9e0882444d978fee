use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use tmc::codegen::{BuildOptions, CodeGenerator};
use tmc::loader::SourceLoader;
use tmc::toolchain::compile_to_binary;
use tmc::types::DEFAULT_TAPE_PADDING;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The path to the turing machine file
    file: PathBuf,

    /// The name of the output binary
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// The number of cells the tape is padded with on each side
    #[clap(long, default_value_t = DEFAULT_TAPE_PADDING)]
    tape_padding: usize,

    /// Make the compiled machine print each step
    #[clap(short = 'd', long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let machine = SourceLoader::load_machine(&cli.file).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        exit(1);
    });

    let options = BuildOptions {
        tape_padding: cli.tape_padding,
        debug: cli.debug,
    };

    let body = CodeGenerator::embedded()
        .generate(&machine, &options)
        .unwrap_or_else(|e| {
            eprintln!("error: {e}");
            exit(1);
        });

    let output = cli.output.unwrap_or_else(|| cli.file.with_extension(""));

    if let Err(e) = compile_to_binary(&body, &output) {
        eprintln!("error: {e}");
        exit(1);
    }
}
