//! v8-symbolize options parser.

use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(about = "V8 engine log symbolication tool")]
pub struct Application {
    #[structopt(short, long, help = "Print progress of processing")]
    pub verbose: bool,

    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(StructOpt)]
pub enum Command {
    #[structopt(about = "Resolves tick samples against the code events of the log")]
    Resolve {
        #[structopt(parse(from_os_str), help = "Path to the input engine log file")]
        log: PathBuf,

        #[structopt(
            parse(from_os_str),
            short,
            long,
            help = "Optional path to generated file (STDOUT otherwise)"
        )]
        output: Option<PathBuf>,
    },

    #[structopt(about = "Prints the symbol table left after the last code event")]
    Dump {
        #[structopt(parse(from_os_str), help = "Path to the input engine log file")]
        log: PathBuf,

        #[structopt(
            parse(from_os_str),
            short,
            long,
            help = "Optional path to generated file (STDOUT otherwise)"
        )]
        output: Option<PathBuf>,
    },
}

/// Constructs an instance of the Application.
pub fn application() -> Application {
    Application::from_args()
}
