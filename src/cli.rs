use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
phredsum version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   summed Phred quality scores for every read in a FASTQ file";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    styles = STYLES
)]
pub struct Cli {
    /// the input .fastq file
    #[arg(long)]
    pub input: String,

    /// the output format, either 'csv' or 'txt'. only consulted when writing
    /// to a file; terminal output has a fixed format.
    #[arg(long, verbatim_doc_comment)]
    pub format: String,

    /// where results go: 'terminal' or 'file'
    #[arg(long)]
    pub destination: String,

    /// the output file (required when --destination file)
    #[arg(long)]
    pub output: Option<String>,
}
