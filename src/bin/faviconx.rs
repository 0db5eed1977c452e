//! faviconx command-line binary

use clap::Parser;
use faviconx::{
    GenerateOptions, ImportanceOption, exit_codes::*, generate_favicons, logger::JsonLogger,
    matrix, report,
};
use std::{env, panic, path::PathBuf, process};

const VERSION: &str = faviconx::version::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "faviconx",
    version = VERSION,
    about = "Generate favicons, HTML link tags and a web manifest from a source image"
)]
struct Args {
    /// Path to the source image file (PNG, JPG, SVG, etc.)
    source_image: PathBuf,

    /// Directory where favicons will be saved
    output_directory: PathBuf,

    /// Skip generating index.html and site.webmanifest
    #[arg(long)]
    no_html: bool,

    /// Print the resolved configuration before running
    #[arg(short, long)]
    verbose: bool,

    /// Comma-separated icon statuses to generate: R,RC,O,L,ALL
    #[arg(long, default_value = "R,RC,O,L")]
    icon_status: String,

    /// Prefix replacing "favicon" in every generated filename
    #[arg(long, default_value = matrix::DEFAULT_PREFIX)]
    prefix: String,

    /// Filter icons by importance level (overrides --icon-status unless "all")
    #[arg(long, value_enum, default_value_t = ImportanceOption::All)]
    option: ImportanceOption,

    /// Log level (trace, debug, info, warn, error, json[:level])
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in faviconx");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap so build details are included
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("faviconx {}", faviconx::version::full_version());
        return EXIT_SUCCESS;
    }

    let args = Args::parse();

    if let Some(ref level) = args.log_level {
        JsonLogger::init_with_level(level, "CLI --log-level");
    } else {
        JsonLogger::init(if args.verbose { "info" } else { "warn" });
    }
    log::trace!("📋 Arguments: {:?}", args);

    let selection = match matrix::resolve_selection(args.option, &args.icon_status) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("Error: {}", e);
            return e.exit_code();
        }
    };

    let options = GenerateOptions {
        selection,
        prefix: args.prefix,
        emit_metadata: !args.no_html,
    };

    if args.verbose {
        for line in report::config_lines(&args.source_image, &args.output_directory, &options) {
            println!("{}", line);
        }
        println!("Option: {}", args.option.as_str());
    }

    match generate_favicons(&args.source_image, &args.output_directory, &options) {
        Ok(run_report) => {
            println!();
            println!("✨ Favicons generated!");
            report::print_summary(&run_report.results, &options.prefix);
            println!();
            println!(
                "✅ Favicon generation complete! ({}/{} icons)",
                run_report.generated_count(),
                run_report.results.len()
            );
            println!("📁 Output directory: {}", args.output_directory.display());
            if let Some(html) = run_report.html_path {
                println!("🌐 Open {} in your browser to test", html.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}
