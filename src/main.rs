use clap::{Parser, Subcommand};
use ramen_thumbs::{output, process, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "ramen-thumbs")]
#[command(about = "Generate square thumbnails for ramen posts")]
#[command(long_about = "\
Generate square thumbnails for ramen posts

Every post directory holds a thumbnail.<ext>. Each one is resized so its
short edge is 400px (bicubic), cropped to a centered 400x400 window and
saved next to the source as thumbnail_small.<ext>.

Content structure:

  content/ramen/
  ├── miso/
  │   ├── thumbnail.jpg            # Source
  │   └── thumbnail_small.jpg      # Generated, 400x400
  └── shoyu_zurich/
      └── thumbnail.jpg            # Window shifted down for this post

Posts shoyu_zurich, tantanmen and tonkotsu use hand-tuned crop shifts.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory searched for thumbnail.<ext> files
    #[arg(long, default_value = scan::DEFAULT_SOURCE_ROOT, global = true)]
    source: PathBuf,

    /// Print one line per written thumbnail
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Write thumbnail_small.<ext> next to every source (default)
    Build,
    /// Show the planned resize and crop for every source without writing
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mode = match cli.command.unwrap_or(Command::Build) {
        Command::Build => process::Mode::Write,
        Command::Check => process::Mode::DryRun,
    };

    let verbose = cli.verbose;
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_process_event(&event, verbose);
        }
    });

    let result = process::process(&cli.source, mode, Some(tx));
    if printer.join().is_err() {
        return Err("progress printer thread panicked".into());
    }
    let result = result?;

    output::print_summary(&result, verbose);

    Ok(())
}
