use clap::{Parser, Subcommand, ValueEnum};
use leafprint::{EnhancementRequest, FooterMode, PipelineBuilder, PipelineError, build_prompt};
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Render enhanced worksheet text as PDF", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a text file (or `-` for stdin) to PDF
    Render {
        input: PathBuf,
        /// Output path; defaults to the input name with a `.pdf` extension
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the PDF as base64 on stdout instead of writing a file
        #[arg(long, default_value_t = false)]
        base64: bool,
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum)]
        footers: Option<FooterArg>,
    },
    /// Print the classified blocks of a text file
    Blocks { input: PathBuf },
    /// Print the enhancement prompt for a text file
    Prompt {
        input: PathBuf,
        #[arg(long, default_value = leafprint::enhance::DEFAULT_SUBJECT)]
        subject: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FooterArg {
    Estimated,
    Exact,
    Never,
}

impl From<FooterArg> for FooterMode {
    fn from(arg: FooterArg) -> Self {
        match arg {
            FooterArg::Estimated => FooterMode::Estimated,
            FooterArg::Exact => FooterMode::Exact,
            FooterArg::Never => FooterMode::Never,
        }
    }
}

fn read_input(path: &Path) -> Result<String, PipelineError> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(fs::read_to_string(path)?)
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "leafprint=info");
        }
    }
    env_logger::init();

    match Args::parse().command {
        Command::Render {
            input,
            output,
            base64,
            config,
            footers,
        } => {
            let mut builder = PipelineBuilder::new();
            if let Some(path) = config {
                builder = builder.with_config_file(path)?;
            }
            if let Some(mode) = footers {
                builder = builder.with_footer_mode(mode.into());
            }
            let pipeline = builder.build()?;
            let pdf = pipeline.generate(&read_input(&input)?)?;

            if base64 {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", pdf.to_base64())?;
            } else {
                let target = output.unwrap_or_else(|| {
                    if input.as_os_str() == "-" {
                        PathBuf::from("worksheet.pdf")
                    } else {
                        input.with_extension("pdf")
                    }
                });
                pdf.write_to_file(&target)?;
                println!("Wrote {} ({} pages)", target.display(), pdf.page_count);
            }
        }
        Command::Blocks { input } => {
            let text = read_input(&input)?;
            let pipeline = PipelineBuilder::new().build()?;
            let mut stdout = io::stdout().lock();
            for event in pipeline.parse(&text) {
                match event.as_block() {
                    Some(block) => writeln!(stdout, "{:>4}  {:?}  {}", block.line, block.kind, block.text)?,
                    None => writeln!(stdout, "      {:?}", event)?,
                }
            }
        }
        Command::Prompt { input, subject } => {
            let request = EnhancementRequest::new(read_input(&input)?, subject);
            print!("{}", build_prompt(&request));
        }
    }
    Ok(())
}
