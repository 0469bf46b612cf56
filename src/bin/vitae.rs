use std::{
    fmt,
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "vitae", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a résumé JSON file to PDF (requires `node` and a JSON Resume theme CLI).
    Render(RenderArgs),
    /// Tailor a résumé for a job title and keywords.
    Tailor(TailorArgs),
    /// Tailor a résumé for a job record and render it as `resume_job_<id>.pdf`.
    Job(JobArgs),
}

#[derive(Args, Debug)]
struct RendererArgs {
    /// Theme directory containing the CLI entry point.
    #[arg(long)]
    theme: PathBuf,

    /// Node executable.
    #[arg(long, default_value = vitae::render::node::DEFAULT_NODE_BIN)]
    node: PathBuf,

    /// Entry point script, relative to the theme directory.
    #[arg(long, default_value = vitae::render::node::DEFAULT_CLI_SCRIPT)]
    cli_script: PathBuf,

    /// Scratch directory for intermediate files [default: system temp dir].
    #[arg(long)]
    tmp_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input résumé JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PDF path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    renderer: RendererArgs,
}

#[derive(Parser, Debug)]
struct TailorArgs {
    /// Input résumé JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Target job title.
    #[arg(long)]
    title: String,

    /// Keyword to emphasize (repeatable, order is kept).
    #[arg(long = "keyword")]
    keywords: Vec<String>,

    /// Job description text.
    #[arg(long, default_value = "")]
    description: String,

    /// Output JSON path [default: stdout].
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct JobArgs {
    /// Input résumé JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Job record JSON: `{"id", "title", "description", "keywords"}`.
    #[arg(long)]
    job: PathBuf,

    /// Directory the PDF is written to (created if missing).
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    renderer: RendererArgs,
}

#[derive(Deserialize, Debug)]
struct JobRecord {
    id: JobId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    keywords: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum JobId {
    Number(u64),
    Text(String),
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Number(n) => write!(f, "{n}"),
            JobId::Text(s) => f.write_str(s),
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Tailor(args) => cmd_tailor(args),
        Command::Job(args) => cmd_job(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}=info", env!("CARGO_CRATE_NAME"))));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn make_generator(args: &RendererArgs) -> anyhow::Result<vitae::ResumeGenerator> {
    let mut cfg = vitae::GeneratorConfig::new(&args.theme);
    cfg.node_bin = args.node.clone();
    cfg.cli_script = args.cli_script.clone();
    if let Some(tmp_dir) = &args.tmp_dir {
        cfg = cfg.with_tmp_dir(tmp_dir);
    }
    Ok(vitae::ResumeGenerator::new(cfg)?)
}

fn read_document(path: &Path) -> anyhow::Result<vitae::Document> {
    vitae::Document::from_path(path)
        .with_context(|| format!("load résumé '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let generator = make_generator(&args.renderer)?;
    let out = generator.generate_pdf(&doc, &args.out, None)?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_tailor(args: TailorArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let tailored = vitae::TailorRequest::new(args.title, args.keywords)
        .with_description(args.description)
        .apply(&doc);

    match args.out {
        Some(out) => {
            tailored.write_to_path(&out)?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            tailored.write_pretty(&mut stdout)?;
            writeln!(stdout).context("write tailored résumé to stdout")?;
        }
    }
    Ok(())
}

fn cmd_job(args: JobArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let f = File::open(&args.job)
        .with_context(|| format!("open job record '{}'", args.job.display()))?;
    let job: JobRecord =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse job record JSON")?;

    let generator = make_generator(&args.renderer)?;
    tracing::info!(job_id = %job.id, title = %job.title, "tailoring résumé for job");
    let tailored =
        generator.tailor_resume_for_job(&doc, &job.description, &job.title, &job.keywords);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let out_path = args.out_dir.join(format!("resume_job_{}.pdf", job.id));
    let out = generator.generate_pdf(&tailored, &out_path, None)?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
