use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use semdiff::{
    CompareConfig, Comparer, DocumenterClient, EmbeddingClient, EmbeddingModelInfo,
    GenerationParams, PromptLanguage, report,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Language {
    En,
    Pt,
}

impl From<Language> for PromptLanguage {
    fn from(language: Language) -> Self {
        match language {
            Language::En => PromptLanguage::English,
            Language::Pt => PromptLanguage::Portuguese,
        }
    }
}

/// Compare two text files by embedding similarity and ask an LLM to explain how they relate
#[derive(Parser)]
#[command(name = "semdiff")]
#[command(version)]
struct Cli {
    /// First artifact
    #[arg(default_value = "./arquivo_a.txt")]
    file_a: PathBuf,

    /// Second artifact
    #[arg(default_value = "./arquivo_b.txt")]
    file_b: PathBuf,

    /// Embedding server base URL
    #[arg(long, env = "SEMDIFF_EMBED_URL", default_value = "http://localhost:18115")]
    embed_endpoint: String,

    /// Generation server base URL
    #[arg(long, env = "SEMDIFF_GENERATE_URL", default_value = "http://localhost:18116")]
    generate_endpoint: String,

    /// Pairs passed to the generator
    #[arg(short = 'k', long, default_value_t = semdiff::similarity::DEFAULT_TOP_K)]
    top_k: usize,

    /// Characters per chunk
    #[arg(long, default_value_t = semdiff::DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Texts per embedding request
    #[arg(long, default_value_t = semdiff::embedder::DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    #[arg(long, default_value_t = 900)]
    max_new_tokens: u32,

    #[arg(long, default_value_t = 0.7)]
    temperature: f32,

    #[arg(long, default_value_t = 0.9)]
    top_p: f32,

    #[arg(long, default_value_t = 1.1)]
    repetition_penalty: f32,

    /// Disable sampling
    #[arg(long)]
    greedy: bool,

    /// Prompt language
    #[arg(long, value_enum, default_value = "en")]
    language: Language,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Only rank pairs, do not call the generator
    #[arg(long)]
    skip_generation: bool,

    /// Abort unless both model servers report a CUDA device
    #[arg(long, env = "SEMDIFF_REQUIRE_GPU")]
    require_gpu: bool,

    /// HTTP timeout for both model servers
    #[arg(long, env = "SEMDIFF_TIMEOUT_SECS", default_value_t = 600)]
    timeout_secs: u64,
}

impl Cli {
    fn compare_config(&self) -> CompareConfig {
        CompareConfig {
            chunk_size: self.chunk_size,
            top_k: self.top_k,
            batch_size: self.batch_size,
            generation: GenerationParams {
                max_new_tokens: self.max_new_tokens,
                temperature: self.temperature,
                top_p: self.top_p,
                repetition_penalty: self.repetition_penalty,
                do_sample: !self.greedy,
                ..Default::default()
            },
            language: self.language.into(),
            skip_generation: self.skip_generation,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let start_time = Instant::now();
    let config = cli.compare_config();
    config.validate().context("Invalid configuration")?;

    let embedder = EmbeddingClient::with_timeout(&cli.embed_endpoint, Duration::from_secs(cli.timeout_secs))
        .context("Failed to build embedding client")?
        .normalize(config.normalize);
    let generator = DocumenterClient::with_timeout(&cli.generate_endpoint, Duration::from_secs(cli.timeout_secs))
        .context("Failed to build generation client")?
        .params(config.generation.clone())
        .language(config.language);

    if cli.require_gpu {
        let health = embedder
            .health_check()
            .await
            .context("Embedding server health check failed")?;
        if !health.is_gpu() {
            bail!("Embedding server ({}) is not running on CUDA", health.model);
        }
        if !cli.skip_generation {
            let health = generator
                .health_check()
                .await
                .context("Generation server health check failed")?;
            if !health.is_gpu() {
                bail!("Generation server ({}) is not running on CUDA", health.model);
            }
        }
    }

    info!(
        a = %cli.file_a.display(),
        b = %cli.file_b.display(),
        expected_model = %EmbeddingModelInfo::default().name,
        "comparing artifacts"
    );

    let comparer = Comparer::new(embedder, generator, config)?;
    let comparison = comparer
        .compare_files(&cli.file_a, &cli.file_b)
        .await
        .with_context(|| {
            format!(
                "Failed to compare {} and {}",
                cli.file_a.display(),
                cli.file_b.display()
            )
        })?;

    match cli.format {
        OutputFormat::Text => print!("{}", report::render_text(&comparison)),
        OutputFormat::Json => println!("{}", report::render_json(&comparison)?),
    }

    info!(
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "comparison complete"
    );

    Ok(())
}
