use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::Parser;

use speakscore_core::audio::feedback::generate_audio_feedback;
use speakscore_core::audio::transcript::TranscriptWord;
use speakscore_core::pipeline::analyze_answer_use_case::AnalyzeAnswerUseCase;
use speakscore_core::pipeline::request::{AnalysisRequest, ProvidedAudioMetrics};
use speakscore_core::shared::question::{Question, QuestionType};

/// Score a spoken interview answer and print the analysis as JSON.
#[derive(Parser)]
#[command(name = "speakscore")]
struct Cli {
    /// Transcript text file ("-" reads stdin).
    transcript: PathBuf,

    /// The interview question being answered.
    #[arg(long)]
    question: String,

    /// Question type: Behavioral, Technical, Situational, or Company-Specific.
    #[arg(long, default_value = "Behavioral")]
    question_type: String,

    /// Question category label (free-form, e.g. "Teamwork").
    #[arg(long, default_value = "General")]
    category: String,

    /// JSON file of per-word timestamps from the transcription service.
    #[arg(long)]
    timestamps: Option<PathBuf>,

    /// Recording duration in seconds (required with --timestamps).
    #[arg(long)]
    duration: Option<f64>,

    /// JSON file of pre-aggregated audio metrics.
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let transcript = read_transcript(&cli.transcript)?;
    let question_type = QuestionType::from_str(&cli.question_type)?;
    let question = Question::new(cli.question.clone(), question_type, cli.category.clone());
    let use_case = AnalyzeAnswerUseCase::new();

    let output = if let Some(timestamps_path) = &cli.timestamps {
        let words: Vec<TranscriptWord> =
            serde_json::from_str(&fs::read_to_string(timestamps_path)?)?;
        let duration = cli.duration.unwrap_or_default();
        log::info!(
            "analyzing with {} word timestamps over {duration:.1}s",
            words.len()
        );
        let (audio, analysis) =
            use_case.analyze_with_timestamps(&transcript, &question, &words, duration)?;
        let audio_feedback = generate_audio_feedback(&audio);
        serde_json::json!({
            "analysis": analysis,
            "audioMetrics": audio,
            "audioFeedback": audio_feedback,
        })
    } else {
        let mut request = AnalysisRequest::new(transcript, question);
        if let Some(metrics_path) = &cli.metrics {
            let metrics: ProvidedAudioMetrics =
                serde_json::from_str(&fs::read_to_string(metrics_path)?)?;
            request = request.with_audio_metrics(metrics);
        }
        let analysis = use_case.execute(&request)?;
        serde_json::json!({ "analysis": analysis })
    };

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{output}");
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.timestamps.is_some() && cli.metrics.is_some() {
        return Err("--timestamps and --metrics are mutually exclusive".into());
    }
    if cli.timestamps.is_some() && cli.duration.is_none() {
        return Err("--duration is required with --timestamps".into());
    }
    if cli.question.trim().is_empty() {
        return Err("--question must not be empty".into());
    }
    Ok(())
}

fn read_transcript(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
