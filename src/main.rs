use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{info, warn};
use voicecap::{
    AudioFile, CloudSpeechClient, Config, MemoryCapture, RecordingSession, SessionEvent,
    SessionState, SpeechRecognizer,
};

/// Replay a WAV file through a recording session and print the transcript
#[derive(Debug, Parser)]
#[command(name = "voicecap", version)]
struct Args {
    /// Config file path (config-crate style, without extension)
    #[arg(long, default_value = "config/voicecap")]
    config: String,

    /// Mono WAV file to replay through the capture pipeline
    input: Option<PathBuf>,

    /// Disable silence-triggered stop (session ends when the input runs out)
    #[arg(long)]
    no_auto_stop: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("voicecap v0.1.0");
    info!("Loaded config: {}", cfg.service.name);

    let Some(input) = args.input else {
        info!("No input file given; pass a mono WAV to run a capture session");
        return Ok(());
    };

    let audio = AudioFile::open(&input)?;
    if audio.sample_rate != cfg.capture.sample_rate || audio.channels != 1 {
        warn!(
            "Input is {}Hz/{}ch but the session expects {}Hz mono; recognition quality may suffer",
            audio.sample_rate, audio.channels, cfg.capture.sample_rate
        );
    }
    let samples = audio.samples_f32();

    let recognizer: Arc<dyn SpeechRecognizer> = Arc::new(match &cfg.recognition.endpoint {
        Some(endpoint) => CloudSpeechClient::with_endpoint(
            endpoint.clone(),
            cfg.recognition.api_key.clone(),
            cfg.recognition.language.clone(),
            cfg.capture.sample_rate,
        ),
        None => CloudSpeechClient::new(
            cfg.recognition.api_key.clone(),
            cfg.recognition.language.clone(),
            cfg.capture.sample_rate,
        ),
    });

    let capture = MemoryCapture::new();
    let feeder = capture.clone();
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();

    let mut session = RecordingSession::new(
        cfg.session_config(),
        Box::new(capture),
        recognizer,
        events_tx,
    );

    session.start(!args.no_auto_stop, Duration::from_secs(60))?;

    // Replay the file in 100ms host frames
    let tick = Duration::from_millis(100);
    let samples_per_tick = cfg.capture.sample_rate as usize / 10;

    for chunk in samples.chunks(samples_per_tick) {
        feeder.push_samples(chunk);
        session.tick(tick)?;

        if session.state() == SessionState::Stopped {
            break;
        }
    }

    if session.state() == SessionState::Recording {
        info!("Input exhausted, stopping session");
        session.stop()?;
    }

    let stats = session.stats();
    info!(
        "Session finished: {:.1}s ticked, {} samples captured",
        stats.duration_secs, stats.samples_captured
    );

    // The background task holds the last event sender; the channel closes
    // once transcription completes.
    drop(session);

    loop {
        match timeout(Duration::from_secs(30), events_rx.recv()).await {
            Ok(Some(SessionEvent::Stopped)) => info!("Session stopped"),
            Ok(Some(SessionEvent::TranscriptReady(text))) => {
                println!("{}", text);
            }
            Ok(None) => break,
            Err(_) => {
                warn!("Timed out waiting for transcription");
                break;
            }
        }
    }

    Ok(())
}
