//! Headless replay of a recorded match.
//!
//! Usage:
//!   slapper-replay replay.json
//!   slapper-replay --json --out artifacts.json < replay.json
//!   slapper-replay replay.json --expect-state-hash <hex> -v
//!   RUST_LOG=slapper_core=debug slapper-replay replay.json

use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use serde::Serialize;

use slapper_core::{
    render_frame, run_replay, CommandBuffer, DrawCommand, ReplayInput, ReplayOutput, ReplayRun,
};

#[derive(Parser)]
#[command(name = "slapper-replay")]
#[command(about = "Re-run a recorded slapper match and report the outcome")]
struct Cli {
    /// Replay JSON ({ config, transcript }). Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Also write the JSON result to this file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Include the final frame's draw commands in the JSON result
    #[arg(long)]
    frame: bool,

    /// Fail unless the final state hashes to this value (hex)
    #[arg(long)]
    expect_state_hash: Option<String>,

    /// Log simulation events to stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// JSON result: hashes hex-encoded, frame optional.
#[derive(Serialize)]
struct Artifacts {
    ticks: u32,
    scores: [i32; 2],
    falls: [u32; 2],
    transcript_hash: String,
    state_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    frame: Option<Vec<DrawCommand>>,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .init();
}

fn parse_input(json_str: &str) -> Result<ReplayInput> {
    serde_json::from_str(json_str).context("Failed to parse replay JSON")
}

fn load_input(path: Option<&PathBuf>) -> Result<ReplayInput> {
    let json_str = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    parse_input(&json_str)
}

/// Case-insensitive; surrounding whitespace in `expected` is ignored.
fn verify_state_hash(output: &ReplayOutput, expected: &str) -> Result<()> {
    let actual = hex::encode(output.state_hash);
    if !actual.eq_ignore_ascii_case(expected.trim()) {
        bail!("State hash mismatch: expected {expected}, got {actual}");
    }
    Ok(())
}

fn build_artifacts(run: &ReplayRun, input: &ReplayInput, with_frame: bool) -> Artifacts {
    let frame = with_frame.then(|| {
        let mut buf = CommandBuffer::new();
        render_frame(&run.state, &input.config, &mut buf);
        debug!("final frame: {} draw commands", buf.commands.len());
        buf.commands
    });

    Artifacts {
        ticks: run.output.ticks,
        scores: run.output.scores,
        falls: run.output.falls,
        transcript_hash: hex::encode(run.output.transcript_hash),
        state_hash: hex::encode(run.output.state_hash),
        frame,
    }
}

fn print_result(output: &ReplayOutput) {
    println!("=== Replay Result ===");
    println!("Ticks: {}", output.ticks);
    println!("Scores: P1={}, P2={}", output.scores[0], output.scores[1]);
    println!("Falls: P1={}, P2={}", output.falls[0], output.falls[1]);
    println!("Transcript hash: {}", hex::encode(output.transcript_hash));
    println!("State hash: {}", hex::encode(output.state_hash));
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    eprintln!("Loading replay...");
    let input = load_input(cli.input.as_ref())?;
    eprintln!("Transcript: {} frames", input.transcript.len());

    let start = Instant::now();
    let run = run_replay(&input).context("Replay config rejected")?;
    eprintln!("Replayed in {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);

    if let Some(expected) = &cli.expect_state_hash {
        verify_state_hash(&run.output, expected)?;
        eprintln!("State hash verified.");
    }

    let artifacts = build_artifacts(&run, &input, cli.frame);
    let json = serde_json::to_string_pretty(&artifacts).context("Failed to encode result")?;

    if let Some(path) = &cli.out {
        std::fs::write(path, &json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Artifacts written to {}", path.display());
    }

    if cli.json {
        println!("{json}");
    } else {
        print_result(&run.output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slapper_core::{default_config, TickInput, NULL_INPUT};

    fn idle_replay(ticks: usize) -> ReplayInput {
        ReplayInput {
            config: default_config(),
            transcript: vec![TickInput { dt: 1.6, inputs: [NULL_INPUT; 2] }; ticks],
        }
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(5), LevelFilter::Debug);
    }

    #[test]
    fn parses_generated_replay_json() {
        let input = idle_replay(3);
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(parse_input(&json).unwrap(), input);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_input("{ \"config\": 1 }").unwrap_err();
        assert!(err.to_string().contains("Failed to parse replay JSON"));
    }

    #[test]
    fn missing_replay_file_names_the_path() {
        let path = PathBuf::from("/definitely/not/here/replay.json");
        let err = load_input(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here/replay.json"));
    }

    #[test]
    fn state_hash_check_accepts_match_in_any_case() {
        let run = run_replay(&idle_replay(10)).unwrap();
        let hex = hex::encode(run.output.state_hash);
        assert!(verify_state_hash(&run.output, &hex).is_ok());
        assert!(verify_state_hash(&run.output, &format!(" {} \n", hex.to_uppercase())).is_ok());
    }

    #[test]
    fn state_hash_mismatch_fails() {
        let run = run_replay(&idle_replay(10)).unwrap();
        let other = run_replay(&idle_replay(11)).unwrap();
        let expected = hex::encode(other.output.state_hash);

        let err = verify_state_hash(&run.output, &expected).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("State hash mismatch"));
        assert!(msg.contains(&expected));
        assert!(msg.contains(&hex::encode(run.output.state_hash)));
    }

    #[test]
    fn artifacts_omit_frame_unless_asked() {
        let input = idle_replay(5);
        let run = run_replay(&input).unwrap();
        let json = serde_json::to_value(build_artifacts(&run, &input, false)).unwrap();

        assert_eq!(json["ticks"], 5);
        assert_eq!(json["scores"], serde_json::json!([0, 0]));
        assert_eq!(json["falls"], serde_json::json!([0, 0]));
        assert_eq!(json["state_hash"].as_str().unwrap().len(), 64);
        assert_eq!(json["transcript_hash"].as_str().unwrap().len(), 64);
        assert!(json.get("frame").is_none());
    }

    #[test]
    fn frame_lists_draw_commands_in_order() {
        let input = idle_replay(5);
        let run = run_replay(&input).unwrap();
        let json = serde_json::to_value(build_artifacts(&run, &input, true)).unwrap();

        let frame = json["frame"].as_array().unwrap();
        // background, two scores, two players, one platform
        assert_eq!(frame.len(), 6);
        let kinds: Vec<&str> = frame.iter().map(|c| c["kind"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["rect", "text", "text", "player", "player", "rect"]);

        assert_eq!(frame[0]["width"], 800.0);
        assert_eq!(frame[0]["color"], "black");
        assert_eq!(frame[1]["text"], "0");
        assert_eq!(frame[1]["font"], "30px Arial");
        assert_eq!(frame[3]["id"], 0);
        assert_eq!(frame[3]["facing"], "Right");
        assert_eq!(frame[5]["color"], "red");
    }
}
