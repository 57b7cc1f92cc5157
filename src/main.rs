use std::error::Error;

use anyhow::anyhow;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

mod config;
mod engine;
mod platforms;
mod utils;

use config::CONFIG;
use engine::lexicon::LexiconSet;
use engine::types::EnhancementRequest;
use engine::PromptEngine;
use utils::logging::init_logging;
use utils::timing::RequestTimer;

type HandlerResult = Result<(), Box<dyn Error + Send + Sync>>;

fn usage() -> &'static str {
    "Usage: universal_prompt_optimizer optimize --idea <text> [--negative <terms>] [--aspect-ratio <square|portrait|landscape|widescreen>] [--style <terms>] [--lighting <terms>] [--color-grade <terms>] [--extra-tags <terms>] [--steps <n>] [--cfg-scale <x>] [--sampler <name>] [--seed <n>] [--batch-size <n>] [--motion-strength <x>] [--duration-secs <n>] [--compact]\n       universal_prompt_optimizer batch"
}

#[derive(Debug)]
struct OptimizeArgs {
    request: EnhancementRequest,
    compact: bool,
}

fn take_value<'a>(args: &'a [String], index: &mut usize, flag: &str) -> anyhow::Result<&'a str> {
    *index += 1;
    args.get(*index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("Missing value for {flag}"))
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> anyhow::Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("Invalid {flag} value: {value}"))
}

fn parse_optimize_args(args: &[String]) -> anyhow::Result<OptimizeArgs> {
    let mut request = EnhancementRequest::default();
    let mut compact = false;

    let mut index = 2;
    while index < args.len() {
        match args[index].as_str() {
            "--idea" => {
                request.idea = take_value(args, &mut index, "--idea")?.to_string();
            }
            "--negative" => {
                request.negative = Some(take_value(args, &mut index, "--negative")?.to_string());
            }
            "--aspect-ratio" => {
                request.aspect_ratio =
                    Some(take_value(args, &mut index, "--aspect-ratio")?.to_string());
            }
            "--style" => {
                request.style = Some(take_value(args, &mut index, "--style")?.to_string());
            }
            "--lighting" => {
                request.lighting = Some(take_value(args, &mut index, "--lighting")?.to_string());
            }
            "--color-grade" => {
                request.color_grade =
                    Some(take_value(args, &mut index, "--color-grade")?.to_string());
            }
            "--extra-tags" => {
                request.extra_tags =
                    Some(take_value(args, &mut index, "--extra-tags")?.to_string());
            }
            "--sampler" => {
                request.sampler = Some(take_value(args, &mut index, "--sampler")?.to_string());
            }
            "--steps" => {
                let value = take_value(args, &mut index, "--steps")?;
                request.steps = Some(parse_number(value, "--steps")?);
            }
            "--cfg-scale" => {
                let value = take_value(args, &mut index, "--cfg-scale")?;
                request.cfg_scale = Some(parse_number(value, "--cfg-scale")?);
            }
            "--seed" => {
                let value = take_value(args, &mut index, "--seed")?;
                request.seed = Some(parse_number(value, "--seed")?);
            }
            "--batch-size" => {
                let value = take_value(args, &mut index, "--batch-size")?;
                request.batch_size = Some(parse_number(value, "--batch-size")?);
            }
            "--motion-strength" => {
                let value = take_value(args, &mut index, "--motion-strength")?;
                request.motion_strength = Some(parse_number(value, "--motion-strength")?);
            }
            "--duration-secs" => {
                let value = take_value(args, &mut index, "--duration-secs")?;
                request.duration_secs = Some(parse_number(value, "--duration-secs")?);
            }
            "--compact" => {
                compact = true;
            }
            "--help" | "-h" => {
                return Err(anyhow!(usage()));
            }
            other => {
                return Err(anyhow!("Unknown optimize argument: {other}\n{}", usage()));
            }
        }
        index += 1;
    }

    if request.idea.trim().is_empty() {
        return Err(anyhow!("--idea is required"));
    }
    Ok(OptimizeArgs { request, compact })
}

#[tokio::main]
async fn main() -> HandlerResult {
    dotenv().ok();
    let exit_code = {
        let _guards = init_logging();
        run().await?
    };
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run() -> Result<i32, Box<dyn Error + Send + Sync>> {
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("optimize") => {
            let parsed = parse_optimize_args(&args)?;
            let engine = build_engine()?;
            Ok(run_optimize(&engine, parsed))
        }
        Some("batch") => {
            let engine = build_engine()?;
            run_batch(&engine).await?;
            Ok(0)
        }
        _ => Err(usage().into()),
    }
}

fn build_engine() -> anyhow::Result<PromptEngine> {
    let lexicons = LexiconSet::load(CONFIG.lexicon_config_path.as_deref())?;
    Ok(PromptEngine::new(lexicons))
}

fn error_envelope(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn run_optimize(engine: &PromptEngine, args: OptimizeArgs) -> i32 {
    let mut timer = RequestTimer::start("optimize", &args.request.idea);
    match engine.enhance(&args.request) {
        Ok(response) => {
            let rendered = if args.compact {
                serde_json::to_string(&response)
            } else {
                serde_json::to_string_pretty(&response)
            };
            match rendered {
                Ok(json) => {
                    println!("{json}");
                    timer.complete(
                        "success",
                        &format!("prompt_chars={}", response.prompt.chars().count()),
                    );
                    0
                }
                Err(err) => {
                    error!("Failed to serialize response: {err}");
                    timer.complete("error", "serialization failed");
                    1
                }
            }
        }
        Err(err) => {
            println!("{}", error_envelope(&err.to_string()));
            timer.complete("rejected", &err.to_string());
            2
        }
    }
}

async fn run_batch(engine: &PromptEngine) -> HandlerResult {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut optimized = 0u64;
    let mut rejected = 0u64;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let request = match serde_json::from_str::<EnhancementRequest>(line) {
            Ok(request) => request,
            Err(err) => {
                println!("{}", error_envelope(&format!("Invalid request JSON: {err}")));
                rejected += 1;
                continue;
            }
        };

        let mut timer = RequestTimer::start("batch", &request.idea);
        match engine.enhance(&request) {
            Ok(response) => {
                println!("{}", serde_json::to_string(&response)?);
                timer.complete(
                    "success",
                    &format!("prompt_chars={}", response.prompt.chars().count()),
                );
                optimized += 1;
            }
            Err(err) => {
                println!("{}", error_envelope(&err.to_string()));
                timer.complete("rejected", &err.to_string());
                rejected += 1;
            }
        }
    }

    info!("Batch complete: {optimized} optimized, {rejected} rejected");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        let mut all = vec!["universal_prompt_optimizer".to_string(), "optimize".to_string()];
        all.extend(values.iter().map(|value| value.to_string()));
        all
    }

    #[test]
    fn optimize_args_populate_the_request() {
        let parsed = parse_optimize_args(&args(&[
            "--idea",
            "a quiet harbor",
            "--aspect-ratio",
            "widescreen",
            "--steps",
            "45",
            "--seed",
            "-7",
            "--compact",
        ]))
        .expect("valid args");
        assert_eq!(parsed.request.idea, "a quiet harbor");
        assert_eq!(parsed.request.aspect_ratio.as_deref(), Some("widescreen"));
        assert_eq!(parsed.request.steps, Some(45));
        assert_eq!(parsed.request.seed, Some(-7));
        assert!(parsed.compact);
    }

    #[test]
    fn missing_idea_and_unknown_flags_are_rejected() {
        assert!(parse_optimize_args(&args(&["--steps", "30"])).is_err());
        assert!(parse_optimize_args(&args(&["--idea", "x", "--bogus"])).is_err());
        assert!(parse_optimize_args(&args(&["--idea"])).is_err());
    }

    #[test]
    fn non_numeric_knob_values_are_parse_errors() {
        let result = parse_optimize_args(&args(&["--idea", "x", "--cfg-scale", "high"]));
        let message = result.expect_err("must fail").to_string();
        assert!(message.contains("--cfg-scale"));
    }
}
