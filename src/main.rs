use anyhow::Context;
use clap::Parser;
use std::time::Duration;
use tutor_engine::adapters::progress_csv;
use tutor_engine::config::{CliConfig, Command, EngineConfig};
use tutor_engine::utils::{logger, validation::Validate};
use tutor_engine::{MemoryStore, OpenAiClient, StudentProfile, TutorEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting tutor-engine CLI");

    let engine_config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    if let Err(e) = engine_config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let api_key = std::env::var(&engine_config.api.api_key_env).unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!(
            "{} is not set; generative calls will be rejected upstream",
            engine_config.api.api_key_env
        );
    }

    let client = match engine_config.api.timeout_seconds {
        Some(secs) => OpenAiClient::with_timeout(
            &engine_config.api.base_url,
            &api_key,
            Duration::from_secs(secs),
        )?,
        None => OpenAiClient::new(&engine_config.api.base_url, &api_key),
    };
    let engine = TutorEngine::new(
        client,
        MemoryStore::new(),
        engine_config.api.model.clone(),
    );

    match cli.command {
        Command::Generate {
            profile,
            output,
            student_id,
        } => {
            let content = std::fs::read_to_string(&profile)
                .with_context(|| format!("reading profile {}", profile.display()))?;
            let profile: StudentProfile = serde_json::from_str(&content)?;

            if let Err(e) = profile.validate() {
                tracing::error!("❌ Profile validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            let (curriculum_id, plan) = engine.generate_curriculum(student_id, &profile).await?;

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, serde_json::to_string_pretty(&plan)?)?;

            println!(
                "✅ Curriculum {} ({} weeks) saved to {}",
                curriculum_id,
                plan.duration_weeks(),
                output.display()
            );
        }

        Command::Practice { topic, difficulty } => {
            let question = engine.practice_question(&topic, &difficulty).await?;
            println!("{}", serde_json::to_string_pretty(&question)?);
        }

        Command::Chat { message, context } => {
            let context = match context {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading context {}", path.display()))?;
                    serde_json::from_str(&content)?
                }
                None => serde_json::json!({}),
            };

            let reply = engine.chat_reply(&message, &context).await;
            println!("{}", reply);
        }

        Command::Analyze {
            progress,
            student_id,
        } => {
            let records = progress_csv::read_progress_csv(&progress)?;
            tracing::info!("Imported {} progress records", records.len());

            for record in &records {
                engine.log_progress(student_id, record).await?;
            }

            let analytics = engine.progress_analytics(student_id).await?;
            println!("{}", serde_json::to_string_pretty(&analytics)?);
        }
    }

    Ok(())
}
