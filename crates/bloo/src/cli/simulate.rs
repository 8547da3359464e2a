//! Offline simulation command handler.

use bloo::{BlooConfig, BlooResult, GateDecision, simulate};
use bloo_error::ConfigError;
use std::path::Path;

/// Evaluate the payload at `payload_path` and print the decision.
pub async fn run_simulation(
    config_path: Option<&Path>,
    payload_path: &Path,
    bans: &[String],
) -> BlooResult<()> {
    let config = BlooConfig::load(config_path)?;
    let payload = std::fs::read_to_string(payload_path).map_err(|e| {
        ConfigError::new(format!(
            "Failed to read payload {}: {}",
            payload_path.display(),
            e
        ))
    })?;

    let simulation = simulate(config, &payload, bans).await?;

    println!(
        "command: /{}  user: {}",
        simulation.interaction.command_name(),
        simulation.interaction.invoker().user_id()
    );
    match &simulation.decision {
        GateDecision::Dispatch { bypassed: true } => {
            println!("decision: dispatch (elevated, checks bypassed)")
        }
        GateDecision::Dispatch { bypassed: false } => println!("decision: dispatch"),
        GateDecision::Reject(rejection) => println!("decision: reject\nmessage: {}", rejection),
        GateDecision::Drop => println!("decision: drop (outside configured guild)"),
    }
    Ok(())
}
