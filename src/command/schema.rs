use anyhow::Result;
use robot_telemetry::Settings;

/// Print the configured schema definition
pub fn show_schema(settings: &Settings) -> Result<()> {
    let schema = settings.load_schema()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
