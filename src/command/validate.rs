use anyhow::Result;
use robot_telemetry::{service::parse_body, Settings};

use crate::argsets::InputArgs;
use crate::helpers::read_input;

/// Validate one JSON document and print the accepted record
pub fn validate(settings: &Settings, args: InputArgs) -> Result<()> {
    let schema = settings.load_schema()?;
    let body = read_input(&args.input)?;

    // A rejection is reported as the error itself, so the reason is what
    // ends up on stderr
    let record = robot_telemetry::validate(parse_body(&body), &schema)?;
    log::debug!(
        "Accepted {} against schema {}",
        args.input,
        settings.schema_source()
    );
    println!("{}", serde_json::to_string(&record)?);
    Ok(())
}
