use std::sync::Arc;

use anyhow::Result;
use robot_telemetry::{LatestSample, Settings, TelemetryService};

use crate::argsets::InputArgs;
use crate::helpers::read_input;

/// Feed newline-delimited samples through the service, as the device would,
/// then print what a consumer reading the latest sample would receive
pub fn replay(settings: &Settings, args: InputArgs) -> Result<()> {
    let schema = settings.load_schema()?;
    let service = TelemetryService::new(settings.api_key(), schema, Arc::new(LatestSample::new()));
    let input = read_input(&args.input)?;

    let (mut accepted, mut rejected) = (0usize, 0usize);
    for (n, line) in input.split(|b| *b == b'\n').enumerate() {
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let reply = service.submit(Some(settings.api_key()), line);
        log::info!("[line {}] {} {}", n + 1, reply.status, reply.body);
        if reply.is_success() {
            accepted += 1;
        } else {
            rejected += 1;
        }
    }
    log::info!("Replay finished: {accepted} accepted, {rejected} rejected");

    println!("{}", service.latest().body);
    Ok(())
}
