mod argsets;
mod command;
mod helpers;

use anyhow::{anyhow, Result};
use robot_telemetry::Settings;

const CMD_VALIDATE: &str = "validate";
const CMD_SCHEMA: &str = "schema";
const CMD_REPLAY: &str = "replay";

fn main() -> Result<()> {
    helpers::load_dotenv();
    helpers::init_logging();

    let mut args = pico_args::Arguments::from_env();
    let subcommand = args.subcommand()?;
    let global = argsets::GlobalArgs {
        schema: args.opt_value_from_str("--schema")?,
        api_key: args.opt_value_from_str("--api-key")?,
    };
    let settings = Settings::from_env()?
        .with_schema_source(global.schema)
        .with_api_key(global.api_key);

    match subcommand.as_deref() {
        Some(CMD_VALIDATE) => command::validate(
            &settings,
            argsets::InputArgs {
                input: args.free_from_str()?,
            },
        ),
        Some(CMD_SCHEMA) => command::show_schema(&settings),
        Some(CMD_REPLAY) => command::replay(
            &settings,
            argsets::InputArgs {
                input: args.free_from_str()?,
            },
        ),
        _ => Err(anyhow!(
            "Subcommand must be one of 'validate', 'schema', 'replay'"
        )),
    }
}
