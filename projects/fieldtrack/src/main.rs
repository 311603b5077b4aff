mod cli;
mod error;
mod pipeline;

use anyhow::{Context, Result};
use cli::Args;
use error::PipelineError;
use pipeline::invoker::execute_frame;
use pipeline::registry::make_unit;
use pipeline::types::{FrameRequest, ImageRef};

fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse_args();

    let unit = make_unit(&args.command)
        .context("Failed to resolve an execution unit from the command string")?
        .ok_or_else(|| PipelineError::NoUnitSelected(args.command.clone()))?;

    let request = FrameRequest {
        frame_no: Some(args.frame),
        info: Some(args.info.clone()),
        image: Some(ImageRef::new(args.image.clone())),
    };

    let output = execute_frame(&unit, &request);

    if args.json {
        let record = serde_json::json!({
            "kind": unit.kind(),
            "context": unit.context(),
            "request": request,
            "output": output,
        });
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", output);
    }

    Ok(())
}
