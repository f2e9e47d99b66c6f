use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::facts::Progress;
use crate::metrics::evaluate;
use crate::reports::{generate_evaluation_console, generate_evaluation_json};
use clap::Parser;
use ohno::IntoAppError;

#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Package name, optionally scoped (e.g. `@org/name`)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Print the evaluation as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Fetch one package's analysis and print it alongside the locally derived sub-scores.
pub async fn evaluate_package<H: Host>(host: &mut H, args: &EvaluateArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    common.progress.set_phase("Fetching");
    common.progress.set_message("package...");
    let report = common.client.get_package(&args.name).await;
    common.progress.done();
    let report = report?;

    let evaluation = evaluate(&report.collected).into_app_err_with(|| format!("evaluating package '{}'", args.name))?;

    let mut output = String::new();
    if args.json {
        generate_evaluation_json(&report, &evaluation, &mut output)?;
    } else {
        generate_evaluation_console(&report, &evaluation, common.use_colors(), &mut output)?;
    }
    common.emit(&output);

    Ok(())
}
