use clap::Args;
use gilded_rose::error::AppError;
use gilded_rose::inventory::classify;
use std::io::Write;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Item names to classify
    #[arg(required = true)]
    pub(crate) names: Vec<String>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in render_kinds(&args.names) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn render_kinds(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let kind = classify(name);
            format!(
                "{name}: {} (conjured: {})",
                kind.category.label(),
                if kind.conjured { "yes" } else { "no" }
            )
        })
        .collect()
}
