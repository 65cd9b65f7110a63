use clap::Args;
use deposit_advisor::config::AppConfig;
use deposit_advisor::error::AppError;
use deposit_advisor::scoring::{LogisticPipeline, PipelineArtifact, ProbabilityModel};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct InspectArgs {
    /// Artifact to inspect (defaults to APP_MODEL_PATH)
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

pub(crate) fn run_model_inspect(args: InspectArgs) -> Result<(), AppError> {
    let path = match args.model {
        Some(path) => path,
        None => AppConfig::load()?.model.path,
    };

    let artifact = PipelineArtifact::from_path(&path)?;
    println!("{}", render_inspection(&path, &artifact));
    Ok(())
}

pub(crate) fn render_inspection(path: &std::path::Path, artifact: &PipelineArtifact) -> String {
    let description = LogisticPipeline::from_artifact(artifact.clone()).describe();
    let mut lines = vec![
        "Model artifact".to_string(),
        format!("  Path: {}", path.display()),
        format!("  Name: {}", description.name),
        format!("  Estimator: {}", description.estimator),
        format!("  Preprocessing: {}", description.preprocessing.join(" + ")),
        format!("  Optimized for: {}", description.optimized_for),
        format!("  Intercept: {:.4}", artifact.intercept),
    ];
    for note in &description.notes {
        lines.push(format!("  Note: {note}"));
    }

    lines.push(String::new());
    lines.push("Numeric features (standard scaled)".to_string());
    lines.push(format!(
        "  {:<10} {:>12} {:>12} {:>12}",
        "feature", "mean", "scale", "coefficient"
    ));
    for feature in &artifact.numeric {
        lines.push(format!(
            "  {:<10} {:>12.3} {:>12.3} {:>12.4}",
            feature.feature, feature.mean, feature.scale, feature.coefficient
        ));
    }

    lines.push(String::new());
    lines.push("Categorical features (one-hot)".to_string());
    for feature in &artifact.categorical {
        let levels = feature
            .levels
            .iter()
            .map(|(level, weight)| format!("{level}={weight:+.3}"))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("  {:<10} {}", feature.feature, levels));
    }

    lines.join("\n")
}
