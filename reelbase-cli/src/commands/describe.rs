use reelbase_catalog::types::EntityKind;
use reelbase_describe::DescribeConfig;

use crate::CliError;
use crate::settings::settings_path;

/// Generate a description for `title`, blocking on a one-off runtime.
///
/// Never fails because of the model: a missing key or failed request yields
/// the fallback text instead.
pub(crate) fn generate_description(title: &str, kind: EntityKind) -> Result<String, CliError> {
    let config = DescribeConfig::load(Some(&settings_path()));
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
    log::info!("Generating {} description...", kind.as_str().to_lowercase());
    Ok(rt.block_on(reelbase_describe::describe(&config, title, kind)))
}
