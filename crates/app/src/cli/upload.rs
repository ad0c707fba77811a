use std::path::PathBuf;

use clap::Args;
use techmart_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct UploadArgs {
    /// Image file to upload
    path: PathBuf,
}

pub(crate) async fn run(args: UploadArgs, context: &AppContext) -> Result<(), String> {
    let response = context
        .uploads
        .upload_file(&args.path)
        .await
        .map_err(|error| format!("failed to upload {}: {error}", args.path.display()))?;

    if let Some(url) = response.secure_url() {
        println!("secure_url: {url}");
    }

    let body = serde_json::to_string_pretty(response.json())
        .map_err(|error| format!("failed to render upload response: {error}"))?;

    println!("{body}");

    Ok(())
}
