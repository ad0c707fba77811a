//! Uploads Config

use clap::Args;

/// Default Cloudinary unsigned upload preset.
pub const DEFAULT_UPLOAD_PRESET: &str = "harhs_mart";

/// Image upload settings.
#[derive(Debug, Clone, Args)]
pub struct UploadsConfig {
    /// Cloudinary cloud name
    #[arg(long, env = "CLOUDINARY_CLOUD_NAME", default_value = "")]
    pub cloudinary_cloud_name: String,

    /// Cloudinary unsigned upload preset
    #[arg(long, env = "CLOUDINARY_UPLOAD_PRESET", default_value = DEFAULT_UPLOAD_PRESET)]
    pub upload_preset: String,
}

impl UploadsConfig {
    /// Hosted upload endpoint for the configured cloud.
    #[must_use]
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloudinary_cloud_name
        )
    }
}
