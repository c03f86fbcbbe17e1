use std::path::PathBuf;

use clap::Args;
use stegano_qim::{image_ops, QimError, QimOptions};

use crate::CliResult;

/// Unveils the raw payload hidden in an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Payload will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: QimOptions) -> CliResult<()> {
        let payload = image_ops::unveil_from_file(&self.media, &options)?;

        std::fs::write(&self.output_file, &payload)
            .map_err(|source| QimError::WriteError { source })?;
        log::info!("unveiled {} bytes into {}", payload.len(), self.output_file.display());

        Ok(())
    }
}
