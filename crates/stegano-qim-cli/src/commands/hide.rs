use std::path::PathBuf;

use clap::Args;
use stegano_qim::{image_ops, QimError, QimOptions};

use crate::CliResult;

/// Hides data in the DCT coefficients of an image, the result is always a PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Cover image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "cover image", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image, its bytes are embedded as they are
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: QimOptions) -> CliResult<()> {
        let payload = match (self.data_file, self.message) {
            (Some(file), _) => {
                std::fs::read(&file).map_err(|source| QimError::ReadError { source })?
            }
            (None, Some(message)) => message.into_bytes(),
            (None, None) => Vec::new(),
        };

        image_ops::hide_in_file(&self.media, &self.write_to_file, &payload, &options)?;
        log::info!("hid {} bytes in {}", payload.len(), self.write_to_file.display());

        Ok(())
    }
}
