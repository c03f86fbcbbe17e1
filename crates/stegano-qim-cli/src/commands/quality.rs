use std::path::PathBuf;

use clap::Args;
use stegano_qim::image_ops;

use crate::CliResult;

/// Compares a cover image with the image that hides data in it
#[derive(Args, Debug)]
pub struct QualityArgs {
    /// The original cover image
    #[arg(short = 'a', long = "original", value_name = "cover image", required = true)]
    pub original: PathBuf,

    /// The image produced by `hide`
    #[arg(short = 'b', long = "stego", value_name = "stego image", required = true)]
    pub stego: PathBuf,
}

impl QualityArgs {
    pub fn run(self) -> CliResult<()> {
        let metrics = image_ops::quality_of_files(&self.original, &self.stego)?;

        println!("MSE:  {:.4}", metrics.mse);
        if metrics.psnr.is_infinite() {
            println!("PSNR: inf (images are identical)");
        } else {
            println!("PSNR: {:.2} dB", metrics.psnr);
        }

        Ok(())
    }
}
