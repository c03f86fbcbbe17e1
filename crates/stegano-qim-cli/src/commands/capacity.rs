use std::path::PathBuf;

use clap::Args;
use stegano_qim::image_ops;

use crate::CliResult;

/// Shows how much data an image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Image to inspect
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let image = image_ops::open_image(&self.media)?;

        println!("# Capacity of `{}`", self.media.display());
        println!();
        println!("bits:  {}", image_ops::image_capacity_bits(&image));
        println!("bytes: {}", image_ops::image_capacity(&image));

        Ok(())
    }
}
