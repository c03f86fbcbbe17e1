use clap::{Parser, Subcommand};
use stegano_qim::DEFAULT_QUANTIZATION_STEP;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: quantization step of the DCT coefficients, must match between hide and unveil
    #[arg(long = "x-quantization-step", default_value_t = DEFAULT_QUANTIZATION_STEP)]
    pub quantization_step: f64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
    Quality(quality::QualityArgs),
}
