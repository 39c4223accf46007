//! Blur command
//!
//! Box blur with the fixed size² divisor, or the renormalized variant with
//! `--renormalize-edges`.

use super::Context;
use crate::BlurArgs;
use anyhow::Result;
use pixfx_ops::filter::{self, EdgeDivisor};
use pixfx_ops::parallel;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: BlurArgs, ctx: &Context) -> Result<()> {
    trace!(input = %args.input.display(), size = args.size, "blur::run");

    let image = ctx.load(&args.input)?;
    let divisor = if args.renormalize_edges {
        EdgeDivisor::Window
    } else {
        EdgeDivisor::Fixed
    };
    info!(size = args.size, ?divisor, w = image.width(), h = image.height(), "Applying blur");

    if ctx.verbose {
        println!("Applying box blur (size={}) to {}", args.size, args.input.display());
    }

    let blurred = if ctx.parallel {
        parallel::box_blur_with(&image, args.size, divisor)?
    } else {
        filter::box_blur_with(&image, args.size, divisor)?
    };

    ctx.save(&args.output, &blurred)?;
    Ok(())
}
