//! Contrast command

use super::Context;
use crate::ContrastArgs;
use anyhow::Result;
use pixfx_ops::{parallel, point};
use tracing::info;

pub fn run(args: ContrastArgs, ctx: &Context) -> Result<()> {
    let image = ctx.load(&args.input)?;
    info!(factor = args.factor, mid = args.mid, "Adjusting contrast");

    let output = if ctx.parallel {
        parallel::adjust_contrast(&image, args.factor, args.mid)
    } else {
        point::adjust_contrast(&image, args.factor, args.mid)
    };

    ctx.save(&args.output, &output)?;
    Ok(())
}
