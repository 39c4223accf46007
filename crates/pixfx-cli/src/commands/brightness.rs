//! Brightness command

use super::Context;
use crate::BrightnessArgs;
use anyhow::Result;
use pixfx_ops::{parallel, point};
use tracing::info;

pub fn run(args: BrightnessArgs, ctx: &Context) -> Result<()> {
    let image = ctx.load(&args.input)?;
    info!(factor = args.factor, shape = ?image.shape(), "Adjusting brightness");

    let output = if ctx.parallel {
        parallel::adjust_brightness(&image, args.factor)?
    } else {
        point::adjust_brightness(&image, args.factor)?
    };

    ctx.save(&args.output, &output)?;
    Ok(())
}
