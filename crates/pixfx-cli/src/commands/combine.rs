//! Combine command

use super::Context;
use crate::CombineArgs;
use anyhow::Result;
use pixfx_ops::{combine, parallel};
use tracing::info;

pub fn run(args: CombineArgs, ctx: &Context) -> Result<()> {
    let a = ctx.load(&args.a)?;
    let b = ctx.load(&args.b)?;
    info!(a = ?a.shape(), b = ?b.shape(), "Combining images");

    let output = if ctx.parallel {
        parallel::combine(&a, &b)?
    } else {
        combine::combine(&a, &b)?
    };

    ctx.save(&args.output, &output)?;
    Ok(())
}
