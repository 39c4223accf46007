//! Edges command
//!
//! Sobel x and y responses merged by root-sum-of-squares.

use super::Context;
use crate::EdgesArgs;
use anyhow::Result;
use pixfx_ops::{filter, parallel};

pub fn run(args: EdgesArgs, ctx: &Context) -> Result<()> {
    let image = ctx.load(&args.input)?;

    let edges = if ctx.parallel {
        parallel::sobel_edges(&image)?
    } else {
        filter::sobel_edges(&image)?
    };

    ctx.save(&args.output, &edges)?;
    Ok(())
}
