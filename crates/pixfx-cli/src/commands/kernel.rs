//! Kernel command

use super::Context;
use crate::{KernelArgs, KernelPreset};
use anyhow::{bail, Result};
use pixfx_ops::filter::{self, Kernel};
use pixfx_ops::parallel;
use tracing::info;

pub fn run(args: KernelArgs, ctx: &Context) -> Result<()> {
    let kernel = build_kernel(&args)?;
    let image = ctx.load(&args.input)?;
    info!(width = kernel.width, height = kernel.height, sum = kernel.sum(), "Applying kernel");

    let output = if ctx.parallel {
        parallel::apply_kernel(&image, &kernel)?
    } else {
        filter::apply_kernel(&image, &kernel)?
    };

    ctx.save(&args.output, &output)?;
    Ok(())
}

fn build_kernel(args: &KernelArgs) -> Result<Kernel> {
    if let Some(weights) = &args.weights {
        let size = match args.size {
            Some(size) => size,
            None => infer_side(weights.len())?,
        };
        return Ok(Kernel::square(weights.clone(), size)?);
    }

    let kernel = match args.preset {
        Some(KernelPreset::Identity) => Kernel::identity(),
        Some(KernelPreset::Box) => Kernel::box_blur(args.size.unwrap_or(3))?,
        Some(KernelPreset::SobelX) => Kernel::sobel_x(),
        Some(KernelPreset::SobelY) => Kernel::sobel_y(),
        Some(KernelPreset::Sharpen) => Kernel::sharpen(args.amount),
        None => bail!("either --preset or --weights is required"),
    };
    Ok(kernel)
}

/// Side of a square kernel holding `len` weights.
fn infer_side(len: usize) -> Result<usize> {
    let side = (len as f64).sqrt().round() as usize;
    if side * side != len {
        bail!("{len} weights do not form a square kernel; pass --size");
    }
    Ok(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(preset: Option<KernelPreset>, weights: Option<Vec<f32>>, size: Option<usize>) -> KernelArgs {
        KernelArgs {
            input: PathBuf::from("in.png"),
            output: PathBuf::from("out.png"),
            preset,
            weights,
            size,
            amount: 1.0,
        }
    }

    #[test]
    fn test_infer_side() {
        assert_eq!(infer_side(9).unwrap(), 3);
        assert_eq!(infer_side(1).unwrap(), 1);
        assert!(infer_side(8).is_err());
    }

    #[test]
    fn test_build_from_weights() {
        let k = build_kernel(&args(None, Some(vec![0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0]), None)).unwrap();
        assert_eq!(k.size(), Some(3));
    }

    #[test]
    fn test_build_from_preset() {
        let k = build_kernel(&args(Some(KernelPreset::Box), None, Some(5))).unwrap();
        assert_eq!(k.size(), Some(5));
        assert!(build_kernel(&args(Some(KernelPreset::Box), None, Some(4))).is_err());
        assert!(build_kernel(&args(None, None, None)).is_err());
    }

    #[test]
    fn test_even_weights_build_but_do_not_apply() {
        // validity is checked by apply_kernel, not at construction
        let k = build_kernel(&args(None, Some(vec![1.0; 4]), None)).unwrap();
        assert!(k.validate().is_err());
    }
}
