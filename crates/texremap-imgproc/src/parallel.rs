use rayon::prelude::*;

use texremap_image::Image;

/// Controls how the destination rows are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    ///
    /// Each row is written by exactly one worker, reads from the source are shared.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,
}

/// Apply a function to every pixel of the image with its `(x, y)` position.
///
/// # Arguments
///
/// * `dst` - The image to write.
/// * `strategy` - Whether rows are processed on the rayon pool or serially.
/// * `f` - Called once per pixel with the column, the row and the pixel channels.
pub fn par_iter_rows_indexed<T, const C: usize>(
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) where
    T: Send,
{
    let row_stride = C * dst.cols();
    if row_stride == 0 {
        return;
    }

    let row_op = |(y, row): (usize, &mut [T])| {
        row.chunks_exact_mut(C)
            .enumerate()
            .for_each(|(x, pixel)| f(x, y, pixel));
    };

    match strategy {
        ExecutionStrategy::ParallelRows => dst
            .as_slice_mut()
            .par_chunks_exact_mut(row_stride)
            .enumerate()
            .for_each(row_op),
        ExecutionStrategy::Serial => dst
            .as_slice_mut()
            .chunks_exact_mut(row_stride)
            .enumerate()
            .for_each(row_op),
    }
}
