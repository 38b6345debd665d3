
use crate::cost_model::{substitution_cost, CostModel, Roi, Spatial};
use crate::error::{check_shape, ScasimError};
use crate::utils::{min3, LibData};
use anyhow::Result;
use log::{debug, trace};
use ndarray::Array2;

/// Allocates the `(n + 1) x (m + 1)` alignment table. Row 0 and column 0 hold
/// the prefix sums of the target and source durations, the cost of aligning a
/// prefix against nothing. Interior cells are NaN until the recurrence fills them.
pub fn create_table<A: LibData>(source_durations: &[A], target_durations: &[A]) -> Result<Array2<A>> {
    let rows = source_durations.len() + 1;
    let columns = target_durations.len() + 1;
    let too_large = ScasimError::TableTooLarge { rows, columns };

    let cells = rows.checked_mul(columns).ok_or_else(|| too_large.clone())?;
    let mut buffer: Vec<A> = Vec::new();
    buffer.try_reserve_exact(cells).map_err(|_| too_large)?;
    buffer.resize(cells, A::NAN);

    let mut table = Array2::from_shape_vec((rows, columns), buffer)?;

    table[[0, 0]] = A::zero();
    let mut accumulator = A::zero();
    for (i, duration) in source_durations.iter().enumerate() {
        accumulator = accumulator + *duration;
        table[[i + 1, 0]] = accumulator;
    }
    let mut accumulator = A::zero();
    for (j, duration) in target_durations.iter().enumerate() {
        accumulator = accumulator + *duration;
        table[[0, j + 1]] = accumulator;
    }

    Ok(table)
}

/// Fills the table in row-major order. Every cell takes the cheapest of
/// deleting the source fixation, inserting the target fixation, or
/// substituting one for the other. The cost model must cover every fixation.
pub(crate) fn fill_table<A: LibData, C: CostModel<A>>(
    table: &mut Array2<A>,
    source_durations: &[A],
    target_durations: &[A],
    cost_model: &C,
) {
    for i in 0..source_durations.len() {
        for j in 0..target_durations.len() {
            let similarity = cost_model.similarity(i, j);
            let cost = substitution_cost(source_durations[i], target_durations[j], similarity);

            table[[i + 1, j + 1]] = min3(
                table[[i, j + 1]] + source_durations[i],
                table[[i + 1, j]] + target_durations[j],
                table[[i, j]] + cost,
            );
        }
    }
}

/// Minimum alignment cost of two scanpaths under any cost model. Lower means
/// more similar. The score is not normalized; see [`normalize_by_length`].
pub fn align<A: LibData, C: CostModel<A>>(
    source_durations: &[A],
    target_durations: &[A],
    cost_model: &C,
) -> Result<A> {
    let n = source_durations.len();
    let m = target_durations.len();
    check_shape("source", "cost model fixations", n, cost_model.source_len())?;
    check_shape("target", "cost model fixations", m, cost_model.target_len())?;
    debug!(
        "Aligning {} source with {} target fixations using the {} cost model",
        n,
        m,
        C::name()
    );

    let mut table = create_table(source_durations, target_durations)?;
    fill_table(&mut table, source_durations, target_durations, cost_model);
    trace!("Alignment table:\n{:.1}", table);

    Ok(table[[n, m]])
}

/// Similarity of two scanpaths whose fixations are given as longitude and
/// latitude in radians.
///
/// A non-positive `modulator` or NaN inputs are not rejected; they propagate
/// into the score following IEEE-754 semantics.
pub fn align_spatial<A: LibData>(
    source_durations: &[A],
    source_longitudes: &[A],
    source_latitudes: &[A],
    target_durations: &[A],
    target_longitudes: &[A],
    target_latitudes: &[A],
    modulator: A,
) -> Result<A> {
    let n = source_durations.len();
    let m = target_durations.len();
    check_shape("source", "longitudes", n, source_longitudes.len())?;
    check_shape("source", "latitudes", n, source_latitudes.len())?;
    check_shape("target", "longitudes", m, target_longitudes.len())?;
    check_shape("target", "latitudes", m, target_latitudes.len())?;

    let cost_model = Spatial::new(
        source_longitudes,
        source_latitudes,
        target_longitudes,
        target_latitudes,
        modulator,
    );
    align(source_durations, target_durations, &cost_model)
}

/// Similarity of two scanpaths whose fixations are given as region of
/// interest labels.
pub fn align_roi<A: LibData, R: PartialEq>(
    source_durations: &[A],
    source_rois: &[R],
    target_durations: &[A],
    target_rois: &[R],
) -> Result<A> {
    check_shape("source", "rois", source_durations.len(), source_rois.len())?;
    check_shape("target", "rois", target_durations.len(), target_rois.len())?;

    align(source_durations, target_durations, &Roi::new(source_rois, target_rois))
}

/// Divides a raw score by the total number of fixations `n + m`. Two empty
/// scanpaths have a score of 0, which is returned as is.
pub fn normalize_by_length<A: LibData>(score: A, source_len: usize, target_len: usize) -> A {
    match A::from_usize(source_len + target_len) {
        Some(total) if total > A::zero() => score / total,
        _ => score,
    }
}
