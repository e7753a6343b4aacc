use hashbrown::HashSet;
use tracing::trace;

/// Moves every non-positive value to the front of `values` and returns how many
/// there are. Relative order is not preserved.
pub fn segregate(values: &mut [i32]) -> usize {
    let mut boundary = 0;
    for i in 0..values.len() {
        if values[i] <= 0 {
            values.swap(i, boundary);
            boundary += 1;
        }
    }
    trace!(non_positive = boundary, total = values.len(), "segregated");
    boundary
}

/// Smallest positive integer missing from a slice of strictly positive values.
///
/// Presence of `v` is recorded by negating `positives[v - 1]`, so the slice is
/// left with some entries negated. Returns `len + 1` when `1..=len` are all present.
pub fn first_missing_in_positive(positives: &mut [i32]) -> i32 {
    let len = positives.len();
    for i in 0..len {
        let value = positives[i].unsigned_abs() as usize;
        if (1..=len).contains(&value) && positives[value - 1] > 0 {
            positives[value - 1] = -positives[value - 1];
        }
    }
    let missing = positives
        .iter()
        .position(|&value| value > 0)
        .map_or(len + 1, |index| index + 1);
    i32::try_from(missing).unwrap_or(i32::MAX)
}

/// Smallest strictly positive integer not present in `values`.
///
/// Runs in O(n) time with O(1) extra space; `values` is used as scratch and
/// its contents are permuted and partly negated on return.
pub fn smallest_missing_positive(values: &mut [i32]) -> i32 {
    let shift = segregate(values);
    first_missing_in_positive(&mut values[shift..])
}

/// Hash-set variant of [`smallest_missing_positive`]: O(n) extra space, but
/// leaves `values` untouched.
pub fn smallest_missing_positive_hashed(values: &[i32]) -> i32 {
    let present: HashSet<i32> = values.iter().copied().filter(|&value| value > 0).collect();
    (1..=i32::MAX)
        .find(|candidate| !present.contains(candidate))
        .unwrap_or(i32::MAX)
}
