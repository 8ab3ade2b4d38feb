use super::workload::{PolicyResult, SeekPath, Workload};

/// Shortest seek time first.
///
/// Repeatedly services the pending request closest to the head. When two
/// requests are equally close (one on each side of the head) the lower
/// cylinder is taken first.
pub fn sstf(workload: &Workload) -> PolicyResult {
    let mut pending = workload.requests().to_vec();
    let mut path = SeekPath::starting_at(workload.head(), pending.len());

    while !pending.is_empty() {
        let current = path.current();
        let closest = pending
            .iter()
            .enumerate()
            .min_by_key(|(_, &cylinder)| (current.abs_diff(cylinder), cylinder))
            .map(|(index, _)| index);

        let Some(index) = closest else { break };
        path.visit(pending.swap_remove(index));
    }

    path.finish()
}
