/// Plurality winner over vote counts given in ascending proposal ID order.
///
/// The running best only moves on a strictly greater count, so the lowest ID
/// among those sharing the maximum wins. An empty input or a ballot with no
/// votes at all resolves to ID 0.
pub fn plurality_winner<I>(vote_counts: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let mut best_id = 0u32;
    let mut best_count = 0u32;

    for (proposal_id, count) in (0u32..).zip(vote_counts) {
        if proposal_id == 0 || count > best_count {
            best_id = proposal_id;
            best_count = count;
        }
    }

    best_id
}
