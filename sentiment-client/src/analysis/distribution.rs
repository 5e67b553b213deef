use crate::types::{DistributionCounts, HistoryEntry, SentimentLabel};

/// Count history entries per sentiment bucket.
///
/// Always a full recount; unrecognized labels land in `neutral`, so the
/// counts sum to the number of entries.
pub fn aggregate<'a, I>(history: I) -> DistributionCounts
where
    I: IntoIterator<Item = &'a HistoryEntry>,
{
    history
        .into_iter()
        .fold(DistributionCounts::default(), |mut counts, entry| {
            match entry.sentiment.bucket() {
                SentimentLabel::Positive => counts.positive += 1,
                SentimentLabel::Negative => counts.negative += 1,
                _ => counts.neutral += 1,
            }
            counts
        })
}
