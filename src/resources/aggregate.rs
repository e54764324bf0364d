use super::types::{ApiKey, NormalizedPathRecord};
use indexmap::IndexMap;

/// Group records into buckets by [`ApiKey`].
///
/// Buckets appear in the order their key is first seen and keep their
/// records in encounter order. Nothing is merged here.
pub fn aggregate<I>(records: I) -> IndexMap<ApiKey, Vec<NormalizedPathRecord>>
where
    I: IntoIterator<Item = NormalizedPathRecord>,
{
    let mut buckets: IndexMap<ApiKey, Vec<NormalizedPathRecord>> = IndexMap::new();
    for record in records {
        buckets.entry(record.key.clone()).or_default().push(record);
    }
    buckets
}
