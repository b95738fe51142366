use std::collections::HashSet;

use crate::{db::SkuSource, error::MatchResult};

/// SKUs known to the database, stored exactly as returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkuSet {
    skus: HashSet<String>,
}

impl SkuSet {
    pub fn from_source<S>(source: &mut S) -> MatchResult<Self>
    where
        S: SkuSource + ?Sized,
    {
        let mut set = Self::default();
        source.scan_skus(&mut |sku| {
            set.skus.insert(sku);
        })?;
        Ok(set)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.skus.contains(sku)
    }

    pub fn len(&self) -> usize {
        self.skus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skus.is_empty()
    }
}

impl<S> FromIterator<S> for SkuSet
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            skus: iter.into_iter().map(Into::into).collect(),
        }
    }
}
