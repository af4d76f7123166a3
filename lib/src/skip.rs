use serde::Deserialize;
use serde::Deserializer;

use crate::error::Error;
use crate::error::Result;
use crate::region::SkipSet;

/// One entry of a skip list: a single index or an inclusive range such as "0-8".
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SkipEntry {
    Index(usize),
    Text(String),
}

/// Widest range a single skip entry may expand to.
pub const MAX_SKIP_RANGE: usize = 1 << 20;

fn insert_token(skip: &mut SkipSet, token: &str) -> Result<()> {
    let token = token.trim();
    let invalid = || Error::InvalidSkip(token.to_string());
    match token.split_once('-') {
        Some((lo, hi)) => {
            let lo: usize = lo.trim().parse().map_err(|_| invalid())?;
            let hi: usize = hi.trim().parse().map_err(|_| invalid())?;
            if lo > hi || hi - lo >= MAX_SKIP_RANGE {
                return Err(invalid());
            }
            skip.extend(lo..=hi);
        }
        None => {
            skip.insert(token.parse().map_err(|_| invalid())?);
        }
    }
    Ok(())
}

/// Parse a comma separated skip list such as `"0-8,23"`.
///
/// An empty or blank string yields an empty set.
pub fn parse_skip_list(list: &str) -> Result<SkipSet> {
    let mut skip = SkipSet::new();
    for token in list.split(',').filter(|t| !t.trim().is_empty()) {
        insert_token(&mut skip, token)?;
    }
    Ok(skip)
}

/// serde adapter for a `skip` field holding integers and range strings.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> std::result::Result<SkipSet, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<SkipEntry>::deserialize(deserializer)?;
    let mut skip = SkipSet::new();
    for entry in entries {
        match entry {
            SkipEntry::Index(index) => {
                skip.insert(index);
            }
            SkipEntry::Text(text) => {
                insert_token(&mut skip, &text).map_err(serde::de::Error::custom)?;
            }
        }
    }
    Ok(skip)
}
