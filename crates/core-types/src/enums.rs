use serde::{Deserialize, Serialize};
use std::fmt;

/// The five asset classes tracked by the pipeline.
///
/// The declaration order is canonical: weight tuples, aligned series tables
/// and output columns all follow `Asset::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    Stock,
    CorporateBond,
    Gold,
    Cash,
    GovernmentBond,
}

impl Asset {
    /// The number of asset classes.
    pub const COUNT: usize = 5;

    /// All assets in canonical order.
    pub const ALL: [Asset; Asset::COUNT] = [
        Asset::Stock,
        Asset::CorporateBond,
        Asset::Gold,
        Asset::Cash,
        Asset::GovernmentBond,
    ];

    /// The two-letter column code used in the output tables.
    pub fn code(&self) -> &'static str {
        match self {
            Asset::Stock => "ST",
            Asset::CorporateBond => "CB",
            Asset::Gold => "GO",
            Asset::Cash => "CA",
            Asset::GovernmentBond => "PB",
        }
    }

    /// The position of this asset within `Asset::ALL`.
    pub fn index(&self) -> usize {
        match self {
            Asset::Stock => 0,
            Asset::CorporateBond => 1,
            Asset::Gold => 2,
            Asset::Cash => 3,
            Asset::GovernmentBond => 4,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Asset::Stock => "Stock",
            Asset::CorporateBond => "Corporate Bond",
            Asset::Gold => "Gold",
            Asset::Cash => "Cash",
            Asset::GovernmentBond => "Government Bond",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_indices_match_canonical_order() {
        for (i, asset) in Asset::ALL.iter().enumerate() {
            assert_eq!(asset.index(), i);
        }
    }

    #[test]
    fn asset_codes_are_unique() {
        let mut codes: Vec<_> = Asset::ALL.iter().map(|a| a.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), Asset::COUNT);
    }
}
