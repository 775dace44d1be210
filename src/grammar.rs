use crate::ChainType;
use lazy_static::lazy_static;

/// Chain-length prefixes in table order. The prefix at index `i` names a
/// parent chain of `i + 1` carbons.
pub static CHAIN_LENGTH_PREFIXES: [&str; 9] = [
    "METH", "ETH", "PROP", "BUT", "PENT", "HEX", "HEPT", "OCT", "NON",
];

/// Chain-type suffixes in the order they are tried against a name.
pub static CHAIN_ENDINGS: [(ChainType, &str); 3] = [
    (ChainType::Alkane, "ane"),
    (ChainType::Alkene, "ene"),
    (ChainType::Alkyne, "yne"),
];

lazy_static! {
    /// `(prefix, chain length)` pairs, in the same order as `CHAIN_LENGTH_PREFIXES`.
    pub static ref CHAIN_LENGTHS: Vec<(&'static str, usize)> = CHAIN_LENGTH_PREFIXES
        .iter()
        .enumerate()
        .map(|(i, prefix)| (*prefix, i + 1))
        .collect();
}

/// The suffix that names a chain of the given type.
pub fn chain_ending(chain_type: ChainType) -> &'static str {
    CHAIN_ENDINGS
        .iter()
        .find(|(ty, _)| *ty == chain_type)
        .map(|(_, ending)| *ending)
        .unwrap_or_default()
}

/// Returns the part of `name` before `suffix` if `name` ends with it,
/// ignoring ASCII case.
pub(crate) fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(suffix.len())?;
    if !name.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = name.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_lengths_follow_table_order() {
        assert_eq!(CHAIN_LENGTHS.len(), 9);
        assert_eq!(CHAIN_LENGTHS[0], ("METH", 1));
        assert_eq!(CHAIN_LENGTHS[3], ("BUT", 4));
        assert_eq!(CHAIN_LENGTHS[8], ("NON", 9));
    }

    #[test]
    fn test_chain_ending() {
        assert_eq!(chain_ending(ChainType::Alkane), "ane");
        assert_eq!(chain_ending(ChainType::Alkene), "ene");
        assert_eq!(chain_ending(ChainType::Alkyne), "yne");
    }

    #[test]
    fn test_strip_suffix_ignore_case() {
        assert_eq!(strip_suffix_ignore_case("ethANE", "ane"), Some("eth"));
        assert_eq!(strip_suffix_ignore_case("but", "BUT"), Some(""));
        assert_eq!(strip_suffix_ignore_case("ne", "ane"), None);
        assert_eq!(strip_suffix_ignore_case("ethene", "ane"), None);
        // 'é' is two bytes, so the split would land inside it
        assert_eq!(strip_suffix_ignore_case("é", "e"), None);
    }
}
