use crate::{hydrogen_count, ChainType, LayoutError, Molecule};

impl Molecule {
    /// A one-sentence description of the molecule.
    pub fn describe(&self) -> String {
        describe(self)
    }

    /// The molecular formula, e.g. `C4H8` for but-2-ene.
    pub fn formula(&self) -> Result<String, LayoutError> {
        let layout = self.layout()?;
        let mut hydrogens = 0usize;
        for (position, bonds) in layout.iter() {
            hydrogens += usize::from(hydrogen_count(position, bonds)?);
        }
        Ok(format!("{}{}", element_count("C", layout.len()), element_count("H", hydrogens)))
    }
}

fn element_count(symbol: &str, count: usize) -> String {
    match count {
        0 => String::new(),
        1 => symbol.to_string(),
        n => format!("{symbol}{n}"),
    }
}

/// Describes a molecule in plain English.
pub fn describe(molecule: &Molecule) -> String {
    let name = molecule.name();
    let length = molecule.chain_length();
    let chain_type = molecule.chain_type();

    let bond = match chain_type {
        ChainType::Alkane => return format!("{name} is an alkane with a length of {length}."),
        ChainType::Alkene => "double",
        ChainType::Alkyne => "triple",
    };

    let locants = molecule.bond_locants();
    let between = locants
        .iter()
        .map(|p| format!("({} and {} locants)", p, p + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let plural = if locants.len() == 1 { "" } else { "s" };

    format!(
        "{name} is an {chain_type} with a length of {length} and has {} {bond} bond{plural} between the {between}.",
        locants.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_alkane() {
        let molecule = Molecule::from_iupac("ethane").unwrap();
        assert_eq!(describe(&molecule), "ethane is an alkane with a length of 2.");
    }

    #[test]
    fn test_describe_single_double_bond() {
        let molecule = Molecule::from_iupac("but-2-ene").unwrap();
        let description = molecule.describe();
        assert!(description.contains("(2 and 3 locants)"));
        assert_eq!(
            description,
            "but-2-ene is an alkene with a length of 4 and has 1 double bond between the (2 and 3 locants)."
        );
    }

    #[test]
    fn test_describe_several_triple_bonds() {
        let molecule = Molecule::from_iupac("hex-1,4-yne").unwrap();
        assert_eq!(
            molecule.describe(),
            "hex-1,4-yne is an alkyne with a length of 6 and has 2 triple bonds between the (1 and 2 locants), (4 and 5 locants)."
        );
    }

    #[test]
    fn test_formula() {
        let formula = |name: &str| Molecule::from_iupac(name).unwrap().formula().unwrap();
        assert_eq!(formula("methane"), "CH4");
        assert_eq!(formula("ethane"), "C2H6");
        assert_eq!(formula("ethene"), "C2H4");
        assert_eq!(formula("ethyne"), "C2H2");
        assert_eq!(formula("but-2-ene"), "C4H8");
        assert_eq!(formula("hex-1,4-yne"), "C6H6");
    }

    #[test]
    fn test_formula_rejects_crowded_carbon() {
        let molecule = Molecule::from_iupac("prop-1,2-yne").unwrap();
        assert!(matches!(
            molecule.formula(),
            Err(LayoutError::TooManyConnections { position: 1, total: 6 })
        ));
    }
}
