//! Property tests for the carbon layout and the skeletal renderer.

use hydrocarbon::*;
use proptest::prelude::*;

/// A chain length and a shuffled order to add carbons `1..length` in.
fn insertion_order() -> impl Strategy<Value = (usize, Vec<i32>)> {
    (1usize..=9).prop_flat_map(|length| {
        let positions: Vec<i32> = (1..length as i32).collect();
        (Just(length), Just(positions).prop_shuffle())
    })
}

/// A valid alkene or alkyne name with a random set of locants.
fn unsaturated_name() -> impl Strategy<Value = String> {
    (2usize..=9, prop::bool::ANY).prop_flat_map(|(length, triple)| {
        let ending = if triple { "yne" } else { "ene" };
        prop::sample::subsequence((1..length).collect::<Vec<_>>(), 1..length).prop_map(move |locants| {
            let locants = locants.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(",");
            format!("{}-{}-{}", CHAIN_LENGTH_PREFIXES[length - 1].to_lowercase(), locants, ending)
        })
    })
}

proptest! {
    #[test]
    fn shared_bonds_agree_in_any_insertion_order((length, order) in insertion_order()) {
        let mut layout = CarbonLayout::new();
        for position in order {
            layout.add_carbon(position, BondPair::new(0, 1)).unwrap();
        }
        prop_assert_eq!(layout.len(), length);
        for p in 0..(length as i32 - 1) {
            let here = layout.get(p).unwrap();
            let next = layout.get(p + 1).unwrap();
            prop_assert_eq!(here.right, next.left);
            prop_assert_eq!(here.right, 1);
        }
    }

    #[test]
    fn rendered_chain_is_independent_of_insertion_order((length, order) in insertion_order()) {
        let mut layout = CarbonLayout::new();
        for position in order {
            layout.add_carbon(position, BondPair::new(0, 1)).unwrap();
        }
        let svg = render_layout(&layout).unwrap();

        let name = format!("{}ane", CHAIN_LENGTH_PREFIXES[length - 1]);
        let expected = Molecule::from_iupac(&name).unwrap().render().unwrap();
        prop_assert_eq!(&svg, &expected);
        prop_assert_eq!(svg.matches("<text").count(), length);
        prop_assert_eq!(svg.matches("<path").count(), length - 1);
    }

    #[test]
    fn unsaturated_names_parse_and_render(name in unsaturated_name()) {
        let molecule = Molecule::from_iupac(&name).unwrap();
        prop_assert!(!molecule.bond_locants().is_empty());
        prop_assert_eq!(molecule.clone(), Molecule::from_iupac(&name).unwrap());
        for &p in molecule.bond_locants() {
            prop_assert!(p >= 1 && p < molecule.chain_length());
        }

        let layout = molecule.layout().unwrap();
        for (position, bonds) in layout.iter() {
            if let Some(next) = layout.get(position + 1) {
                prop_assert_eq!(bonds.right, next.left);
            }
        }
        // adjacent triple bonds overcrowd a carbon, anything else draws
        if let Ok(svg) = molecule.render() {
            prop_assert_eq!(svg.matches("<text").count(), molecule.chain_length());
        }
    }

    #[test]
    fn parse_never_panics(name in "[a-zA-Z0-9,-]{0,16}") {
        let _ = Molecule::from_iupac(&name);
    }
}
