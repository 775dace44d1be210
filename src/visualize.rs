use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::*;

use crate::{carbon_label, hydrogen_count, BondPair, CarbonLayout, LayoutError, Molecule};

/// Distance between neighbouring carbons, in both axes.
const GRID: i64 = 80;
const BOND_LENGTH: i64 = 30;
/// Bonds are drawn this far right of their atom so they sit between labels.
const BOND_LAYER_SHIFT: i64 = 25;
const MARGIN: (i32, i32) = (23, 15);
const CANVAS_HEIGHT: i32 = 30;
/// Width taken off the last grid cell, which has no bond after it.
const CANVAS_TRIM: i64 = 35;
const STYLE: &str = "text{text-anchor:middle;width:45px;dominant-baseline:middle;font-size:24px;}\
path{stroke:black;stroke-width:2;transform:translate(0px,-2px);}";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bond {
    Single,
    Double,
    Triple,
}

impl Bond {
    pub fn from_order(order: u8) -> Option<Self> {
        match order {
            1 => Some(Bond::Single),
            2 => Some(Bond::Double),
            3 => Some(Bond::Triple),
            _ => None,
        }
    }

    pub fn order(&self) -> u8 {
        match self {
            Bond::Single => 1,
            Bond::Double => 2,
            Bond::Triple => 3,
        }
    }
}

/// A carbon of the parent chain with its implicit hydrogens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Carbon {
    /// 1-based position in the chain.
    pub locant: usize,
    pub hydrogens: u8,
}

pub type ChainGraph = UnGraph<Carbon, Bond>;

impl Molecule {
    /// Lays the parent chain out on a horizontal grid, one carbon per cell.
    pub fn layout(&self) -> Result<CarbonLayout, LayoutError> {
        let mut layout = CarbonLayout::new();
        for (i, position) in (1..self.chain_length).zip(1i32..) {
            let order = self.bond_order_at(i);
            layout.add_carbon(position, BondPair::new(0, order))?;
        }
        Ok(layout)
    }

    /// Renders the carbon skeleton as an SVG document.
    pub fn render(&self) -> Result<String, LayoutError> {
        debug!("Rendering {:?}", self.name);
        render_layout(&self.layout()?)
    }

    /// Renders the carbon skeleton and writes the SVG document to `path`.
    pub fn render_to(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let svg = self.render()?;
        std::fs::write(path, svg).map_err(|source| RenderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!("SVG file saved to {}", path.display());
        Ok(())
    }

    /// The parent chain as a graph of carbons joined by bonds.
    pub fn to_graph(&self) -> Result<ChainGraph, LayoutError> {
        let layout = self.layout()?;
        let mut graph = ChainGraph::default();
        let mut previous: Option<NodeIndex> = None;
        for ((position, bonds), locant) in layout.iter().zip(1usize..) {
            let hydrogens = hydrogen_count(position, bonds)?;
            let node = graph.add_node(Carbon { locant, hydrogens });
            if let (Some(prev), Some(bond)) = (previous, Bond::from_order(bonds.left)) {
                graph.add_edge(prev, node, bond);
            }
            previous = Some(node);
        }
        Ok(graph)
    }
}

/// Renders a finished layout as an SVG document.
pub fn render_layout(layout: &CarbonLayout) -> Result<String, LayoutError> {
    let mut carbons = Vec::new();
    let mut bonds = Vec::new();

    for (position, pair) in layout.iter() {
        carbons.push(carbon_markup(position, pair)?);
        let cell = i64::from(position);
        // each bond is met from both of its atoms, the duplicates go below
        if let Some(bond) = Bond::from_order(pair.left) {
            bonds.push(horizontal_bond(bond, (cell - 1, 0)));
        }
        if let Some(bond) = Bond::from_order(pair.right) {
            bonds.push(horizontal_bond(bond, (cell, 0)));
        }
    }

    let carbons = unique(carbons);
    let bonds = unique(bonds);
    let width = carbons.len() as i64 * GRID - CANVAS_TRIM;

    let lines = [
        format!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{CANVAS_HEIGHT}">"#),
        format!("<style>{STYLE}</style>"),
        format!(r#"<g transform="translate({}, {})">"#, MARGIN.0, MARGIN.1),
        String::new(),
        format!(r#"<g transform="translate({BOND_LAYER_SHIFT}, 0)">{}"#, bonds.join("\n")),
        "</g>".to_string(),
        String::new(),
        carbons.join("\n"),
        String::new(),
        "</g>".to_string(),
        "</svg>".to_string(),
    ];
    Ok(lines.join("\n"))
}

/// Keeps the first occurrence of every item, in order.
fn unique(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}

/// Grid cell to drawing coordinates. Any `i32` position fits once scaled.
fn absolute((x, y): (i64, i64)) -> (i64, i64) {
    (x * GRID, y * GRID)
}

fn carbon_markup(position: i32, bonds: BondPair) -> Result<String, LayoutError> {
    let hydrogens = hydrogen_count(position, bonds)?;
    let (x, y) = absolute((i64::from(position), 0));
    Ok(format!(r#"<text x="{x}" y="{y}">{}</text>"#, carbon_label(hydrogens)))
}

/// Parallel strokes for `bond` starting at `cell`.
fn horizontal_bond(bond: Bond, cell: (i64, i64)) -> String {
    let (x, y) = absolute(cell);
    let offsets: &[i64] = match bond {
        Bond::Single => &[0],
        Bond::Double => &[-3, 3],
        Bond::Triple => &[-5, 0, 5],
    };
    offsets
        .iter()
        .map(|dy| format!(r#"<path d="M {x} {} h {BOND_LENGTH}"/>"#, y + dy))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generates a DOT representation of a chain graph, one edge statement per
/// unit of bond order.
pub fn generate_dot(graph: &ChainGraph) -> String {
    let mut lines = vec![
        "graph Molecule {".to_string(),
        "    layout=neato; rankdir=LR;".to_string(),
        "    multiedge=true;".to_string(),
    ];

    for node in graph.node_indices() {
        let carbon = &graph[node];
        lines.push(format!(
            "    {} [label=\"{}\", xlabel=\"{}\", shape=circle];",
            node.index(),
            carbon_label(carbon.hydrogens),
            carbon.locant
        ));
    }

    for edge in graph.edge_references() {
        for _ in 0..edge.weight().order() {
            lines.push(format!(
                "    {} -- {} [penwidth=2];",
                edge.source().index(),
                edge.target().index()
            ));
        }
    }

    lines.push("}".to_string());
    lines.join("\n") + "\n"
}
