//! Pseudo-SMILES structure strings assembled from fixed token vocabularies.
//!
//! The output only looks like chemical notation. It is never parsed or
//! validated; ring closure digits repeat freely across fragments.

use rand::Rng;

use druggen_core::random::{pick, uniform_int};

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Core fragments: aromatic rings, saturated heterocycles, common scaffolds.
/// Repeats weight the uniform pick.
pub const CORE_FRAGMENTS: &[&str] = &[
    // aromatic rings
    "c1ccccc1", "c1ccncc1", "c1cccnc1", "c1ccncc1", "c1ccsc1", "c1ccoc1",
    "c1ccncc1", "c1cccnc1", "c1ccncc1", "c1ccsc1", "c1ccoc1",
    // heterocycles
    "C1CCCCC1", "C1CCNCC1", "C1CCNCC1", "C1CCNCC1", "C1CCSCC1", "C1CCOCC1",
    "C1CCNCC1", "C1CCNCC1", "C1CCNCC1", "C1CCSCC1", "C1CCOCC1",
    // scaffolds
    "CC(=O)NC", "CC(=O)NN", "CC(=O)OC", "CC(=O)SC", "CC(=O)NC",
    "CN1CCCC1", "CN1CCCC1", "CN1CCCC1", "CN1CCCC1", "CN1CCCC1",
];

/// Substituents: alkyl, halogen, functional and polar groups, aromatic rings.
pub const SUBSTITUENTS: &[&str] = &[
    // alkyl
    "C", "CC", "CCC", "CCCC", "CCCCC",
    // halogens
    "F", "Cl", "Br", "I",
    // functional
    "OC", "SC", "NC", "CC(=O)", "CC(=O)O",
    "CC(=O)N", "CC(=O)S", "CC(=O)OC", "CC(=O)NC",
    // polar
    "OC", "SC", "NC", "CC(=O)", "CC(=O)O",
    "CC(=O)N", "CC(=O)S", "CC(=O)OC", "CC(=O)NC",
    // aromatic
    "c1ccccc1", "c1ccncc1", "c1cccnc1", "c1ccncc1",
];

/// Linkers placed between consecutive cores. The empty string is a direct bond.
pub const LINKERS: &[&str] = &[
    // single bonds
    "", "C", "CC", "CCC",
    // double bonds
    "=C", "=CC", "=CCC",
    // triple bonds
    "#C", "#CC",
    // heteroatoms
    "O", "S", "N", "NC", "CO", "CS",
    // aromatic
    "c1ccccc1", "c1ccncc1",
];

/// Bounds on the token counts drawn per structure.
pub const CORE_COUNT: (u32, u32) = (1, 3);
pub const SUBSTITUENTS_PER_CORE: (u32, u32) = (0, 2);
pub const TRAILING_SUBSTITUENTS: (u32, u32) = (0, 1);

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

fn push_substituents<R: Rng + ?Sized>(rng: &mut R, out: &mut String, bounds: (u32, u32)) {
    let n = uniform_int(rng, bounds.0, bounds.1);
    for _ in 0..n {
        if let Some(tok) = pick(rng, SUBSTITUENTS) {
            out.push_str(tok);
        }
    }
}

/// Generate one structure string.
///
/// Draws 1–3 cores; each core is followed by 0–2 substituents and, unless it
/// is the last core, one linker. 0–1 trailing substituents close the string.
pub fn generate_structure<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut out = String::new();
    let n_cores = uniform_int(rng, CORE_COUNT.0, CORE_COUNT.1);

    for i in 0..n_cores {
        if let Some(core) = pick(rng, CORE_FRAGMENTS) {
            out.push_str(core);
        }
        push_substituents(rng, &mut out, SUBSTITUENTS_PER_CORE);
        if i + 1 < n_cores {
            if let Some(linker) = pick(rng, LINKERS) {
                out.push_str(linker);
            }
        }
    }

    push_substituents(rng, &mut out, TRAILING_SUBSTITUENTS);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
