//! Whole-graph evaluation measures.
//!
//! These return a single number rather than a per-entity result:
//!
//! - **Community significance index** (`community`): how strongly the
//!   Laplacian spectrum separates `c` communities, independent of any
//!   partition.
//! - **Topology scores** (`topology`): giant component fraction and
//!   normalized susceptibility, the usual robustness readouts after
//!   removing high-significance entities.
//! - **Ratio cut** (`cut`): cut size of a partition relative to group sizes.
//! - **Jaccard similarity** (`similarity`): overlap of two node sets, e.g.
//!   the top-n nodes of two rankings.

pub mod community;
pub mod cut;
pub mod similarity;
pub mod topology;

pub use community::significance_index;
pub use cut::ratio_cut;
pub use similarity::jaccard_similarity;
pub use topology::{giant_component_fraction, normalized_susceptibility};
