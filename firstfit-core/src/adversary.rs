//! Neighbour selection for arriving vertices.
//!
//! The simulation asks an [`Adversary`] which existing vertex each new edge
//! should reach. Randomness is always an explicit parameter so runs can be
//! reproduced from a seed.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::graph::VertexId;

/// Chooses the endpoint of each edge requested by an arriving vertex.
///
/// `candidates` is never empty and never contains `vertex`. Its order is
/// deterministic for a given run but otherwise unspecified. Implementations
/// return an index into `candidates`.
///
/// # Examples
/// ```
/// use firstfit_core::{Adversary, VertexId};
///
/// /// Always joins the vertex with the smallest identifier.
/// struct LowestId;
///
/// impl Adversary for LowestId {
///     fn pick(&mut self, _vertex: VertexId, candidates: &[VertexId]) -> usize {
///         candidates
///             .iter()
///             .enumerate()
///             .min_by_key(|(_, id)| **id)
///             .map_or(0, |(index, _)| index)
///     }
/// }
///
/// let candidates = [VertexId::new(5), VertexId::new(2), VertexId::new(9)];
/// assert_eq!(LowestId.pick(VertexId::new(1), &candidates), 1);
/// ```
pub trait Adversary {
    /// Returns the index of the chosen candidate.
    fn pick(&mut self, vertex: VertexId, candidates: &[VertexId]) -> usize;
}

impl<A: Adversary + ?Sized> Adversary for &mut A {
    fn pick(&mut self, vertex: VertexId, candidates: &[VertexId]) -> usize {
        (**self).pick(vertex, candidates)
    }
}

/// Adversary that picks uniformly at random from the candidates.
///
/// # Examples
/// ```
/// use firstfit_core::{Adversary, UniformAdversary, VertexId};
///
/// let candidates = [VertexId::new(3), VertexId::new(2)];
/// let mut first = UniformAdversary::seeded(7);
/// let mut second = UniformAdversary::seeded(7);
/// let picks: Vec<usize> = (0..8).map(|_| first.pick(VertexId::new(1), &candidates)).collect();
/// let again: Vec<usize> = (0..8).map(|_| second.pick(VertexId::new(1), &candidates)).collect();
/// assert_eq!(picks, again);
/// assert!(picks.iter().all(|&index| index < candidates.len()));
/// ```
#[derive(Clone, Debug)]
pub struct UniformAdversary<R> {
    rng: R,
}

impl<R: Rng> UniformAdversary<R> {
    /// Wraps an existing random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Releases the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl UniformAdversary<SmallRng> {
    /// Builds an adversary backed by a [`SmallRng`] seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Builds an adversary seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> Adversary for UniformAdversary<R> {
    fn pick(&mut self, _vertex: VertexId, candidates: &[VertexId]) -> usize {
        self.rng.gen_range(0..candidates.len())
    }
}

/// SplitMix64 increment (the 64-bit golden ratio) used for per-run seed
/// derivation.
const RUN_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Derives an independent seed for the run identified by `key`.
///
/// Sweeps key runs by node count, so the seed does not depend on which
/// worker executes the run.
#[inline]
#[must_use]
pub fn derive_run_seed(base_seed: u64, key: u64) -> u64 {
    splitmix64(base_seed ^ key.wrapping_add(1).wrapping_mul(RUN_SEED_SPACING))
}

#[inline]
const fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(RUN_SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}
