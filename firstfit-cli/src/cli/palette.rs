//! Display colours for rendering coloured graphs.

use std::collections::HashSet;

use firstfit_core::{Colour, SimulationError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Number of distinct `#rrggbb` values.
pub const MAX_PALETTE_SIZE: usize = 1 << 24;

/// Maps colour labels to distinct `#rrggbb` strings.
///
/// The palette is generated from a seed so renders are reproducible. It is
/// only ever consulted when rendering output.
///
/// # Examples
/// ```
/// use firstfit_cli::cli::Palette;
/// use firstfit_core::Colour;
///
/// let palette = Palette::generate(3, 11).expect("size is within range");
/// let hex = palette.hex(Colour::new(2)).expect("label 2 is in range");
/// assert_eq!(hex.len(), 7);
/// assert!(palette.hex(Colour::new(3)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<String>,
}

impl Palette {
    /// Draws `size` distinct colours from a generator seeded with `seed`.
    ///
    /// Returns `None` when `size` exceeds [`MAX_PALETTE_SIZE`].
    #[must_use]
    pub fn generate(size: usize, seed: u64) -> Option<Self> {
        if size > MAX_PALETTE_SIZE {
            return None;
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut seen = HashSet::with_capacity(size);
        let mut entries = Vec::with_capacity(size);
        while entries.len() < size {
            let rgb: u32 = rng.gen_range(0..=0x00ff_ffff);
            if seen.insert(rgb) {
                entries.push(format!("#{rgb:06x}"));
            }
        }
        Some(Self { entries })
    }

    /// Returns the number of colours in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the palette holds no colours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the display colour for `colour`.
    ///
    /// # Errors
    /// Returns [`SimulationError::ExhaustedPalette`] when the label lies past
    /// the end of the palette.
    pub fn hex(&self, colour: Colour) -> Result<&str, SimulationError> {
        self.entries
            .get(colour.get())
            .map(String::as_str)
            .ok_or(SimulationError::ExhaustedPalette {
                colour,
                palette_size: self.entries.len(),
            })
    }
}
