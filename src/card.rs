//! Card types and attribute domains.

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Purple.
    Purple,
}

/// Symbol shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Oval.
    Oval,
    /// Diamond.
    Diamond,
    /// Squiggle.
    Squiggle,
}

/// Symbol shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shading {
    /// Outline only.
    Empty,
    /// Striped interior.
    Shaded,
    /// Solid interior.
    Filled,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Purple];

    /// Index of this color within its 3-value domain.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Purple => 2,
        }
    }
}

impl Shape {
    /// All shapes in canonical order.
    pub const ALL: [Self; 3] = [Self::Oval, Self::Diamond, Self::Squiggle];

    /// Index of this shape within its 3-value domain.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Oval => 0,
            Self::Diamond => 1,
            Self::Squiggle => 2,
        }
    }
}

impl Shading {
    /// All shadings in canonical order.
    pub const ALL: [Self; 3] = [Self::Empty, Self::Shaded, Self::Filled];

    /// Index of this shading within its 3-value domain.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Shaded => 1,
            Self::Filled => 2,
        }
    }
}

/// A Set card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The color of the symbols.
    pub color: Color,
    /// The shape of the symbols.
    pub shape: Shape,
    /// The shading of the symbols.
    pub shading: Shading,
    /// The number of symbols (1 to 3).
    pub number: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the number. Values outside 1..=3
    /// are accepted but never occur in cards produced by a [`Deck`].
    ///
    /// [`Deck`]: crate::Deck
    #[must_use]
    pub const fn new(color: Color, shape: Shape, shading: Shading, number: u8) -> Self {
        Self {
            color,
            shape,
            shading,
            number,
        }
    }

    /// Returns the four attribute indices, each in `0..3`.
    ///
    /// The order is color, shape, shading, number. The number axis maps
    /// 1..=3 onto 0..3 modulo 3.
    #[must_use]
    pub const fn axis_indices(self) -> [u8; 4] {
        [
            self.color.index(),
            self.shape.index(),
            self.shading.index(),
            (self.number % 3 + 2) % 3,
        ]
    }
}

/// Number of cards in a full deck (3^4 attribute combinations).
pub const DECK_SIZE: usize = 81;
