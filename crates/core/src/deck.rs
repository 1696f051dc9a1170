//! Deck module - tile model, pair generation, and identity predicates
//!
//! A deck is the full shuffled tile sequence for one round. Every face
//! appears on exactly two tiles; the two physical tiles of a pair share an
//! `id` but never an `index`.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::error::GameError;
use crate::rng::SimpleRng;
use crate::types::{GridSize, Theme};

/// Inline tile label (number text or a catalog glyph).
///
/// Small enough to keep [`Tile`] `Copy`, which keeps selection and match
/// bookkeeping allocation-free.
pub type TileLabel = ArrayString<8>;

/// One physical card in the deck
///
/// `id` identifies the pair class (two tiles share an `id` to form a pair),
/// `index` is the tile's fixed position in the shuffled deck, and `label` is
/// the opaque display payload. Tiles are created once per round and are
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: u16,
    pub index: usize,
    pub label: TileLabel,
}

/// True iff both tiles are present and share a face (`id`).
///
/// This tests whether two *different physical* tiles form a valid pair. A
/// missing selection never matches anything, so comparing two empty slots is
/// false by construction.
pub fn tiles_match(a: Option<&Tile>, b: Option<&Tile>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.id == b.id,
        _ => false,
    }
}

/// True iff both tiles are present and are the *same physical tile*
/// (same `id` and same `index`).
///
/// Rendering uses this per cell to decide highlight state; it must not be
/// conflated with [`tiles_match`].
pub fn tiles_equal(a: Option<&Tile>, b: Option<&Tile>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.id == b.id && a.index == b.index,
        _ => false,
    }
}

/// Generate a shuffled, paired deck for the given grid and theme.
///
/// Faces are produced per theme (integers for Numbers, leading catalog
/// entries for Icons), duplicated so every face appears twice, shuffled,
/// and then assigned their final `index` in deck order.
///
/// Fails with [`GameError::InvalidConfiguration`] when the grid area is odd
/// and with [`GameError::InsufficientThemeAssets`] when the catalog cannot
/// cover the grid.
pub fn generate_deck(
    grid: GridSize,
    theme: Theme,
    catalog: &[&str],
    rng: &mut SimpleRng,
) -> Result<Vec<Tile>, GameError> {
    let total = grid.tile_count();
    if total % 2 != 0 {
        return Err(GameError::InvalidConfiguration(format!(
            "grid {}x{} has an odd tile count",
            grid.rows, grid.cols
        )));
    }
    let uniq_count = total / 2;

    let mut faces: Vec<(u16, TileLabel)> = Vec::with_capacity(uniq_count);
    match theme {
        Theme::Numbers => {
            for face in 0..uniq_count {
                let mut label = TileLabel::new();
                let _ = write!(label, "{}", face);
                faces.push((face as u16, label));
            }
        }
        Theme::Icons => {
            if uniq_count > catalog.len() {
                return Err(GameError::InsufficientThemeAssets {
                    needed: uniq_count,
                    available: catalog.len(),
                });
            }
            for (face, glyph) in catalog.iter().take(uniq_count).enumerate() {
                faces.push((face as u16, label_from(glyph)));
            }
        }
    }

    // Duplicate the face list (concatenate with itself), then shuffle the
    // instances and fix up indices to match final deck order.
    let mut deck: Vec<Tile> = Vec::with_capacity(total);
    for _ in 0..2 {
        for &(id, label) in &faces {
            deck.push(Tile {
                id,
                index: 0,
                label,
            });
        }
    }

    rng.shuffle(&mut deck);

    for (index, tile) in deck.iter_mut().enumerate() {
        tile.index = index;
    }

    Ok(deck)
}

/// Build a label from a catalog glyph, truncating at capacity.
fn label_from(glyph: &str) -> TileLabel {
    let mut label = TileLabel::new();
    for ch in glyph.chars() {
        if label.try_push(ch).is_err() {
            break;
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ICON_CATALOG;

    fn grid_4x4() -> GridSize {
        GridSize::new(4, 4)
    }

    #[test]
    fn test_deck_has_grid_area_tiles() {
        let mut rng = SimpleRng::new(1);
        let deck = generate_deck(grid_4x4(), Theme::Numbers, &ICON_CATALOG, &mut rng).unwrap();
        assert_eq!(deck.len(), 16);

        let deck = generate_deck(GridSize::new(6, 6), Theme::Icons, &ICON_CATALOG, &mut rng)
            .unwrap();
        assert_eq!(deck.len(), 36);
    }

    #[test]
    fn test_every_id_appears_exactly_twice() {
        let mut rng = SimpleRng::new(42);
        let deck = generate_deck(grid_4x4(), Theme::Numbers, &ICON_CATALOG, &mut rng).unwrap();

        for id in 0..8u16 {
            let count = deck.iter().filter(|t| t.id == id).count();
            assert_eq!(count, 2, "face {} should appear exactly twice", id);
        }
    }

    #[test]
    fn test_indices_are_contiguous_and_match_position() {
        let mut rng = SimpleRng::new(42);
        let deck = generate_deck(grid_4x4(), Theme::Icons, &ICON_CATALOG, &mut rng).unwrap();

        for (position, tile) in deck.iter().enumerate() {
            assert_eq!(tile.index, position);
        }
    }

    #[test]
    fn test_paired_tiles_share_labels() {
        let mut rng = SimpleRng::new(9);
        let deck = generate_deck(grid_4x4(), Theme::Numbers, &ICON_CATALOG, &mut rng).unwrap();

        for tile in &deck {
            let partner = deck
                .iter()
                .find(|t| t.id == tile.id && t.index != tile.index)
                .expect("every tile has a partner");
            assert_eq!(partner.label, tile.label);
        }
    }

    #[test]
    fn test_numbers_theme_labels_faces_in_order() {
        let mut rng = SimpleRng::new(5);
        let deck = generate_deck(grid_4x4(), Theme::Numbers, &ICON_CATALOG, &mut rng).unwrap();

        for face in 0..8u16 {
            let tile = deck.iter().find(|t| t.id == face).unwrap();
            assert_eq!(tile.label.as_str(), face.to_string());
        }
    }

    #[test]
    fn test_icons_theme_draws_catalog_prefix() {
        let mut rng = SimpleRng::new(5);
        let deck = generate_deck(grid_4x4(), Theme::Icons, &ICON_CATALOG, &mut rng).unwrap();

        for (face, glyph) in ICON_CATALOG.iter().take(8).enumerate() {
            let tile = deck.iter().find(|t| t.id == face as u16).unwrap();
            assert_eq!(tile.label.as_str(), *glyph);
        }
    }

    #[test]
    fn test_odd_grid_area_is_rejected() {
        let mut rng = SimpleRng::new(1);
        let err = generate_deck(GridSize::new(3, 3), Theme::Numbers, &ICON_CATALOG, &mut rng)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_short_catalog_is_rejected_for_icons_only() {
        let catalog = ["★", "♥"];
        let mut rng = SimpleRng::new(1);

        let err =
            generate_deck(grid_4x4(), Theme::Icons, &catalog, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientThemeAssets {
                needed: 8,
                available: 2
            }
        );

        // Numbers does not consume the catalog at all.
        assert!(generate_deck(grid_4x4(), Theme::Numbers, &catalog, &mut rng).is_ok());
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let deck_a = generate_deck(
            grid_4x4(),
            Theme::Numbers,
            &ICON_CATALOG,
            &mut SimpleRng::new(77),
        )
        .unwrap();
        let deck_b = generate_deck(
            grid_4x4(),
            Theme::Numbers,
            &ICON_CATALOG,
            &mut SimpleRng::new(77),
        )
        .unwrap();
        assert_eq!(deck_a, deck_b);
    }

    #[test]
    fn test_tiles_match_is_id_only() {
        let mut rng = SimpleRng::new(3);
        let deck = generate_deck(grid_4x4(), Theme::Numbers, &ICON_CATALOG, &mut rng).unwrap();

        let first = &deck[0];
        let partner = deck
            .iter()
            .find(|t| t.id == first.id && t.index != first.index)
            .unwrap();
        let other = deck.iter().find(|t| t.id != first.id).unwrap();

        assert!(tiles_match(Some(first), Some(partner)));
        assert!(!tiles_match(Some(first), Some(other)));
        assert!(!tiles_match(Some(first), None));
        assert!(!tiles_match(None, None));
    }

    #[test]
    fn test_tiles_equal_requires_same_physical_tile() {
        let mut rng = SimpleRng::new(3);
        let deck = generate_deck(grid_4x4(), Theme::Numbers, &ICON_CATALOG, &mut rng).unwrap();

        let first = &deck[0];
        let partner = deck
            .iter()
            .find(|t| t.id == first.id && t.index != first.index)
            .unwrap();

        // Pair members match but are not the same physical tile.
        assert!(tiles_equal(Some(first), Some(first)));
        assert!(!tiles_equal(Some(first), Some(partner)));
        assert!(!tiles_equal(Some(first), None));
    }

    #[test]
    fn test_label_from_truncates_oversized_glyphs() {
        let label = label_from("0123456789abcdef");
        assert_eq!(label.as_str(), "01234567");
    }
}
