//! Static asset catalogs for the EscapeTwogether art pipeline.
//!
//! Each catalog is a fixed list of [`AssetRequest`]s with a shared
//! server-side filename prefix. The batch binary picks catalogs via a
//! selection name; the data itself never changes at runtime.

use atelier_core::asset::AssetRequest;
use atelier_core::error::CoreError;

mod comprehensive;
mod props;

pub use comprehensive::{particle_sprites, room_backgrounds, scene_props, ui_chrome};
pub use props::{additional_props, puzzle_props};

/// Filename prefix ComfyUI uses for puzzle-prop outputs.
pub const PREFIX_PUZZLE: &str = "puzzle_asset";
/// Filename prefix ComfyUI uses for the comprehensive set.
pub const PREFIX_ASSET: &str = "asset";

/// One named catalog of asset requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Human-readable catalog name, used in batch logs.
    pub name: &'static str,
    /// Server-side filename prefix for the SaveImage sink.
    pub filename_prefix: &'static str,
    /// The asset requests, in generation order.
    pub assets: Vec<AssetRequest>,
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Run only the puzzle-prop catalogs.
pub const SELECT_PUZZLES: &str = "puzzles";
/// Run the comprehensive set (rooms, scene props, UI, particles).
pub const SELECT_COMPREHENSIVE: &str = "comprehensive";
/// Run everything.
pub const SELECT_ALL: &str = "all";

/// All valid catalog selections.
pub const VALID_SELECTIONS: &[&str] = &[SELECT_PUZZLES, SELECT_COMPREHENSIVE, SELECT_ALL];

/// Resolve a selection name to its catalogs, in generation order.
pub fn select(selection: &str) -> Result<Vec<Catalog>, CoreError> {
    match selection {
        SELECT_PUZZLES => Ok(puzzle_catalogs()),
        SELECT_COMPREHENSIVE => Ok(comprehensive_catalogs()),
        SELECT_ALL => {
            let mut catalogs = puzzle_catalogs();
            catalogs.extend(comprehensive_catalogs());
            Ok(catalogs)
        }
        other => Err(CoreError::Validation(format!(
            "Unknown catalog selection '{other}'. Must be one of: {}",
            VALID_SELECTIONS.join(", ")
        ))),
    }
}

/// The two puzzle-prop catalogs (prefix `puzzle_asset`).
pub fn puzzle_catalogs() -> Vec<Catalog> {
    vec![
        Catalog {
            name: "puzzle-props",
            filename_prefix: PREFIX_PUZZLE,
            assets: puzzle_props(),
        },
        Catalog {
            name: "additional-props",
            filename_prefix: PREFIX_PUZZLE,
            assets: additional_props(),
        },
    ]
}

/// The comprehensive catalogs (prefix `asset`).
pub fn comprehensive_catalogs() -> Vec<Catalog> {
    vec![
        Catalog {
            name: "room-backgrounds",
            filename_prefix: PREFIX_ASSET,
            assets: room_backgrounds(),
        },
        Catalog {
            name: "scene-props",
            filename_prefix: PREFIX_ASSET,
            assets: scene_props(),
        },
        Catalog {
            name: "ui-chrome",
            filename_prefix: PREFIX_ASSET,
            assets: ui_chrome(),
        },
        Catalog {
            name: "particle-sprites",
            filename_prefix: PREFIX_ASSET,
            assets: particle_sprites(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::asset::validate_request;

    #[test]
    fn catalog_sizes_match_the_shipped_sets() {
        assert_eq!(puzzle_props().len(), 16);
        assert_eq!(additional_props().len(), 4);
        assert_eq!(room_backgrounds().len(), 3);
        assert_eq!(scene_props().len(), 10);
        assert_eq!(ui_chrome().len(), 8);
        assert_eq!(particle_sprites().len(), 6);
    }

    #[test]
    fn every_asset_passes_validation() {
        for catalog in select(SELECT_ALL).unwrap() {
            for asset in &catalog.assets {
                validate_request(asset)
                    .unwrap_or_else(|e| panic!("{}: {e}", asset.filename));
            }
        }
    }

    #[test]
    fn filenames_are_unique_across_all_catalogs() {
        let mut seen = std::collections::HashSet::new();
        for catalog in select(SELECT_ALL).unwrap() {
            for asset in &catalog.assets {
                assert!(
                    seen.insert(asset.filename.clone()),
                    "duplicate filename {}",
                    asset.filename
                );
            }
        }
    }

    #[test]
    fn every_filename_is_a_png() {
        for catalog in select(SELECT_ALL).unwrap() {
            for asset in &catalog.assets {
                assert!(asset.filename.ends_with(".png"), "{}", asset.filename);
            }
        }
    }

    #[test]
    fn room_backgrounds_are_full_hd_with_extra_steps() {
        for asset in room_backgrounds() {
            assert_eq!(asset.width, Some(1920));
            assert_eq!(asset.height, Some(1080));
            assert_eq!(asset.steps, Some(30));
        }
    }

    #[test]
    fn non_room_assets_use_default_canvas() {
        for assets in [puzzle_props(), additional_props(), ui_chrome()] {
            for asset in assets {
                assert!(asset.width.is_none(), "{}", asset.filename);
                assert!(asset.height.is_none(), "{}", asset.filename);
            }
        }
    }

    #[test]
    fn no_catalog_asset_pins_a_seed() {
        for catalog in select(SELECT_ALL).unwrap() {
            for asset in &catalog.assets {
                assert!(asset.seed.is_none(), "{}", asset.filename);
            }
        }
    }

    #[test]
    fn select_all_covers_both_groups() {
        let all = select(SELECT_ALL).unwrap();
        assert_eq!(all.len(), 6);
        let total: usize = all.iter().map(|c| c.assets.len()).sum();
        assert_eq!(total, 47);
    }

    #[test]
    fn select_rejects_unknown_names() {
        assert!(select("everything").is_err());
    }
}
