use std::fs;
use std::path::Path;

use crate::{AssetError, BlockCatalog, DecorationDefinition, DecorationTable};

/// Load a block catalog from the provided JSON file path.
pub fn catalog_from_file(path: &Path) -> Result<BlockCatalog, AssetError> {
    let data = fs::read_to_string(path)?;
    catalog_from_str(&data)
}

/// Load a block catalog from an in-memory JSON string.
pub fn catalog_from_str(input: &str) -> Result<BlockCatalog, AssetError> {
    let blocks = crate::load_blocks_from_str(input)?;
    BlockCatalog::new(blocks)
}

/// Load decoration stats from the provided JSON file path.
pub fn decorations_from_file(path: &Path) -> Result<DecorationTable, AssetError> {
    let data = fs::read_to_string(path)?;
    decorations_from_str(&data)
}

/// Load decoration stats from an in-memory JSON string.
pub fn decorations_from_str(input: &str) -> Result<DecorationTable, AssetError> {
    let defs: Vec<DecorationDefinition> = serde_json::from_str(input)?;
    for def in &defs {
        if u16::from(def.x) + u16::from(def.width) > 16 || u16::from(def.y) + u16::from(def.height) > 16 {
            return Err(AssetError::Invalid(format!(
                "decoration for texture {} exceeds its 16x16 tile",
                def.texture
            )));
        }
    }
    Ok(DecorationTable::from_definitions(defs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeKind;

    #[test]
    fn catalog_parses_shapes_and_rejects_garbage() {
        let catalog = catalog_from_str(
            r#"[
                {"id": 1, "name": "stone", "texture": 1},
                {"id": 50, "name": "torch", "solid": false, "shape": "torch", "texture": 80},
                {"id": 85, "name": "fence", "solid": false, "shape": "fence", "texture": 4}
            ]"#,
        )
        .expect("valid pack");
        assert_eq!(catalog.get(50).shape, ShapeKind::Torch);
        assert!(!catalog.get(85).solid);

        assert!(matches!(catalog_from_str("{"), Err(AssetError::Parse(_))));
        assert!(matches!(
            catalog_from_str(r#"[{"id": 1, "name": "x", "shape": "blob"}]"#),
            Err(AssetError::Parse(_))
        ));
    }

    #[test]
    fn decorations_validate_tile_bounds() {
        let table = decorations_from_str(r#"[{"texture": 80, "x": 7, "y": 6, "width": 2, "height": 10}]"#)
            .expect("valid decorations");
        assert!(table.get(80).is_some());

        let err = decorations_from_str(r#"[{"texture": 80, "x": 12, "y": 0, "width": 8, "height": 4}]"#);
        assert!(matches!(err, Err(AssetError::Invalid(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = catalog_from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(err, Err(AssetError::Io(_))));
    }
}
