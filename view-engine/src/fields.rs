//! FILENAME: view-engine/src/fields.rs
//! Well-known field names from the backend payload, plus the derived column
//! names the sorter understands. Field names are the literal keys the API
//! uses (Portuguese, as authored); Rust identifiers stay English.

/// Primary grouping dimension: the work sector.
pub const SECTOR: &str = "Setor";
pub const SECTOR_DESCRIPTION: &str = "Descrição setor";

pub const SEPARATED_LINES: &str = "Linhas Separadas";
pub const REMAINING_LINES: &str = "Linhas Restantes";
pub const REMAINING_WEIGHT: &str = "Peso Restante";
pub const REMAINING_CONTAINERS: &str = "Containers Restantes";
pub const REMAINING_ITEMS: &str = "Itens Restantes";
pub const TARGET: &str = "Meta";

// Secondary categorical dimensions on the container feed.
pub const WAVE: &str = "Onda";
pub const LOAD: &str = "Carga";
pub const STAGE: &str = "Stage";
pub const PICK_AREA: &str = "Área Separação";
pub const CONTAINER: &str = "Container";
pub const PENDENCY: &str = "Pendência";

/// Derived column: `Linhas Separadas + Linhas Restantes`.
pub const COLUMN_TOTAL: &str = "Total";
/// Derived column: completion percentage of a record.
pub const COLUMN_PROGRESS: &str = "Progresso";

/// Text fields scanned by the free-text search box.
pub const DEFAULT_SEARCH_FIELDS: [&str; 2] = [SECTOR, SECTOR_DESCRIPTION];
