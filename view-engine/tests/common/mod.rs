//! FILENAME: tests/common/mod.rs
//! Shared fixtures for integration tests: a sector dataset shaped like the
//! overview table and a container dataset shaped like the detail modal.

#![allow(dead_code)]

use dataset::Record;
use view_engine::fields;

/// The overview table: one record per warehouse sector.
pub struct SectorFixture;

impl SectorFixture {
    /// (sector, description, separated lines, remaining lines, target)
    pub fn rows() -> Vec<(&'static str, &'static str, f64, f64, f64)> {
        vec![
            ("10", "Armazém Seco", 80.0, 20.0, 100.0),
            ("11", "Câmara Fria", 25.0, 75.0, 100.0),
            ("12", "Perecíveis", 50.0, 50.0, 120.0),
            ("20", "Expedição", 100.0, 0.0, 100.0),
            ("21", "Recebimento", 0.0, 60.0, 80.0),
        ]
    }

    pub fn records() -> Vec<Record> {
        Self::rows()
            .into_iter()
            .map(|(sector, description, separated, remaining, target)| {
                let mut r = Record::new();
                r.set(fields::SECTOR, sector);
                r.set(fields::SECTOR_DESCRIPTION, description);
                r.set(fields::SEPARATED_LINES, separated);
                r.set(fields::REMAINING_LINES, remaining);
                r.set(fields::TARGET, target);
                r
            })
            .collect()
    }

    /// The same dataset as a JSON API body.
    pub fn payload() -> String {
        let rows: Vec<serde_json::Value> = Self::rows()
            .into_iter()
            .map(|(sector, description, separated, remaining, target)| {
                serde_json::json!({
                    "Setor": sector,
                    "Descrição setor": description,
                    "Linhas Separadas": separated,
                    "Linhas Restantes": remaining,
                    "Meta": target,
                })
            })
            .collect();
        serde_json::json!({ "data": rows }).to_string()
    }
}

/// The detail modal: one record per container, with the categorical fields
/// the modal filters on.
pub struct ContainerFixture;

impl ContainerFixture {
    /// (wave, load, stage, pick area, sector)
    pub fn rows() -> Vec<(&'static str, &'static str, &'static str, &'static str, &'static str)> {
        vec![
            ("W1", "C100", "Separando", "Mezanino", "A"),
            ("W1", "C100", "Separando", "Térreo", "A"),
            ("W1", "C101", "Aguardando", "Térreo", "A"),
            ("W2", "C102", "Separando", "Mezanino", "B"),
            ("W2", "C103", "Finalizado", "Térreo", "B"),
        ]
    }

    pub fn records() -> Vec<Record> {
        Self::rows()
            .into_iter()
            .map(|(wave, load, stage, area, sector)| {
                let mut r = Record::new();
                r.set(fields::WAVE, wave);
                r.set(fields::LOAD, load);
                r.set(fields::STAGE, stage);
                r.set(fields::PICK_AREA, area);
                r.set(fields::SECTOR, sector);
                r.set(fields::CONTAINER, 1.0);
                r
            })
            .collect()
    }

    /// Records plus one container that has no wave at all.
    pub fn records_with_missing_wave() -> Vec<Record> {
        let mut records = Self::records();
        let mut r = Record::new();
        r.set(fields::LOAD, "C104");
        r.set(fields::STAGE, "Aguardando");
        r.set(fields::SECTOR, "C");
        r.set(fields::CONTAINER, 1.0);
        records.push(r);
        records
    }
}
