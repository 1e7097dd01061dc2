//! FILENAME: dataset/src/lib.rs
//! Dataset layer for the Sincronismo dashboard engine.
//!
//! This crate owns everything between the backend API payload and the view
//! engine: primitive field values, flat records, payload decoding, and the
//! record store that holds the original/filtered dataset pair.
//!
//! Layers:
//! - `value`: Primitive field values and their total ordering
//! - `record`: A flat record with documented fallback accessors
//! - `payload`: Decoding of the `{data: [...]}` API body
//! - `store`: Owner of the `original`/`filtered` dataset pair
//! - `error`: Error taxonomy for payload decoding

pub mod error;
pub mod payload;
pub mod record;
pub mod store;
pub mod value;

pub use error::DatasetError;
pub use payload::{decode_payload, ApiPayload};
pub use record::{missing_label, Record};
pub use store::RecordStore;
pub use value::FieldValue;
