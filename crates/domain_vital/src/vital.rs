//! Vital record entity

use serde::{Deserialize, Serialize};

/// A persisted vital signs record.
///
/// The id is assigned by the store on creation and never changes afterwards;
/// an overwrite replaces every other field in place. Measurements are kept as
/// the free-text strings they arrive as ("70kg", "175cm") — the service does
/// not interpret units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vital {
    pub id: i32,
    /// Patient identifiers this observation belongs to, in submission order
    pub identifier: Vec<String>,
    pub weight: String,
    pub height: String,
    pub general_examination: String,
}

/// The writable fields of a vital record: the payload for both create and
/// full overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVital {
    #[serde(default)]
    pub identifier: Vec<String>,
    pub weight: String,
    pub height: String,
    pub general_examination: String,
}

impl NewVital {
    /// Attaches a store-assigned id, producing the persisted form
    pub fn into_vital(self, id: i32) -> Vital {
        Vital {
            id,
            identifier: self.identifier,
            weight: self.weight,
            height: self.height,
            general_examination: self.general_examination,
        }
    }
}

impl From<Vital> for NewVital {
    fn from(vital: Vital) -> Self {
        Self {
            identifier: vital.identifier,
            weight: vital.weight,
            height: vital.height,
            general_examination: vital.general_examination,
        }
    }
}
