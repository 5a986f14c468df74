//! Room-type abbreviation registry.
//!
//! Maps short uppercase codes to the canonical room-type names used as
//! column keys in the inventory table. Built once at startup and passed by
//! reference into the components that need it; never mutated afterwards.

use std::collections::HashMap;

/// Built-in abbreviation table.
const BUILTIN_ROOMS: &[(&str, &str)] = &[
    ("BFS", "Beach Front Private Suite Room"),
    ("DLP", "Deluxe Pool Access"),
    ("DLX", "Deluxe Room"),
    ("DLS", "Deluxe Suite Room"),
    ("FPK", "Family Premiere Room"),
    ("PRE", "Premiere Room"),
    ("PKL", "Premiere Room Lagoon Access"),
    ("PRS", "Premiere Suite Room"),
    ("AVR", "The Anvaya Residence"),
    ("AVS", "The Anvaya Suite No Pool"),
    ("ASW", "The Anvaya Suite Whirpool"),
    ("ASP", "The Anvaya Suite With Pool"),
    ("AVP", "The Anvaya Villa"),
    ("DLX+PRE", "DLX+Pre"),
];

/// Immutable mapping from uppercase room code to canonical room-type name.
#[derive(Debug, Clone)]
pub struct RoomRegistry {
    rooms: HashMap<String, String>,
}

impl RoomRegistry {
    /// Create a registry holding only the built-in table.
    pub fn builtin() -> Self {
        Self::with_entries(std::iter::empty::<(String, String)>())
    }

    /// Create a registry from the built-in table plus extra entries.
    ///
    /// Extra keys are uppercased and override built-ins on collision.
    pub fn with_entries<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut rooms: HashMap<String, String> = BUILTIN_ROOMS
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        for (code, name) in extra {
            rooms.insert(code.as_ref().to_uppercase(), name.into());
        }
        Self { rooms }
    }

    /// Look up the canonical room-type name for an uppercase code.
    ///
    /// Callers are expected to uppercase the code first (the query parser
    /// already does). Unknown codes return `None`.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.rooms.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
