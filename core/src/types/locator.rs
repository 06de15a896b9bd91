use nutype::nutype;
use serde::{Deserialize, Serialize};

pub const MAX_LOCATOR_LENGTH: usize = 2048;

/// Opaque reference to a recorded clip, resolvable through the session's
/// [`ClipStore`](crate::clips::ClipStore). Locators do not survive the
/// session that issued them, even though gallery entries holding them do.
#[nutype(
    new_unchecked,
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_LOCATOR_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ClipLocator(String);

/// Produced when recording finalizes; consumed by the download trigger, the
/// gallery and the share code generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRef {
    pub locator: ClipLocator,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

#[cfg(test)]
mod tests;
