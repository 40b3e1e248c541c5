//! # Identifier Utilities
//!
//! Format validation and unique-code generation for entity identifiers.
//!
//! ## Two Kinds of Identifier
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Identifier Utilities                               │
//! │                                                                         │
//! │  ┌──────────────────────────┐   ┌──────────────────────────────────┐   │
//! │  │  is_valid_id             │   │  generate_unique_code            │   │
//! │  │                          │   │                                  │   │
//! │  │  Checks caller-supplied  │   │  Mints local correlation codes  │   │
//! │  │  ids against the shared  │   │  "order-{millis}-{rand:06}"     │   │
//! │  │  [A-Za-z0-9_-]{3,64}     │   │  NOT globally unique (see below)│   │
//! │  │  pattern                 │   │                                  │   │
//! │  └──────────────────────────┘   └──────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Weakness (kept on purpose)
//! `generate_unique_code` combines wall-clock millis with a uniform
//! draw from `[0, 1_000_000)`. Two calls in the same millisecond can
//! collide. Consumers treat these codes as best-effort correlation
//! tags, not primary keys, so the weakness is documented rather than
//! fixed - fixing it would silently change both components' id shape.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Shared identifier pattern: ASCII letters, digits, underscore,
/// hyphen; length 3-64 inclusive.
static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,64}$").expect("Invalid id regex pattern"));

// =============================================================================
// Validation
// =============================================================================

/// Returns true iff `id` matches the shared identifier pattern.
///
/// Pure function, no side effects.
///
/// ## Example
/// ```rust
/// use ordo_core::ids::is_valid_id;
///
/// assert!(is_valid_id("abc"));
/// assert!(is_valid_id("a_b-9"));
/// assert!(!is_valid_id("ab"));          // too short
/// assert!(!is_valid_id("has space"));   // bad character
/// ```
pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

/// Adapter for optional ids coming off the wire: `None` is invalid.
pub fn is_valid_id_opt(id: Option<&str>) -> bool {
    id.is_some_and(is_valid_id)
}

// =============================================================================
// Code Generation
// =============================================================================

/// Upper bound (exclusive) of the random suffix; suffixes are
/// zero-padded to six digits.
const SUFFIX_BOUND: u32 = 1_000_000;

/// Capability for the two ambient reads code generation needs.
///
/// Production uses [`SystemEntropy`]; tests inject fixed values so the
/// generated codes are deterministic.
pub trait CodeEntropy {
    /// Wall-clock time as milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64;

    /// Uniform draw from `[0, 1_000_000)`.
    fn random_suffix(&self) -> u32;
}

/// The real clock and thread-local RNG.
///
/// Not cryptographically secure - these codes are correlation tags,
/// not secrets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl CodeEntropy for SystemEntropy {
    fn epoch_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    fn random_suffix(&self) -> u32 {
        rand::rng().random_range(0..SUFFIX_BOUND)
    }
}

/// Generates a unique-ish code for an entity type using an injected
/// entropy source.
///
/// Format: `"{entity_type}-{epoch_millis}-{random:06}"`.
pub fn generate_unique_code_with(entropy: &impl CodeEntropy, entity_type: &str) -> String {
    format!(
        "{}-{}-{:06}",
        entity_type,
        entropy.epoch_millis(),
        entropy.random_suffix()
    )
}

/// Generates a unique-ish code using the system clock and RNG.
///
/// ## Example
/// ```rust
/// use ordo_core::ids::generate_unique_code;
///
/// let code = generate_unique_code("order");
/// assert!(code.starts_with("order-"));
/// ```
pub fn generate_unique_code(entity_type: &str) -> String {
    generate_unique_code_with(&SystemEntropy, entity_type)
}

// =============================================================================
// Unit Tests
// =============================================================================
