//! envtraits: runtime environment traits with group algebra and
//! minimal-cover reduction.
//!
//! The crate identifies traits of the running environment — operating
//! system or distribution, CPU architecture, CI system, shell, terminal,
//! coding agent — and organizes them into named groups supporting full set
//! algebra. Its core is [`reduce`], which compresses an arbitrary
//! collection of traits and groups into the smallest equivalent cover drawn
//! from the reference pool of known groups.
//!
//! ```
//! use envtraits::catalog::platforms::{BSD, BSD_WITHOUT_MACOS, MACOS};
//! use envtraits::{members, reduce, Reduction};
//!
//! let cover = reduce(members![&*BSD_WITHOUT_MACOS, &*MACOS], None).unwrap();
//! assert_eq!(cover, [Reduction::Group(BSD.clone())].into());
//! ```

pub mod catalog;
pub mod detect;
pub mod error;
pub mod group;
pub mod reduce;
pub mod registry;
pub mod traits;

pub use detect::{clear_detection_cache, set_detection_override};
pub use error::TraitError;
pub use group::{resolve_members, Group, Member};
pub use reduce::{reduce, Reduction};
pub use registry::{registry, Registry};
pub use traits::{Trait, TraitKind};
