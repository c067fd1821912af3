pub mod debounce;
pub mod lookup;
pub mod session;
pub mod shortcut;

use std::time::Duration;

pub use debounce::{Debouncer, PlatformTimer, Timer};
pub use session::{Lookup, LookupTicket, SearchMode, SearchSession, POPULAR_LIMIT};
pub use shortcut::KeyChord;

/// Quiet period after the last keystroke before the lookup runs.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
