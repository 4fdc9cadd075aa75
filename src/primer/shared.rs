// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! A primer shared between threads, and the process-wide fallback primer.
//!
//! Some structures (index tables, for instance) are written without a primer
//! of their own. Tags for those come from one static primer that lives for
//! the rest of the process. It is created on first use and every access goes
//! through its lock.

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::OnceLock;
use std::sync::PoisonError;

use crate::dict::Dictionary;
use crate::dict::TypeRegistry;
use crate::error::PrimerError;
use crate::label::Label;
use crate::primer::table::Primer;
use crate::primer::table::Tag;

/// A lazily created primer behind a mutex.
#[derive(Debug, Default)]
pub struct SharedPrimer {
    cell: OnceLock<Mutex<Primer>>,
}

static STATIC_PRIMER: SharedPrimer = SharedPrimer::new();

impl SharedPrimer {
    /// Create a shared primer. The table itself is built on first access.
    pub const fn new() -> SharedPrimer {
        return SharedPrimer { cell: OnceLock::new() };
    }

    /// Check if the table has been built yet.
    pub fn is_initialized(&self) -> bool {
        return self.cell.get().is_some();
    }

    fn lock<D: Dictionary + ?Sized>(&self, dict: &D) -> MutexGuard<'_, Primer> {
        let mutex = self.cell.get_or_init(|| Mutex::new(dict.make_primer()));
        // Primer mutations are paired, so a panicking holder cannot leave
        // the table half updated.
        return mutex.lock().unwrap_or_else(PoisonError::into_inner);
    }

    /// Resolve `label` against the shared table. See `Primer::lookup`.
    ///
    /// `dict` builds the table if this is the first access.
    pub fn lookup<D: Dictionary + ?Sized>(
        &self,
        dict: &D,
        label: &Label,
        suggested: Tag,
    ) -> Result<Tag, PrimerError> {
        return self.lock(dict).lookup(dict, label, suggested);
    }

    /// Run `f` with exclusive access to the shared table.
    pub fn with<D: Dictionary + ?Sized, R>(&self, dict: &D, f: impl FnOnce(&mut Primer) -> R) -> R {
        let mut primer = self.lock(dict);
        return f(&mut primer);
    }
}

/// The process-wide fallback primer.
pub fn static_primer() -> &'static SharedPrimer {
    return &STATIC_PRIMER;
}

/// Determine the tag for `label` when no primer is available.
///
/// Uses the process-wide primer and the builtin dictionary.
pub fn static_lookup(label: &Label, suggested: Tag) -> Result<Tag, PrimerError> {
    return STATIC_PRIMER.lookup(TypeRegistry::global(), label, suggested);
}
