//! Writes the subgroup table through the `log` facade.
//!
//! The crate never installs a logger itself; the host decides where records go.

use log::Level;

use crate::subgroup::POWER_SUBGROUPS;


/// Emits one record per table entry, `NAME = {xxxxxxxx-...}`, followed by a
/// summary record, all at `level`.
pub fn log_subgroups(level: Level) {
    for entry in POWER_SUBGROUPS.iter() {
        log!(level, "{} = {{{}}}", entry.name, entry.guid);
    }
    log!(level, "{} power setting subgroups", POWER_SUBGROUPS.len());
}
