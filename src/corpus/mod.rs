/*! Corpus discovery and loading.

A Leipzig corpus is distributed as three companion tab-separated files:
`*-sentences.txt`, `*-sources.txt` and `*-inv_so.txt`.
[locate] finds the sentences file for a declared corpus name, tolerating
renamed directories; [load] joins the three tables into one row per
sentence, degrading to sentences-only when metadata files are missing.
!*/
mod locate;
mod load;
mod record;

pub use locate::locate;
pub use load::load;
pub use record::{CleanRow, SentenceRecord};
