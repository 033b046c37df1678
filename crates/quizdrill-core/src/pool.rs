//! Question pool: corpus enumeration and random selection.
//!
//! The corpus is a flat directory, one question file per entry, no naming
//! convention. The pool re-enumerates the directory on every pick, so
//! corpus edits are visible without a restart. Selection is uniform over
//! the raw file list — no seen-set, repeats are possible.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use rand::seq::IndexedRandom;

use crate::parser;
use crate::record::QuestionRecord;

/// A directory of question files.
#[derive(Debug, Clone)]
pub struct QuestionPool {
    corpus_dir: PathBuf,
}

impl QuestionPool {
    pub fn new(corpus_dir: impl Into<PathBuf>) -> Self {
        Self {
            corpus_dir: corpus_dir.into(),
        }
    }

    pub fn corpus_dir(&self) -> &Path {
        &self.corpus_dir
    }

    /// Pick one question uniformly at random.
    ///
    /// Returns `None` when the directory is missing or empty, or when the
    /// chosen file fails to parse — callers treat every `None` uniformly as
    /// "no question available".
    pub fn pick_random(&self) -> Option<QuestionRecord> {
        let files = self.eligible_files();
        let path = files.choose(&mut rand::rng())?;

        match parser::parse_record_file(path) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("skipping {}: {e:#}", path.display());
                None
            }
        }
    }

    /// Regular, non-hidden files in the corpus directory.
    fn eligible_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(&self.corpus_dir) else {
            return Vec::new();
        };

        entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                !path
                    .file_name()
                    .and_then(OsStr::to_str)
                    .is_some_and(|name| name.starts_with('.'))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::KOI8_R;

    fn write_koi8r(dir: &Path, name: &str, text: &str) {
        let (encoded, _, _) = KOI8_R.encode(text);
        std::fs::write(dir.join(name), &encoded).unwrap();
    }

    #[test]
    fn missing_directory_yields_none() {
        let pool = QuestionPool::new("/no/such/corpus");
        assert!(pool.pick_random().is_none());
    }

    #[test]
    fn empty_directory_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let pool = QuestionPool::new(dir.path());
        assert!(pool.pick_random().is_none());
    }

    #[test]
    fn single_file_is_always_picked() {
        let dir = tempfile::tempdir().unwrap();
        write_koi8r(dir.path(), "q1.txt", "Вопрос: 2+2?\nОтвет:\nЧетыре\nЗачет:\n4\n");

        let pool = QuestionPool::new(dir.path());
        let record = pool.pick_random().unwrap();
        assert_eq!(record.question_text, "2+2?");
        assert_eq!(record.accepted_alternates, vec!["4"]);
    }

    #[test]
    fn hidden_files_and_directories_are_excluded() {
        let dir = tempfile::tempdir().unwrap();
        write_koi8r(dir.path(), ".hidden", "Вопрос: скрытый?\n");
        std::fs::create_dir(dir.path().join("subdir")).unwrap();

        let pool = QuestionPool::new(dir.path());
        assert!(pool.pick_random().is_none());
    }

    #[test]
    fn unparsable_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        write_koi8r(dir.path(), "broken.txt", "Ответ:\nбез вопроса\n");

        let pool = QuestionPool::new(dir.path());
        assert!(pool.pick_random().is_none());
    }
}
