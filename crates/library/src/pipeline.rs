use shelf_cache::{GenreCache, JsonFileStore};
use shelf_classify::{KeywordRules, NovelTask, SearchFirstClassifier, SearchProvider, TaskStatus};
use shelf_config::Config;
use shelf_genre::GenreMapping;
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::{Mutex, PoisonError};
use tracing::instrument;

use crate::collision::{TargetIndex, resolve_collision};
use crate::error::Result;
use crate::template::{DEFAULT_TEMPLATE, NameGenerator};

/// Extraction, classification and naming for one file at a time.
///
/// Names handed out by this pipeline are remembered, so two files in the
/// same run never get the same normalized name even before either is moved.
pub struct Pipeline {
    classifier: SearchFirstClassifier,
    names: NameGenerator,
    index: Box<dyn TargetIndex>,
    claimed: Mutex<HashSet<String>>,
}
impl Pipeline {
    pub fn new(classifier: SearchFirstClassifier, names: NameGenerator) -> Self {
        Self { classifier, names, index: Box::new(HashSet::<String>::new()), claimed: Mutex::new(HashSet::new()) }
    }

    /// Wires a pipeline from configuration: mapping, cache and keyword
    /// resources are loaded tolerantly; only a broken name template fails.
    #[instrument(skip_all)]
    pub fn from_config(config: &Config, search: impl SearchProvider + 'static) -> Result<Self> {
        let cache = GenreCache::open(JsonFileStore::new(&config.cache_path));
        let classifier = SearchFirstClassifier::new(cache, GenreMapping::load(&config.mapping_path))
            .with_search(search)
            .with_keywords(KeywordRules::load(&config.keywords_path))
            .with_priority(config.platform_priority.iter().copied())
            .with_timeout(config.search_timeout());
        let names = config.name_template.as_deref().unwrap_or(DEFAULT_TEMPLATE).parse()?;
        Ok(Self::new(classifier, names))
    }

    /// Checks names against existing files as well as this run's own.
    pub fn with_index(mut self, index: impl TargetIndex + 'static) -> Self {
        self.index = Box::new(index);
        self
    }

    pub fn classifier(&self) -> &SearchFirstClassifier {
        &self.classifier
    }

    #[instrument(skip(self))]
    pub fn process(&self, raw_name: &str) -> NovelTask {
        let task = self.classifier.classify(NovelTask::new(raw_name));
        self.finish(task)
    }

    /// Processes every name in order; one failing file never stops the rest.
    pub fn process_batch<I, S>(&self, raw_names: I) -> Vec<NovelTask>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tasks = raw_names.into_iter().map(NovelTask::new).collect();
        self.classifier.classify_batch(tasks).into_iter().map(|task| self.finish(task)).collect()
    }

    /// Flushes the classification cache.
    pub fn close(&self) {
        self.classifier.close();
    }

    fn finish(&self, mut task: NovelTask) -> NovelTask {
        if task.status != TaskStatus::Completed {
            return task;
        }
        match self.name(&task) {
            Ok(name) => {
                tracing::info!(raw_name = %task.raw_name, %name, genre = %task.genre, "normalized");
                task.normalized_name = Some(name);
            },
            Err(e) => {
                tracing::warn!(raw_name = %task.raw_name, error = %e.deref(), "could not build a name");
                task.fail(e.deref().to_string());
            },
        }
        task
    }

    fn name(&self, task: &NovelTask) -> Result<String> {
        let name = self.names.generate(&task.parse, task.genre)?;
        let mut claimed = self.claimed.lock().unwrap_or_else(PoisonError::into_inner);
        let unique = resolve_collision(&name, |candidate| self.index.contains(candidate) || claimed.contains(candidate))?;
        claimed.insert(unique.clone());
        Ok(unique)
    }
}
