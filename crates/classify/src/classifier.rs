use shelf_cache::GenreCache;
use shelf_genre::models::{ClassificationRecord, Confidence, Genre, Platform, Source};
use shelf_genre::{GenreMapping, SimilarityChecker};
use std::any::Any;
use std::collections::HashMap;
use std::ops::Deref;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing::instrument;

use crate::keywords::{KeywordMatcher, KeywordRules};
use crate::search::{Candidate, NoSearch, SearchProvider};
use crate::task::{NovelTask, TaskStatus};

pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
enum State {
    CacheCheck,
    TagCheck,
    Search,
    Arbitrate(Vec<Candidate>),
    KeywordFallback,
    Done(Outcome),
}
impl State {
    fn name(&self) -> &'static str {
        match self {
            State::CacheCheck => "cache_check",
            State::TagCheck => "tag_check",
            State::Search => "search",
            State::Arbitrate(_) => "arbitrate",
            State::KeywordFallback => "keyword_fallback",
            State::Done(_) => "done",
        }
    }
}

#[derive(Debug)]
struct Outcome {
    record: ClassificationRecord,
    /// Source reported on the task; differs from the record's on a cache hit.
    source: Source,
    /// Fresh outcomes are written to the cache.
    fresh: bool,
}
impl Outcome {
    fn cached(record: ClassificationRecord) -> Self {
        Self { record, source: Source::Cache, fresh: false }
    }

    fn fresh(genre: Genre, confidence: Confidence, source: Source) -> Self {
        Self { record: ClassificationRecord::new(genre, confidence, source), source, fresh: true }
    }

    fn unclassified() -> Self {
        Self { record: ClassificationRecord::unclassified(), source: Source::None, fresh: false }
    }
}

/// Assigns a genre to a title: cache, then a bracketed genre tag, then
/// platform search with priority arbitration, then local keywords.
///
/// Never fails. The worst outcome is `미분류` with low confidence.
pub struct SearchFirstClassifier {
    cache: GenreCache,
    mapping: GenreMapping,
    similarity: SimilarityChecker,
    search: Arc<dyn SearchProvider>,
    keywords: Box<dyn KeywordMatcher>,
    priority: Vec<Platform>,
    timeout: Duration,
}
impl SearchFirstClassifier {
    /// A classifier with no search provider, the built-in keyword rules,
    /// the default platform priority and a 10 second search timeout.
    pub fn new(cache: GenreCache, mapping: GenreMapping) -> Self {
        Self {
            cache,
            mapping,
            similarity: SimilarityChecker::default(),
            search: Arc::new(NoSearch),
            keywords: Box::new(KeywordRules::default()),
            priority: Platform::DEFAULT_PRIORITY.to_vec(),
            timeout: DEFAULT_SEARCH_TIMEOUT,
        }
    }

    pub fn with_search(mut self, provider: impl SearchProvider + 'static) -> Self {
        self.search = Arc::new(provider);
        self
    }

    pub fn with_keywords(mut self, matcher: impl KeywordMatcher + 'static) -> Self {
        self.keywords = Box::new(matcher);
        self
    }

    pub fn with_similarity(mut self, similarity: SimilarityChecker) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn with_priority(mut self, priority: impl IntoIterator<Item = Platform>) -> Self {
        self.priority = priority.into_iter().collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn cache(&self) -> &GenreCache {
        &self.cache
    }

    pub fn mapping(&self) -> &GenreMapping {
        &self.mapping
    }

    /// Classifies one task, writing `genre`, `confidence` and `source` onto
    /// it. Tasks that already failed or were skipped are returned untouched.
    #[instrument(skip_all, fields(raw_name = %task.raw_name))]
    pub fn classify(&self, mut task: NovelTask) -> NovelTask {
        if !task.is_open() {
            return task;
        }
        task.status = TaskStatus::Processing;
        let title = task.classifying_title().to_string();
        let outcome = self.run(&title, task.author(), task.parse.tagged_genre.as_deref());
        let (record, source) = if outcome.fresh {
            let stored = self.cache.upsert(&title, outcome.record.clone());
            // Another worker stored this title first; its record is the one we report.
            let source = if stored == outcome.record { outcome.source } else { Source::Cache };
            (stored, source)
        } else {
            (outcome.record, outcome.source)
        };
        task.apply(&record, source);
        task.status = TaskStatus::Completed;
        tracing::debug!(
            %title,
            genre = %task.genre,
            confidence = ?task.confidence,
            source = %task.source,
            "classified"
        );
        task
    }

    /// Classifies every task in order. A panic while classifying one task
    /// marks only that task failed.
    #[instrument(skip_all, fields(tasks = tasks.len()))]
    pub fn classify_batch(&self, tasks: Vec<NovelTask>) -> Vec<NovelTask> {
        tasks
            .into_iter()
            .map(|task| {
                let mut fallback = task.clone();
                match panic::catch_unwind(AssertUnwindSafe(|| self.classify(task))) {
                    Ok(classified) => classified,
                    Err(payload) => {
                        let message = panic_message(&*payload);
                        tracing::error!(raw_name = %fallback.raw_name, %message, "classification failed");
                        fallback.fail(message);
                        fallback
                    },
                }
            })
            .collect()
    }

    /// Flushes the cache.
    pub fn close(&self) {
        self.cache.save();
    }

    fn run(&self, title: &str, author: Option<&str>, tagged_genre: Option<&str>) -> Outcome {
        if title.is_empty() {
            return Outcome::unclassified();
        }
        let mut state = State::CacheCheck;
        loop {
            tracing::trace!(state = state.name(), "classifier state");
            state = match state {
                State::CacheCheck => match self.cache.get(title) {
                    Some(record) => State::Done(Outcome::cached(record)),
                    None => State::TagCheck,
                },
                State::TagCheck => match tagged_genre.and_then(|tag| self.tag_genre(tag)) {
                    Some(genre) => State::Done(Outcome::fresh(genre, Confidence::High, Source::Tag)),
                    None => State::Search,
                },
                State::Search => {
                    let query = match author {
                        Some(author) => format!("{title} {author}"),
                        None => title.to_string(),
                    };
                    match self.search(&query) {
                        candidates if candidates.is_empty() => State::KeywordFallback,
                        candidates => State::Arbitrate(candidates),
                    }
                },
                State::Arbitrate(candidates) => match self.arbitrate(title, author, &candidates) {
                    Some((genre, platform)) => {
                        State::Done(Outcome::fresh(genre, Confidence::High, Source::Platform(platform)))
                    },
                    None => State::KeywordFallback,
                },
                State::KeywordFallback => {
                    let genre = self.keywords.best_match(title).map(|raw| self.mapping.map_genre(&raw));
                    match genre.filter(Genre::is_classified) {
                        Some(genre) => State::Done(Outcome::fresh(genre, Confidence::Medium, Source::Keyword)),
                        None => State::Done(Outcome::unclassified()),
                    }
                },
                State::Done(outcome) => break outcome,
            };
        }
    }

    fn tag_genre(&self, tag: &str) -> Option<Genre> {
        let mapped = self.mapping.map_genre(tag);
        let genre = if mapped.is_classified() { mapped } else { tag.parse::<Genre>().ok()? };
        (genre.is_classified() && self.mapping.is_whitelisted(genre)).then_some(genre)
    }

    /// Runs the search on a helper thread, bounded by the timeout. Errors,
    /// timeouts and provider panics all come back as "nothing found".
    #[instrument(level = "trace", skip(self))]
    fn search(&self, query: &str) -> Vec<Candidate> {
        let (tx, rx) = mpsc::channel();
        let provider = Arc::clone(&self.search);
        let owned = query.to_string();
        let spawned = thread::Builder::new().name("shelf-search".to_string()).spawn(move || {
            // The receiver is gone once the classifier stopped waiting.
            let _ = tx.send(provider.search(&owned));
        });
        if let Err(e) = spawned {
            tracing::warn!(error = %e, "could not start search");
            return Vec::new();
        }
        match rx.recv_timeout(self.timeout) {
            Ok(Ok(candidates)) => {
                tracing::trace!(candidates = candidates.len(), "search answered");
                candidates
            },
            Ok(Err(e)) => {
                tracing::warn!(error = %e.deref(), "search failed");
                Vec::new()
            },
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(timeout = ?self.timeout, "search timed out");
                Vec::new()
            },
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("search provider stopped without answering");
                Vec::new()
            },
        }
    }

    /// Picks the winning genre from the candidates, platform by platform in
    /// priority order. Within a platform the most specific accepted genre wins;
    /// equal specificity keeps the first discovered.
    fn arbitrate(&self, title: &str, author: Option<&str>, candidates: &[Candidate]) -> Option<(Genre, Platform)> {
        let mut unlisted: HashMap<Platform, usize> = HashMap::new();
        for candidate in candidates {
            if !self.priority.contains(&candidate.platform) {
                let next = unlisted.len();
                unlisted.entry(candidate.platform).or_insert(next);
            }
        }
        let rank = |platform: &Platform| match self.priority.iter().position(|p| p == platform) {
            Some(position) => position,
            None => self.priority.len() + unlisted.get(platform).copied().unwrap_or_default(),
        };
        let mut ordered: Vec<&Candidate> = candidates.iter().collect();
        ordered.sort_by_key(|candidate| rank(&candidate.platform));

        for group in ordered.chunk_by(|a, b| a.platform == b.platform) {
            let mut best: Option<Genre> = None;
            for candidate in group {
                let genre = self.mapping.map_genre(&candidate.genre);
                if !genre.is_classified() {
                    tracing::trace!(platform = %candidate.platform, raw_genre = %candidate.genre, "unmapped genre");
                    continue;
                }
                let author_match = authors_match(author, candidate.author.as_deref());
                let check = self.similarity.check_with_details(title, &candidate.title, author_match);
                tracing::trace!(
                    platform = %candidate.platform,
                    reported = %candidate.title,
                    similarity = check.similarity,
                    threshold = check.threshold,
                    accepted = check.accepted,
                    "similarity gate"
                );
                if check.accepted && best.is_none_or(|current| genre.specificity() > current.specificity()) {
                    best = Some(genre);
                }
            }
            if let (Some(genre), Some(first)) = (best, group.first()) {
                return Some((genre, first.platform));
            }
        }
        None
    }
}

/// Authors match when both are known and equal ignoring case and whitespace.
fn authors_match(input: Option<&str>, reported: Option<&str>) -> bool {
    let normalize = |s: &str| s.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect::<String>();
    match (input.map(normalize), reported.map(normalize)) {
        (Some(a), Some(b)) => !a.is_empty() && a == b,
        _ => false,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "classification panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, Result};
    use rstest::rstest;
    use shelf_cache::MemoryStore;
    use shelf_extract::models::TitleParseResult;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    #[derive(Default)]
    struct Scripted {
        candidates: Vec<Candidate>,
        queries: Arc<Mutex<Vec<String>>>,
    }
    impl Scripted {
        fn new(candidates: Vec<Candidate>) -> Self {
            Self { candidates, ..Default::default() }
        }
    }
    impl SearchProvider for Scripted {
        fn search(&self, query: &str) -> Result<Vec<Candidate>> {
            self.queries.lock().unwrap().push(query.to_string());
            Ok(self.candidates.clone())
        }
    }

    /// Panics when asked about one particular title.
    struct Explosive(&'static str);
    impl KeywordMatcher for Explosive {
        fn best_match(&self, title: &str) -> Option<String> {
            if title == self.0 {
                panic!("keyword matcher exploded on {title}");
            }
            None
        }
    }

    fn classifier() -> SearchFirstClassifier {
        SearchFirstClassifier::new(GenreCache::in_memory(), GenreMapping::default())
    }

    fn task(title: &str, author: Option<&str>) -> NovelTask {
        let parse = TitleParseResult {
            title: title.to_string(),
            author: author.map(str::to_string),
            ..Default::default()
        };
        NovelTask::from_parse(format!("{title}.txt"), parse)
    }

    #[test]
    fn closer_candidate_wins_over_higher_priority_dissimilar_one() {
        // 0.60 similar on the most trusted platform, 0.90 similar on the next.
        let classifier = classifier().with_search(Scripted::new(vec![
            Candidate::new(Platform::Ridibooks, "abcdefwxyz", "무협"),
            Candidate::new(Platform::Munpia, "abcdefghix", "현대판타지"),
        ]));
        let task = classifier.classify(task("abcdefghij", None));
        assert_eq!(task.genre, Genre::ModernFantasy);
        assert_eq!(task.confidence, Confidence::High);
        assert_eq!(task.source, Source::Platform(Platform::Munpia));
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[rstest]
    #[case::default_priority(Platform::DEFAULT_PRIORITY.to_vec(), Genre::RomanceFantasy, Platform::Ridibooks)]
    #[case::custom_priority(vec![Platform::Munpia], Genre::Wuxia, Platform::Munpia)]
    #[case::unlisted_rank_last(vec![Platform::Joara], Genre::Wuxia, Platform::Munpia)]
    fn priority_decides_between_accepted_platforms(
        #[case] priority: Vec<Platform>,
        #[case] genre: Genre,
        #[case] platform: Platform,
    ) {
        let classifier = classifier().with_priority(priority).with_search(Scripted::new(vec![
            Candidate::new(Platform::Munpia, "화산귀환", "무협"),
            Candidate::new(Platform::Ridibooks, "화산귀환", "로맨스 판타지"),
        ]));
        let task = classifier.classify(task("화산귀환", None));
        assert_eq!((task.genre, task.source), (genre, Source::Platform(platform)));
    }

    #[test]
    fn narrower_genre_wins_within_a_platform() {
        let classifier = classifier().with_search(Scripted::new(vec![
            Candidate::new(Platform::Munpia, "나 혼자만 레벨업", "판타지"),
            Candidate::new(Platform::Munpia, "나 혼자만 레벨업", "현대판타지"),
            Candidate::new(Platform::Munpia, "나 혼자만 레벨업", "무협"),
        ]));
        // 현판 and 무협 are equally specific; the first discovered stays.
        assert_eq!(classifier.classify(task("나 혼자만 레벨업", None)).genre, Genre::ModernFantasy);
    }

    #[test]
    fn unmapped_candidate_does_not_win() {
        let classifier = classifier().with_search(Scripted::new(vec![
            Candidate::new(Platform::Ridibooks, "화산귀환", "요리"),
            Candidate::new(Platform::Munpia, "화산귀환", "무협"),
        ]));
        let task = classifier.classify(task("화산귀환", None));
        assert_eq!((task.genre, task.source), (Genre::Wuxia, Source::Platform(Platform::Munpia)));
    }

    #[test]
    fn author_match_relaxes_gating() {
        // Exactly 0.75 similar.
        let candidates = vec![Candidate::new(Platform::Joara, "abcdefghijklmnovwxyz", "판타지").with_author("Kim Dokja ")];
        let matched = classifier()
            .with_search(Scripted::new(candidates.clone()))
            .classify(task("abcdefghijklmnopqrst", Some("kimdokja")));
        assert_eq!(matched.genre, Genre::Fantasy);

        let unmatched = classifier()
            .with_search(Scripted::new(candidates))
            .classify(task("abcdefghijklmnopqrst", Some("someone else")));
        assert_eq!(unmatched.genre, Genre::Unclassified);
    }

    #[test]
    fn query_includes_author() {
        let provider = Scripted::default();
        let queries = Arc::clone(&provider.queries);
        let classifier = classifier().with_search(provider);
        classifier.classify(task("화산귀환", Some("비가")));
        classifier.classify(task("전지적 독자 시점", None));
        assert_eq!(*queries.lock().unwrap(), vec!["화산귀환 비가".to_string(), "전지적 독자 시점".to_string()]);
    }

    #[test]
    fn rejected_candidates_fall_back_to_keywords() {
        let classifier = classifier().with_search(Scripted::new(vec![Candidate::new(
            Platform::Ridibooks,
            "전혀 다른 작품",
            "로맨스 판타지",
        )]));
        let task = classifier.classify(task("화산귀환", None));
        assert_eq!(task.genre, Genre::Wuxia);
        assert_eq!(task.confidence, Confidence::Medium);
        assert_eq!(task.source, Source::Keyword);
    }

    #[test]
    fn nothing_found_is_unclassified_and_not_cached() {
        let classifier = classifier();
        let task = classifier.classify(task("평범한 일상", None));
        assert_eq!(task.genre, Genre::Unclassified);
        assert_eq!(task.confidence, Confidence::Low);
        assert_eq!(task.source, Source::None);
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(classifier.cache().is_empty());
    }

    #[test]
    fn empty_title_is_unclassified() {
        let task = classifier().classify(NovelTask::new(""));
        assert_eq!(task.genre, Genre::Unclassified);
        assert_eq!(task.confidence, Confidence::Low);
    }

    #[test]
    fn genre_tag_short_circuits_search() {
        let provider = Scripted::new(vec![Candidate::new(Platform::Ridibooks, "검의 길", "무협")]);
        let queries = Arc::clone(&provider.queries);
        let classifier = classifier().with_search(provider);
        let task = classifier.classify(NovelTask::new("[선협] 검의 길 1-300.txt"));
        assert_eq!(task.genre, Genre::Xianxia);
        assert_eq!(task.source, Source::Tag);
        assert!(queries.lock().unwrap().is_empty());
        assert_eq!(classifier.cache().get("검의 길").map(|r| r.genre), Some(Genre::Xianxia));
    }

    #[test]
    fn fresh_result_is_cached_and_served_from_cache() {
        let provider = Scripted::new(vec![Candidate::new(Platform::Munpia, "화산귀환", "무협")]);
        let queries = Arc::clone(&provider.queries);
        let classifier = classifier().with_search(provider);

        let first = classifier.classify(task("화산귀환", None));
        assert_eq!(first.source, Source::Platform(Platform::Munpia));
        let second = classifier.classify(task("  화산귀환 ", None));
        assert_eq!(second.source, Source::Cache);
        assert_eq!(second.genre, Genre::Wuxia);
        assert_eq!(second.confidence, Confidence::High);
        assert_eq!(queries.lock().unwrap().len(), 1);
        let cached = classifier.cache().get("화산귀환").unwrap();
        assert_eq!(cached.source, Source::Platform(Platform::Munpia));
    }

    #[test]
    fn losing_a_cache_race_reports_the_stored_record() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let provider = move |_: &str| -> Result<Vec<Candidate>> {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                thread::sleep(Duration::from_millis(300));
                return Ok(vec![Candidate::new(Platform::Munpia, "화산귀환", "무협")]);
            }
            Ok(vec![Candidate::new(Platform::Ridibooks, "화산귀환", "로맨스 판타지")])
        };
        let classifier = Arc::new(classifier().with_search(provider));

        let slow = thread::spawn({
            let classifier = Arc::clone(&classifier);
            move || classifier.classify(task("화산귀환", None))
        });
        thread::sleep(Duration::from_millis(50));
        let fast = thread::spawn({
            let classifier = Arc::clone(&classifier);
            move || classifier.classify(task("화산귀환", None))
        });
        let fast = fast.join().unwrap();
        let slow = slow.join().unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let stored = classifier.cache().get("화산귀환").unwrap();
        assert_eq!(stored.source, Source::Platform(Platform::Ridibooks));
        assert_eq!((fast.genre, fast.source), (Genre::RomanceFantasy, Source::Platform(Platform::Ridibooks)));
        assert_eq!((slow.genre, slow.source), (Genre::RomanceFantasy, Source::Cache));
        assert_eq!(slow.confidence, stored.confidence);
    }

    #[test]
    fn slow_search_times_out_to_keywords() {
        let slow = |_: &str| -> Result<Vec<Candidate>> {
            thread::sleep(Duration::from_millis(500));
            Ok(vec![Candidate::new(Platform::Ridibooks, "화산귀환", "로맨스 판타지")])
        };
        let classifier = classifier().with_search(slow).with_timeout(Duration::from_millis(50));
        let started = Instant::now();
        let task = classifier.classify(task("화산귀환", None));
        assert!(started.elapsed() < Duration::from_millis(400));
        assert_eq!((task.genre, task.source), (Genre::Wuxia, Source::Keyword));
    }

    #[test]
    fn failing_search_degrades() {
        let failing = |_: &str| -> Result<Vec<Candidate>> { exn::bail!(ErrorKind::SearchUnavailable) };
        let task = classifier().with_search(failing).classify(task("화산귀환", None));
        assert_eq!((task.genre, task.source), (Genre::Wuxia, Source::Keyword));
    }

    #[test]
    fn panicking_search_degrades() {
        let panicking = |_: &str| -> Result<Vec<Candidate>> { panic!("crawler crashed") };
        let task = classifier().with_search(panicking).classify(task("화산귀환", None));
        assert_eq!((task.genre, task.source), (Genre::Wuxia, Source::Keyword));
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn closed_tasks_are_left_alone() {
        let mut skipped = task("화산귀환", None);
        skipped.status = TaskStatus::Skipped;
        let task = classifier().classify(skipped.clone());
        assert_eq!(task, skipped);
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let classifier = classifier();
        let titles = ["화산귀환", "평범한 일상", "S급 헌터의 게이트", "악녀는 황제를 길들인다"];
        let tasks = classifier.classify_batch(titles.iter().map(|t| task(t, None)).collect());
        assert_eq!(tasks.len(), titles.len());
        let classified: Vec<&str> = tasks.iter().map(|t| t.parse.title.as_str()).collect();
        assert_eq!(classified, titles);
        let genres: Vec<Genre> = tasks.iter().map(|t| t.genre).collect();
        assert_eq!(genres, vec![Genre::Wuxia, Genre::Unclassified, Genre::ModernFantasy, Genre::RomanceFantasy]);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn batch_isolates_a_faulting_task(#[case] faulty: usize) {
        let titles = ["하나", "둘", "셋"];
        let batch = || titles.iter().map(|t| task(t, None)).collect::<Vec<_>>();
        let healthy = classifier().classify_batch(batch());
        let faulted = classifier().with_keywords(Explosive(titles[faulty])).classify_batch(batch());

        assert_eq!(faulted.len(), titles.len());
        for (i, (before, after)) in healthy.iter().zip(&faulted).enumerate() {
            assert_eq!(after.parse.title, titles[i]);
            if i == faulty {
                assert_eq!(after.status, TaskStatus::Failed);
                assert!(after.error.as_deref().is_some_and(|e| e.contains("exploded")));
            } else {
                assert_eq!(after.status, before.status);
                assert_eq!(after.error, None);
            }
        }
    }

    #[test]
    fn close_flushes_the_cache() {
        let store = Arc::new(MemoryStore::default());
        let classifier = SearchFirstClassifier::new(GenreCache::open(Arc::clone(&store)), GenreMapping::default());
        classifier.classify(task("화산귀환", None));
        assert_eq!(store.writes(), 0);
        classifier.close();
        assert_eq!(store.writes(), 1);
        assert!(store.entries().contains_key("화산귀환"));
    }

    #[rstest]
    #[case(Some("Kim Dokja"), Some("kimdokja"), true)]
    #[case(Some("비가"), Some(" 비 가 "), true)]
    #[case(Some("비가"), None, false)]
    #[case(None, None, false)]
    #[case(Some(" "), Some(""), false)]
    fn test_authors_match(#[case] a: Option<&str>, #[case] b: Option<&str>, #[case] expected: bool) {
        assert_eq!(authors_match(a, b), expected);
    }
}
