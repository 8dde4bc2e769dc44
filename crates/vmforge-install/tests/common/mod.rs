//! Scripted fakes for the install engine ports.
//!
//! All fakes append to a shared `Timeline` so tests can assert on the
//! exact interleaving of samples, fetches, and sleeps.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use vmforge_core::ports::{
    CatalogError, ImageCatalogPort, InstallEventSinkPort, LoadMonitorPort, SleepReason,
    SleeperPort,
};
use vmforge_core::{ImageId, InstallEvent, LoadSample};
use vmforge_install::EngineDeps;

/// One observable step taken by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Search(String),
    Sample(u8),
    Fetch(ImageId),
    Sleep(SleepReason, Duration),
}

#[derive(Clone, Default)]
pub struct Timeline(Arc<Mutex<Vec<Step>>>);

impl Timeline {
    pub fn push(&self, step: Step) {
        self.0.lock().unwrap().push(step);
    }

    pub fn steps(&self) -> Vec<Step> {
        self.0.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> Vec<ImageId> {
        self.steps()
            .into_iter()
            .filter_map(|s| match s {
                Step::Fetch(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn sleeps(&self, reason: SleepReason) -> Vec<Duration> {
        self.steps()
            .into_iter()
            .filter_map(|s| match s {
                Step::Sleep(r, d) if r == reason => Some(d),
                _ => None,
            })
            .collect()
    }
}

/// Catalog returning scripted search results and per-image fetch outcomes.
///
/// Fetch scripts are consumed front to back; once exhausted, fetches succeed.
pub struct ScriptedCatalog {
    timeline: Timeline,
    searches: HashMap<String, Result<Vec<ImageId>, CatalogError>>,
    fetches: Mutex<HashMap<ImageId, VecDeque<bool>>>,
}

impl ScriptedCatalog {
    pub fn new(timeline: &Timeline) -> Self {
        Self {
            timeline: timeline.clone(),
            searches: HashMap::new(),
            fetches: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_images(mut self, prefix: &str, ids: &[&str]) -> Self {
        self.searches.insert(
            prefix.to_string(),
            Ok(ids.iter().map(|id| ImageId::new(*id)).collect()),
        );
        self
    }

    pub fn with_search_error(mut self, prefix: &str) -> Self {
        self.searches.insert(
            prefix.to_string(),
            Err(CatalogError::SearchFailed {
                prefix: prefix.to_string(),
                reason: "tool exited with status 2".to_string(),
            }),
        );
        self
    }

    /// Script fetch outcomes for `id`: `true` succeeds, `false` fails.
    pub fn with_fetches(self, id: &str, outcomes: &[bool]) -> Self {
        self.fetches
            .lock()
            .unwrap()
            .insert(ImageId::new(id), outcomes.iter().copied().collect());
        self
    }

    pub fn always_failing(self, id: &str) -> Self {
        self.with_fetches(id, &[false; 64])
    }
}

#[async_trait]
impl ImageCatalogPort for ScriptedCatalog {
    async fn search(&self, prefix: &str) -> Result<Vec<ImageId>, CatalogError> {
        self.timeline.push(Step::Search(prefix.to_string()));
        self.searches.get(prefix).cloned().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch(&self, id: &ImageId) -> Result<(), CatalogError> {
        self.timeline.push(Step::Fetch(id.clone()));
        let ok = self
            .fetches
            .lock()
            .unwrap()
            .get_mut(id)
            .and_then(VecDeque::pop_front)
            .unwrap_or(true);
        if ok {
            Ok(())
        } else {
            Err(CatalogError::FetchFailed {
                id: id.clone(),
                reason: "mirror returned 503".to_string(),
            })
        }
    }
}

/// Load monitor replaying scripted samples, then repeating `idle` forever.
pub struct ScriptedLoad {
    timeline: Timeline,
    samples: Mutex<VecDeque<u8>>,
    idle: u8,
}

impl ScriptedLoad {
    pub fn new(timeline: &Timeline, samples: &[u8]) -> Self {
        Self {
            timeline: timeline.clone(),
            samples: Mutex::new(samples.iter().copied().collect()),
            idle: 10,
        }
    }

    pub fn idle(timeline: &Timeline) -> Self {
        Self::new(timeline, &[])
    }

    /// Load that never drops below 100%.
    pub fn pegged(timeline: &Timeline) -> Self {
        Self {
            timeline: timeline.clone(),
            samples: Mutex::new(VecDeque::new()),
            idle: 100,
        }
    }
}

#[async_trait]
impl LoadMonitorPort for ScriptedLoad {
    async fn sample(&self) -> LoadSample {
        let value = self.samples.lock().unwrap().pop_front().unwrap_or(self.idle);
        self.timeline.push(Step::Sample(value));
        LoadSample::new(value)
    }
}

/// Sleeper that records instead of waiting.
///
/// Optionally cancels a token after a given number of sleeps, to exercise
/// cancellation between loop iterations.
pub struct RecordingSleeper {
    timeline: Timeline,
    cancel_after: Option<(usize, CancellationToken)>,
    count: Mutex<usize>,
}

impl RecordingSleeper {
    pub fn new(timeline: &Timeline) -> Self {
        Self {
            timeline: timeline.clone(),
            cancel_after: None,
            count: Mutex::new(0),
        }
    }

    pub fn cancelling_after(timeline: &Timeline, sleeps: usize, token: CancellationToken) -> Self {
        Self {
            timeline: timeline.clone(),
            cancel_after: Some((sleeps, token)),
            count: Mutex::new(0),
        }
    }
}

#[async_trait]
impl SleeperPort for RecordingSleeper {
    async fn sleep(&self, duration: Duration, reason: SleepReason) {
        self.timeline.push(Step::Sleep(reason, duration));
        let mut count = self.count.lock().unwrap();
        *count += 1;
        if let Some((limit, token)) = &self.cancel_after {
            if *count >= *limit {
                token.cancel();
            }
        }
    }
}

/// Event sink collecting every event.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<InstallEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<InstallEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.events().iter().map(InstallEvent::kind).collect()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.kinds().iter().filter(|k| **k == kind).count()
    }
}

impl InstallEventSinkPort for RecordingSink {
    fn emit(&self, event: &InstallEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Wire fakes into `EngineDeps`.
pub fn engine(
    catalog: ScriptedCatalog,
    load: ScriptedLoad,
    sleeper: RecordingSleeper,
    sink: &Arc<RecordingSink>,
) -> EngineDeps {
    EngineDeps::new(
        Arc::new(catalog),
        Arc::new(load),
        Arc::new(sleeper),
        sink.clone(),
    )
}
