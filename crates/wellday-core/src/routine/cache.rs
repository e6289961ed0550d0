use super::builder::{Timeline, TimelineParams};

/// Remembers the most recent timeline and the inputs it was built from.
///
/// The builder is pure, so a hit can be served without recomputation.
#[derive(Debug, Default, Clone)]
pub struct TimelineCache {
    entry: Option<(TimelineParams, Timeline)>,
    hits: u64,
    misses: u64,
}

impl TimelineCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(&mut self, params: TimelineParams) -> &Timeline {
        let hit = matches!(&self.entry, Some((cached, _)) if *cached == params);
        if hit {
            self.hits += 1;
            tracing::trace!(hits = self.hits, "timeline cache hit");
            &self.entry.as_ref().expect("cache hit implies entry").1
        } else {
            self.misses += 1;
            &self.entry.insert((params, params.build())).1
        }
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
