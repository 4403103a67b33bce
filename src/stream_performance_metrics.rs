//! Metrics collection for lazy streams
//!
//! [`Metered`] wraps a source and counts every interaction that flows through
//! it: cursors opened, `has_next` queries, items handed out. Because the
//! counters only move when a consumer pulls, they double as a probe for
//! laziness.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::StreamResult;
use crate::stream::{Cursor, Source};
use crate::stream_configuration::MetricsConfig;

/// Metrics collected for a metered stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamMetrics {
    pub label: String,
    pub cursors_opened: u64,
    pub has_next_calls: u64,
    pub items_yielded: u64,
    pub exhaustions: u64,
}

impl StreamMetrics {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn record_cursor(&mut self) {
        self.cursors_opened += 1;
    }

    pub fn record_query(&mut self) {
        self.has_next_calls += 1;
    }

    pub fn record_item(&mut self) {
        self.items_yielded += 1;
    }

    pub fn record_exhaustion(&mut self) {
        self.exhaustions += 1;
    }

    /// Total number of times the wrapped source was touched.
    pub fn interactions(&self) -> u64 {
        self.cursors_opened + self.has_next_calls + self.items_yielded
    }

    pub fn to_json(&self) -> StreamResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Shared view of the metrics recorded by a [`Metered`] source and its cursors.
#[derive(Debug, Clone, Default)]
pub struct MetricsHandle {
    inner: Rc<RefCell<StreamMetrics>>,
}

impl MetricsHandle {
    fn new(label: &str) -> Self {
        Self { inner: Rc::new(RefCell::new(StreamMetrics::new(label))) }
    }

    /// Copy of the current counters
    pub fn snapshot(&self) -> StreamMetrics {
        self.inner.borrow().clone()
    }

    /// Zero the counters, keeping the label
    pub fn reset(&self) {
        let mut metrics = self.inner.borrow_mut();
        let label = std::mem::take(&mut metrics.label);
        *metrics = StreamMetrics::new(label);
    }

    fn record(&self, f: impl FnOnce(&mut StreamMetrics)) {
        f(&mut *self.inner.borrow_mut());
    }

    fn items_yielded(&self) -> u64 {
        self.inner.borrow().items_yielded
    }
}

/// Source produced by [`LazyStream::with_metrics`](crate::LazyStream::with_metrics).
pub struct Metered<S> {
    upstream: S,
    config: Rc<MetricsConfig>,
    metrics: MetricsHandle,
}

impl<S> Metered<S> {
    pub(crate) fn new(upstream: S, config: MetricsConfig) -> (Self, MetricsHandle) {
        let metrics = MetricsHandle::new(&config.label);
        let metered = Self {
            upstream,
            config: Rc::new(config),
            metrics: metrics.clone(),
        };
        (metered, metrics)
    }
}

impl<S: Clone> Clone for Metered<S> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            config: Rc::clone(&self.config),
            metrics: self.metrics.clone(),
        }
    }
}

impl<S: Source> Source for Metered<S> {
    type Item = S::Item;
    type Cursor = MeteredCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        if self.config.enabled {
            self.metrics.record(StreamMetrics::record_cursor);
            log::debug!("[{}] cursor opened", self.config.label);
        }
        MeteredCursor {
            upstream: self.upstream.cursor(),
            config: Rc::clone(&self.config),
            metrics: self.metrics.clone(),
            exhausted: false,
        }
    }
}

pub struct MeteredCursor<C> {
    upstream: C,
    config: Rc<MetricsConfig>,
    metrics: MetricsHandle,
    exhausted: bool,
}

impl<C: Cursor> Cursor for MeteredCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let more = self.upstream.has_next();
        if self.config.enabled {
            self.metrics.record(StreamMetrics::record_query);
            if !more && !self.exhausted {
                self.exhausted = true;
                self.metrics.record(StreamMetrics::record_exhaustion);
                log::debug!("[{}] cursor exhausted", self.config.label);
            }
        }
        more
    }

    fn next_item(&mut self) -> StreamResult<Self::Item> {
        let item = self.upstream.next_item()?;
        if self.config.enabled {
            self.metrics.record(StreamMetrics::record_item);
            if self.config.trace_items {
                log::trace!("[{}] yielded item #{}", self.config.label, self.metrics.items_yielded());
            }
        }
        Ok(item)
    }
}
