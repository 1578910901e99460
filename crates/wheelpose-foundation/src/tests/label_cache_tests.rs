use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use crate::text::MonospacedLabelMeasurer;

/// Measurer that counts how often it is asked.
#[derive(Default)]
struct CountingMeasurer {
    calls: AtomicUsize,
}

impl CountingMeasurer {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LabelMeasurer for CountingMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> LabelLayout {
        self.calls.fetch_add(1, Ordering::SeqCst);
        MonospacedLabelMeasurer.measure(text, style)
    }
}

fn style(size: f32) -> TextStyle {
    TextStyle::default().with_font_size(size)
}

#[test]
fn repeated_measure_hits_cache() {
    let cache = LabelCache::new();
    let measurer = CountingMeasurer::default();
    let first = cache.measure("12", &style(20.0), &measurer);
    for _ in 0..10 {
        assert_eq!(cache.measure("12", &style(20.0), &measurer), first);
    }
    assert_eq!(measurer.calls(), 1);
    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses, stats.len), (10, 1, 1));
}

#[test]
fn distinct_texts_and_styles_are_separate_lines() {
    let cache = LabelCache::new();
    let measurer = CountingMeasurer::default();
    cache.measure("12", &style(20.0), &measurer);
    cache.measure("13", &style(20.0), &measurer);
    cache.measure("12", &style(24.0), &measurer);
    cache.measure("12", &style(20.0).with_font_weight(FontWeight::BOLD), &measurer);
    cache.measure("12", &style(20.0).with_font_family("serif"), &measurer);
    assert_eq!(measurer.calls(), 5);
    assert_eq!(cache.len(), 5);
}

#[test]
fn invalidate_drops_every_style_of_one_text() {
    let cache = LabelCache::new();
    let measurer = CountingMeasurer::default();
    cache.measure("AM", &style(16.0), &measurer);
    cache.measure("AM", &style(20.0), &measurer);
    cache.measure("PM", &style(16.0), &measurer);

    assert_eq!(cache.invalidate("AM"), 2);
    assert!(!cache.contains("AM", &style(16.0)));
    assert!(cache.contains("PM", &style(16.0)));

    cache.measure("AM", &style(16.0), &measurer);
    cache.measure("PM", &style(16.0), &measurer);
    assert_eq!(measurer.calls(), 4);
}

#[test]
fn invalidating_unknown_text_is_a_no_op() {
    let cache = LabelCache::new();
    cache.measure("x", &style(10.0), &MonospacedLabelMeasurer);
    assert_eq!(cache.invalidate("never cached"), 0);
    assert_eq!(cache.len(), 1);
}

#[test]
fn least_recently_used_entry_is_evicted() {
    let cache = LabelCache::with_capacity(2);
    let measurer = CountingMeasurer::default();
    cache.measure("a", &style(10.0), &measurer);
    cache.measure("b", &style(10.0), &measurer);
    // Touch "a" so "b" becomes the eviction candidate.
    cache.measure("a", &style(10.0), &measurer);
    cache.measure("c", &style(10.0), &measurer);

    assert!(cache.contains("a", &style(10.0)));
    assert!(!cache.contains("b", &style(10.0)));
    assert_eq!(cache.stats().evictions, 1);

    cache.measure("b", &style(10.0), &measurer);
    assert_eq!(measurer.calls(), 4);
}

#[test]
fn clear_forces_remeasure() {
    let cache = LabelCache::new();
    let measurer = CountingMeasurer::default();
    cache.measure("00", &style(18.0), &measurer);
    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.stats(), LabelCacheStats::default());
    cache.measure("00", &style(18.0), &measurer);
    assert_eq!(measurer.calls(), 2);
}

#[test]
fn zero_capacity_still_caches_one_entry() {
    let cache = LabelCache::with_capacity(0);
    assert_eq!(cache.capacity(), 1);
    cache.measure("a", &style(10.0), &MonospacedLabelMeasurer);
    assert_eq!(cache.len(), 1);
}

#[test]
fn unspecified_font_size_matches_default_size() {
    let cache = LabelCache::new();
    let measurer = CountingMeasurer::default();
    cache.measure("5", &TextStyle::default(), &measurer);
    cache.measure("5", &style(TextStyle::DEFAULT_FONT_SIZE), &measurer);
    assert_eq!(measurer.calls(), 1);
}

#[test]
fn shared_cache_measures_each_key_once_across_threads() {
    let cache = Arc::new(LabelCache::new());
    let measurer = Arc::new(CountingMeasurer::default());
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            let measurer = Arc::clone(&measurer);
            thread::spawn(move || {
                for minute in 0..60 {
                    let label = format!("{minute:02}");
                    cache.measure(&label, &style(20.0), measurer.as_ref());
                    if worker == 0 && minute % 15 == 0 {
                        cache.invalidate("nonexistent");
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("measuring thread panicked");
    }
    assert_eq!(measurer.calls(), 60);
    assert_eq!(cache.len(), 60);
}

#[test]
fn styles_differing_outside_the_key_share_one_layout() {
    let cache = LabelCache::new();
    let measurer = CountingMeasurer::default();
    let tight = TextStyle {
        line_height: Some(10.0),
        ..style(20.0)
    };
    let loose = TextStyle {
        line_height: Some(50.0),
        letter_spacing: Some(2.0),
        ..style(20.0)
    };

    let first = cache.measure("12", &tight, &measurer);
    let second = cache.measure("12", &loose, &measurer);
    assert_eq!(measurer.calls(), 1);
    assert_eq!(first, second);
    assert_eq!(second, MonospacedLabelMeasurer.measure("12", &loose));
}
