//! Integration tests for the paged array.
//!
//! These exercise the cache through the public API only: eviction order,
//! read-after-write across evictions, teardown and file-level guarantees.

use pagesort::storage::{read_elements, write_elements};
use pagesort::{Element, Error, PageId, PagedArray, PagedArrayConfig};
use tempfile::tempdir;

struct Fixture {
    _dir: tempfile::TempDir,
    source: std::path::PathBuf,
    sink: std::path::PathBuf,
}

fn fixture(values: &[Element]) -> Fixture {
    let dir = tempdir().unwrap();
    let source = dir.path().join("input.bin");
    let sink = dir.path().join("output.bin");
    write_elements(&source, values).unwrap();
    Fixture {
        _dir: dir,
        source,
        sink,
    }
}

fn pages(ids: &[usize]) -> Vec<PageId> {
    ids.iter().copied().map(PageId::new).collect()
}

/// Touching a resident page moves it to the back of the eviction order
/// before the next capacity breach.
#[test]
fn test_lru_eviction_order() {
    let values: Vec<Element> = (0..20).collect();
    let fx = fixture(&values);
    let mut array = PagedArray::open(&fx.source, &fx.sink, 2).unwrap();

    // Pages 0..4 fill the cache.
    for i in [0, 2, 4, 6] {
        array.get(i).unwrap();
    }
    assert_eq!(array.resident_pages(), pages(&[0, 1, 2, 3]));

    // Touch page 0 (write) and page 1 (read): both move to the back.
    array.set(1, 100).unwrap();
    array.get(3).unwrap();
    assert_eq!(array.resident_pages(), pages(&[2, 3, 0, 1]));

    // Page 4 evicts page 2, page 5 evicts page 3.
    array.get(8).unwrap();
    assert_eq!(array.resident_pages(), pages(&[3, 0, 1, 4]));
    array.get(10).unwrap();
    assert_eq!(array.resident_pages(), pages(&[0, 1, 4, 5]));

    // Page 6 evicts page 0, the dirty one.
    array.get(12).unwrap();
    assert_eq!(array.resident_pages(), pages(&[1, 4, 5, 6]));

    let stats = array.stats();
    assert_eq!(stats.evictions, 3);
    assert_eq!(stats.pages_written, 1);
}

/// The cache never holds more than four pages, whatever the access pattern.
#[test]
fn test_cache_bound() {
    let values: Vec<Element> = (0..257).rev().collect();
    let fx = fixture(&values);
    let mut array = PagedArray::open(&fx.source, &fx.sink, 8).unwrap();

    let n = array.len();
    for step in [1, 7, 31, 64] {
        for i in (0..n).step_by(step) {
            let v = array.get(i).unwrap();
            array.set(n - 1 - i, v).unwrap();
            assert!(array.resident_pages().len() <= 4);
        }
    }
}

/// A write survives eviction of its page: the reload reads the latest value,
/// not the original source.
#[test]
fn test_read_after_write_across_eviction() {
    let values: Vec<Element> = (0..100).collect();
    let fx = fixture(&values);
    let mut array = PagedArray::open(&fx.source, &fx.sink, 10).unwrap();

    array.set(5, -5).unwrap();
    for i in [10, 20, 30, 40, 50] {
        array.get(i).unwrap();
    }
    assert!(!array.resident_pages().contains(&PageId::new(0)));

    assert_eq!(array.get(5).unwrap(), -5);
    assert_eq!(array.get(6).unwrap(), 6);

    // Second round trip: modify again, evict again.
    array.set(6, -6).unwrap();
    for i in [60, 70, 80, 90] {
        array.get(i).unwrap();
    }
    assert_eq!(array.get(5).unwrap(), -5);
    assert_eq!(array.get(6).unwrap(), -6);

    array.close().unwrap();
    let out = read_elements(&fx.sink).unwrap();
    assert_eq!(&out[..8], &[0, 1, 2, 3, 4, -5, -6, 7]);
    assert_eq!(out.len(), 100);
}

/// A page that was evicted clean and never written still reloads the source.
#[test]
fn test_clean_reload_reads_source() {
    let values: Vec<Element> = (0..50).collect();
    let fx = fixture(&values);
    let mut array = PagedArray::open(&fx.source, &fx.sink, 5).unwrap();

    for i in (0..50).step_by(5) {
        array.get(i).unwrap();
    }
    assert_eq!(array.stats().pages_written, 0);
    assert_eq!(array.get(3).unwrap(), 3);
}

/// Source length is a multiple of the page footprint: sink has the same length.
#[test]
fn test_length_preserved_aligned() {
    let values: Vec<Element> = (0..64).map(|i| (i * 37) % 64).collect();
    let fx = fixture(&values);

    let mut array = PagedArray::open(&fx.source, &fx.sink, 8).unwrap();
    assert_eq!(array.capacity(), array.len());
    array.swap(0, 63).unwrap();
    array.close().unwrap();

    assert_eq!(
        std::fs::metadata(&fx.sink).unwrap().len(),
        std::fs::metadata(&fx.source).unwrap().len()
    );
}

/// A partial final page is read and written at its true length.
#[test]
fn test_partial_final_page() {
    let fx = fixture(&[9, 8, 7, 6, 5, 4, 3]);
    let mut array = PagedArray::open(&fx.source, &fx.sink, 3).unwrap();

    assert_eq!(array.len(), 7);
    assert_eq!(array.page_count(), 3);
    assert_eq!(array.capacity(), 9);
    assert_eq!(array.get(6).unwrap(), 3);
    assert!(matches!(
        array.get(7),
        Err(Error::IndexOutOfBounds { index: 7, len: 7 })
    ));

    array.set(6, 0).unwrap();
    array.close().unwrap();

    assert_eq!(std::fs::metadata(&fx.sink).unwrap().len(), 28);
    assert_eq!(read_elements(&fx.sink).unwrap(), vec![9, 8, 7, 6, 5, 4, 0]);
}

/// Untouched arrays still produce a complete sink.
#[test]
fn test_untouched_array_copied() {
    let values: Vec<Element> = (0..30).collect();
    let fx = fixture(&values);

    let array = PagedArray::open(&fx.source, &fx.sink, 4).unwrap();
    array.close().unwrap();

    assert_eq!(read_elements(&fx.sink).unwrap(), values);
}

#[test]
fn test_empty_source() {
    let fx = fixture(&[]);
    let mut array = PagedArray::open(&fx.source, &fx.sink, 4).unwrap();

    assert!(array.is_empty());
    assert_eq!(array.page_count(), 0);
    assert!(array.get(0).is_err());
    array.close().unwrap();

    assert_eq!(std::fs::metadata(&fx.sink).unwrap().len(), 0);
}

#[test]
fn test_sink_is_truncated() {
    let fx = fixture(&[1, 2]);
    write_elements(&fx.sink, &[7; 100]).unwrap();

    let array = PagedArray::open(&fx.source, &fx.sink, 4).unwrap();
    array.close().unwrap();

    assert_eq!(read_elements(&fx.sink).unwrap(), vec![1, 2]);
}

#[test]
fn test_missing_source_is_io_error() {
    let dir = tempdir().unwrap();
    let result = PagedArray::open(
        dir.path().join("missing.bin"),
        dir.path().join("out.bin"),
        4,
    );
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_misaligned_source_rejected() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("odd.bin");
    std::fs::write(&source, [1u8, 2, 3, 4, 5, 6]).unwrap();

    let result = PagedArray::open(&source, dir.path().join("out.bin"), 4);
    assert!(matches!(result, Err(Error::MisalignedFile { len: 6 })));
}

/// Arrays own all their state; two can run side by side.
#[test]
fn test_independent_arrays() {
    let a = fixture(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    let b = fixture(&[100, 99, 98, 97, 96, 95, 94, 93, 92, 91]);

    let mut first = PagedArray::open(&a.source, &a.sink, 1).unwrap();
    let mut second = PagedArray::open(&b.source, &b.sink, 1).unwrap();

    for i in 0..10 {
        let x = first.get(i).unwrap();
        let y = second.get(i).unwrap();
        first.set(i, x + y).unwrap();
    }
    first.close().unwrap();
    second.close().unwrap();

    assert_eq!(read_elements(&a.sink).unwrap(), vec![101; 10]);
    assert_eq!(read_elements(&b.sink).unwrap(), read_elements(&b.source).unwrap());
}

#[test]
fn test_custom_capacity() {
    let values: Vec<Element> = (0..16).collect();
    let fx = fixture(&values);
    let config = PagedArrayConfig::default()
        .with_page_size(2)
        .with_cache_capacity(2);
    let mut array = PagedArray::with_config(&fx.source, &fx.sink, config).unwrap();

    for i in (0..16).step_by(2) {
        array.get(i).unwrap();
    }
    assert_eq!(array.cache_capacity(), 2);
    assert_eq!(array.resident_pages(), pages(&[6, 7]));
    assert_eq!(array.stats().evictions, 6);
}
