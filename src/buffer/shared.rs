//! Thread-shareable handle to a [`PagedArray`].
//!
//! The page cache, the replacer and both files form one piece of state: a
//! page load can evict another page and write to the sink. The whole array
//! sits behind a single lock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::buffer::{CacheStats, PagedArray};
use crate::common::{Element, Result};

/// Cloneable, `Send + Sync` wrapper around one [`PagedArray`].
///
/// Every operation takes the lock for its full duration, including any
/// eviction and write-back it triggers.
///
/// # Example
/// ```no_run
/// use pagesort::{PagedArray, SharedPagedArray};
///
/// let array = PagedArray::open("input.bin", "output.bin", 1024)?;
/// let shared = SharedPagedArray::new(array);
/// let other = shared.clone();
/// std::thread::spawn(move || other.set(0, 42)).join().unwrap()?;
/// shared.close()?;
/// # Ok::<(), pagesort::Error>(())
/// ```
#[derive(Clone)]
pub struct SharedPagedArray {
    inner: Arc<Mutex<PagedArray>>,
}

impl SharedPagedArray {
    pub fn new(array: PagedArray) -> Self {
        Self {
            inner: Arc::new(Mutex::new(array)),
        }
    }

    pub fn get(&self, index: usize) -> Result<Element> {
        self.inner.lock().get(index)
    }

    pub fn set(&self, index: usize, value: Element) -> Result<()> {
        self.inner.lock().set(index, value)
    }

    /// Swap under one lock acquisition, so no other thread observes the
    /// half-swapped state.
    pub fn swap(&self, a: usize, b: usize) -> Result<()> {
        self.inner.lock().swap(a, b)
    }

    /// Apply `f` to the element at `index` atomically.
    pub fn update<F>(&self, index: usize, f: F) -> Result<Element>
    where
        F: FnOnce(Element) -> Element,
    {
        let mut array = self.inner.lock();
        let slot = array.get_mut(index)?;
        *slot = f(*slot);
        Ok(*slot)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn flush_all(&self) -> Result<()> {
        self.inner.lock().flush_all()
    }

    /// Recover the array if this is the last handle.
    pub fn into_inner(self) -> Option<PagedArray> {
        Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
    }

    /// Close the array if this is the last handle; otherwise only flush.
    pub fn close(self) -> Result<()> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().close(),
            Err(inner) => {
                let result = inner.lock().flush_all();
                result
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{read_elements, write_elements};
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn test_concurrent_writers() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("input.bin");
        let sink = dir.path().join("output.bin");
        write_elements(&source, &vec![0; 64]).unwrap();

        let shared = SharedPagedArray::new(PagedArray::open(&source, &sink, 4).unwrap());

        let mut handles = vec![];
        for t in 0..4 {
            let handle = shared.clone();
            handles.push(thread::spawn(move || {
                // Each thread owns every 4th element, spread over all pages.
                for i in (t..64).step_by(4) {
                    handle.set(i, i as Element).unwrap();
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        assert!(shared.stats().evictions > 0);
        shared.close().unwrap();

        let expected: Vec<Element> = (0..64).collect();
        assert_eq!(read_elements(&sink).unwrap(), expected);
    }

    #[test]
    fn test_concurrent_updates_are_atomic() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("input.bin");
        let sink = dir.path().join("output.bin");
        write_elements(&source, &[0; 8]).unwrap();

        let shared = SharedPagedArray::new(PagedArray::open(&source, &sink, 2).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let handle = shared.clone();
                thread::spawn(move || {
                    for i in 0..96 {
                        handle.update(i % 8, |v| v + 1).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let array = shared.into_inner().unwrap();
        array.close().unwrap();

        // 8 threads × 96 increments spread evenly over 8 slots.
        assert_eq!(read_elements(&sink).unwrap(), vec![96; 8]);
    }
}
