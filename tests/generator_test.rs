//! Generator output feeds straight into the sorter.

use pagesort::generator::generate_file;
use pagesort::storage::read_elements;
use pagesort::{Algorithm, PagedArray};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

#[test]
fn test_generate_then_sort() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let output = dir.path().join("output.bin");

    let count = generate_file(&input, 4 * 1000, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(count, 1000);

    let mut array = PagedArray::open(&input, &output, 64).unwrap();
    assert_eq!(array.len(), 1000);
    Algorithm::QuickSort.run(&mut array).unwrap();
    array.close().unwrap();

    let mut expected = read_elements(&input).unwrap();
    assert!(expected.iter().all(|&v| v >= 0));
    expected.sort_unstable();
    assert_eq!(read_elements(&output).unwrap(), expected);
}

#[test]
fn test_generate_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no/such/dir/out.bin");

    let result = generate_file(&path, 16, &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(pagesort::Error::Io(_))));
}
