//! Layout arithmetic through the public API.

use rearrange::{encode_slice, Layout};

#[test]
fn even_group_never_shorter() {
    for n in 0..100 {
        let layout = Layout::new(n);
        assert!(layout.even_count() >= layout.odd_count());
        assert!(layout.even_count() - layout.odd_count() <= 1);
        assert_eq!(layout.even_count() + layout.odd_count(), n);
    }
}

#[test]
fn source_index_describes_encode_slice() {
    let input: Vec<usize> = (0..11).collect();
    let encoded = encode_slice(&input);
    let layout = Layout::from(input.len());
    let described: Vec<usize> = (0..input.len())
        .map(|i| layout.source_index(i).unwrap())
        .collect();
    assert_eq!(encoded, described);
}

#[test]
fn encoded_index_is_where_elements_land() {
    let input: Vec<usize> = (0..10).collect();
    let encoded = encode_slice(&input);
    let layout = Layout::new(10);
    for original in 0..10 {
        let at = layout.encoded_index(original).unwrap();
        assert_eq!(encoded[at], original);
    }
}
