#![no_main]
use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use strie::Trie;

fuzz_target!(|data: (Vec<Vec<u8>>, Vec<u8>)| {
    let (keys, probe) = data;

    let trie = Trie::from_keys(&keys);
    let root = trie.root();

    let distinct: HashSet<&[u8]> = keys
        .iter()
        .map(Vec::as_slice)
        .filter(|k| !k.is_empty())
        .collect();
    assert_eq!(trie.size(), distinct.len());

    for key in &distinct {
        assert!(root.search(key).is_leaf(), "missing key {key:?}");
    }

    let m = root.search_prefix(&probe);
    assert!(m <= probe.len());
    if m > 0 {
        assert!(distinct.contains(&probe[..m]), "search_prefix returned a non-key");
    }
    assert_eq!(
        root.search(&probe).is_leaf(),
        distinct.contains(probe.as_slice())
    );

    let bytes = trie.to_bytes();
    let back = Trie::from_bytes(&bytes).unwrap();
    assert_eq!(back.to_bytes(), bytes);
    assert_eq!(back.root().search_prefix(&probe), m);
});
