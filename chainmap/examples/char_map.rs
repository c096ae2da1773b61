//! Walkthrough of the map API with `char` keys
//!
//! Prints the map after each step using the generic printer, which only
//! sees the `Dictionary` trait.

use chainmap::printer::write_dictionary;
use chainmap::{ChainMap, Dictionary, MapError, Point};
use std::fmt::Display;

fn print_dictionary<K: Display, V: Display>(title: &str, dict: &impl Dictionary<K, V>) {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_dictionary(dict, &mut out);
    println!("{}\n{}", title, out);
}

fn main() -> Result<(), MapError> {
    let map = ChainMap::new();

    map.insert('a', 1.1)?;
    map.insert('b', 2.2)?;
    print_dictionary("After adding elements:", &map);

    map.set('b', 3.3)?;
    print_dictionary("After updating 'b':", &map);

    println!("Attempt to retrieve value for key 'c':");
    match map.get(&'c') {
        Err(MapError::KeyNotFound) => println!("Key 'c' not found as expected.\n"),
        other => println!("Unexpected: {:?}\n", other),
    }

    let removed = map.remove(&'a');
    print_dictionary(
        &format!("After removing 'a': Removal successful? {}", removed),
        &map,
    );

    let removed = map.remove(&'z');
    println!(
        "Attempt to remove non-existent key 'z': Removal successful? {}\n",
        removed
    );

    if let Err(e) = map.insert('b', 4.4) {
        println!("Attempt to add duplicate key 'b': {}\n", e);
    }

    print_dictionary("Final state of the map:", &map);

    // Iteration stops at the first mutation it observes
    let mut entries = map.iter();
    let first = entries.next();
    map.set('q', 0.5)?;
    println!("First entry: {:?}", first);
    println!("After mutation: {:?}\n", entries.next());

    let places = ChainMap::new();
    places.insert(Point::new(51.5074, -0.1278), "London")?;
    places.insert(Point::new(48.8566, 2.3522), "Paris")?;
    print_dictionary("Places:", &places);

    Ok(())
}
